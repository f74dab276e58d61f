use std::path::Path;

use crate::cli::commands::ShowArgs;
use crate::io::task_io::load_tasks;
use crate::spoiler::Spoiler;

/// Error type for CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] crate::io::task_io::LoadError),
    #[error("no task at index {0}")]
    NoSuchTask(usize),
}

/// `tv <file> show <index>`: print the task the way the detail view first
/// renders it — folded when the description is long.
pub fn cmd_show(tasks_file: &str, args: ShowArgs) -> Result<(), CliError> {
    let list = load_tasks(Path::new(tasks_file))?;
    let task = list.get(args.index).ok_or(CliError::NoSuchTask(args.index))?;

    let mut spoiler = Spoiler::new(task.text.clone());
    if args.full {
        spoiler.toggle();
    }

    println!("{}", task.header);
    println!(
        "срок: {}  {}",
        task.completion_time.format("%d.%m.%Y %H:%M"),
        if task.is_done { "[выполнено]" } else { "[в работе]" }
    );
    if !task.engineers.is_empty() {
        println!("исполнители: {}", task.engineers.join(", "));
    }
    if !spoiler.display_text().is_empty() {
        println!();
        println!("{}", spoiler.display_text());
    }
    if spoiler.is_collapsible() && !args.full {
        println!("[{}: --full]", spoiler.toggle_label());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_index_is_an_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        use std::io::Write;
        write!(f, r#"{{"tasks": []}}"#).unwrap();
        let err = cmd_show(
            f.path().to_str().unwrap(),
            ShowArgs {
                index: 0,
                full: false,
            },
        )
        .unwrap_err();
        assert!(matches!(err, CliError::NoSuchTask(0)));
    }
}
