use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tv", about = concat!("[#] taskview v", env!("CARGO_PKG_VERSION"), " - задачи в терминале"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the tasks JSON file
    #[arg(default_value = "tasks.json")]
    pub tasks_file: String,

    /// Initial filter query string, e.g. "show_done_task=false&sort_order=asc"
    #[arg(long, global = true)]
    pub filters: Option<String>,

    /// Engineer name for the my-tasks filter (overrides taskview.toml)
    #[arg(long, global = true)]
    pub assignee: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one task to stdout, with long descriptions folded
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Zero-based index of the task in the file
    pub index: usize,

    /// Print the full description instead of the folded rendering
    #[arg(long)]
    pub full: bool,
}
