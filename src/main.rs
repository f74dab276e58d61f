use std::path::Path;

use clap::Parser;
use taskview::cli::commands::{Cli, Commands};
use taskview::cli::handlers;
use taskview::query::QueryParams;

fn main() {
    let cli = Cli::parse();

    let initial_query = cli
        .filters
        .as_deref()
        .map(QueryParams::parse)
        .unwrap_or_default();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = taskview::tui::run(
                Path::new(&cli.tasks_file),
                initial_query,
                cli.assignee.clone(),
            ) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Show(args)) => {
            if let Err(e) = handlers::cmd_show(&cli.tasks_file, args) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
