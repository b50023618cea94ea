use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;

use commands::search::SearchArgs;

/// catalog - Search a seeded category catalog
#[derive(Parser)]
#[command(name = "catalog")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search categories and print one page of results as JSON
    Search(SearchArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search(args) => commands::search::execute(args).await,
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);

            if let Some(source) = e.source() {
                eprintln!("\n{} {}", "Caused by:".yellow(), source);
            }

            std::process::exit(1);
        }
    }
}
