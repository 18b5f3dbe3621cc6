mod commands;
mod config;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agendo")]
#[command(about = "Import .ics calendar exports into your agendo task list")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an .ics export and add its events as tasks
    Import {
        /// Path to the .ics file
        file: PathBuf,

        /// Parse and print without persisting
        #[arg(long)]
        dry_run: bool,

        /// Print the parsed records as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// Show the stored task list
    List,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import {
            file,
            dry_run,
            json,
        } => commands::import::run(&file, dry_run, json),
        Commands::List => commands::list::run(),
    }
}
