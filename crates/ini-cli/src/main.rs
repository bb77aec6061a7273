//! INI Editor CLI
//!
//! Edits values in section/key configuration files while preserving every
//! comment, blank line, and untouched byte of the original.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} INI configuration editor", "ini-edit".green().bold());
            println!();
            println!("Run {} for available commands.", "ini-edit --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List { file, comments } => commands::run_list(&file, comments),
        Commands::Get { file, section, key } => commands::run_get(&file, &section, &key),
        Commands::Set {
            file,
            edits,
            dry_run,
            expect_name,
        } => commands::run_set(&file, &edits, dry_run, expect_name.as_deref()),
        Commands::Classify { file } => commands::run_classify(&file),
    }
}
