//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// INI Editor - Edit configuration values without disturbing the file
#[derive(Parser, Debug)]
#[command(name = "ini-edit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List sections and entries
    List {
        /// Configuration file to read
        file: PathBuf,

        /// Include comment text next to each item
        #[arg(long)]
        comments: bool,
    },

    /// Print the value of a single entry
    Get {
        /// Configuration file to read
        file: PathBuf,

        /// Section name (text between the brackets)
        section: String,

        /// Entry key within the section
        key: String,
    },

    /// Update entry values in place, preserving everything else
    ///
    /// Examples:
    ///   ini-edit set game.ini General.bEnabled=false
    ///   ini-edit set game.ini Display.uWidth=2560 Display.uHeight=1440
    ///   ini-edit set game.ini General.bEnabled=false --dry-run
    Set {
        /// Configuration file to edit
        file: PathBuf,

        /// Edits in SECTION.KEY=VALUE form
        #[arg(required = true)]
        edits: Vec<String>,

        /// Print the result instead of writing the file
        #[arg(long)]
        dry_run: bool,

        /// Refuse to touch a file not carrying this exact name
        #[arg(long)]
        expect_name: Option<String>,
    },

    /// Show how each value would be presented for editing
    Classify {
        /// Configuration file to read
        file: PathBuf,
    },
}
