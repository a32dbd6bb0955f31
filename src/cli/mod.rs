//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::{Config, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// Automata Workbench CLI
#[derive(Parser, Debug)]
#[command(name = "automata-workbench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an automaton and its classification
    Show {
        /// Path to the automaton description file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, env = "AUTOMATA_OUTPUT")]
        output: Option<OutputFormat>,
    },

    /// Print the classification string (deterministic / complete / standard)
    Classify {
        /// Path to the automaton description file
        file: PathBuf,
    },

    /// Rewrite the automaton to a single start state
    Standardize {
        /// Path to the automaton description file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, env = "AUTOMATA_OUTPUT")]
        output: Option<OutputFormat>,
    },

    /// Make the transition function total via a sink state
    Complete {
        /// Path to the automaton description file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, env = "AUTOMATA_OUTPUT")]
        output: Option<OutputFormat>,
    },

    /// Convert to an equivalent deterministic automaton (subset construction)
    Determinize {
        /// Path to the automaton description file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, env = "AUTOMATA_OUTPUT")]
        output: Option<OutputFormat>,
    },
}

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text table
    Table,
    /// JSON output
    Json,
}

impl OutputFormat {
    /// Resolve a command-line flag against the configured default.
    pub fn resolve(flag: Option<Self>, config: &Config) -> Self {
        flag.unwrap_or(match config.default.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        })
    }
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    match args.command {
        Commands::Show { .. } => commands::show::execute(args, config),
        Commands::Classify { .. } => commands::classify::execute(args, config),
        Commands::Standardize { .. } => commands::standardize::execute(args, config),
        Commands::Complete { .. } => commands::complete::execute(args, config),
        Commands::Determinize { .. } => commands::determinize::execute(args, config),
    }
}
