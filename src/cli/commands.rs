//! CLI command implementations
//!
//! This module contains the implementation for each CLI command.

use crate::automaton::Automaton;
use crate::cli::OutputFormat;
use crate::{Config, Result, cli::Cli};
use std::path::Path;

/// Load an automaton and log its shape
fn load(path: &Path) -> Result<Automaton> {
    tracing::info!("Loading automaton from {:?}", path);
    let fa = crate::parser::load_from_file(path)?;

    let stats = fa.stats();
    tracing::info!(
        "Loaded {} states, {} symbols, {} transitions",
        stats.total_states,
        stats.total_symbols,
        stats.total_transitions
    );
    Ok(fa)
}

/// Render an automaton and its classification to stdout
fn render(fa: &Automaton, format: OutputFormat) -> Result<()> {
    let report = crate::automaton::classify(fa);
    match format {
        OutputFormat::Table => {
            crate::cli::output::output_table(&mut std::io::stdout(), fa, &report)
        }
        OutputFormat::Json => crate::cli::output::output_json(&mut std::io::stdout(), fa, &report),
    }
}

/// Show command implementation
pub mod show {
    use super::*;
    use crate::cli::Commands;

    /// Execute the show command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let (file, output) = match args.command {
            Commands::Show { file, output } => (file, output),
            _ => unreachable!("show::execute called with wrong command"),
        };

        let fa = load(&file)?;
        render(&fa, OutputFormat::resolve(output, &config))
    }
}

/// Classify command implementation
pub mod classify {
    use super::*;
    use crate::cli::Commands;

    /// Execute the classify command
    pub fn execute(args: Cli, _config: Config) -> Result<()> {
        let file = match args.command {
            Commands::Classify { file } => file,
            _ => unreachable!("classify::execute called with wrong command"),
        };

        let fa = load(&file)?;
        println!("{}", crate::automaton::classify(&fa));
        Ok(())
    }
}

/// Standardize command implementation
pub mod standardize {
    use super::*;
    use crate::cli::Commands;

    /// Execute the standardize command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let (file, output) = match args.command {
            Commands::Standardize { file, output } => (file, output),
            _ => unreachable!("standardize::execute called with wrong command"),
        };

        let mut fa = load(&file)?;
        match fa.standardize() {
            Some(state) => tracing::info!("Added start state '{}'", state),
            None => tracing::info!("Automaton is already standard"),
        }

        render(&fa, OutputFormat::resolve(output, &config))
    }
}

/// Complete command implementation
pub mod complete {
    use super::*;
    use crate::cli::Commands;

    /// Execute the complete command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let (file, output) = match args.command {
            Commands::Complete { file, output } => (file, output),
            _ => unreachable!("complete::execute called with wrong command"),
        };

        let mut fa = load(&file)?;
        match fa.complete() {
            Some(sink) => tracing::info!("Added sink state '{}'", sink),
            None => tracing::info!("Automaton is already complete"),
        }

        render(&fa, OutputFormat::resolve(output, &config))
    }
}

/// Determinize command implementation
pub mod determinize {
    use super::*;
    use crate::cli::Commands;

    /// Execute the determinize command
    pub fn execute(args: Cli, config: Config) -> Result<()> {
        let (file, output) = match args.command {
            Commands::Determinize { file, output } => (file, output),
            _ => unreachable!("determinize::execute called with wrong command"),
        };

        let fa = load(&file)?;
        let dfa = fa.determinize();
        tracing::info!(
            "Determinized {} states into {}",
            fa.states.len(),
            dfa.states.len()
        );

        render(&dfa, OutputFormat::resolve(output, &config))
    }
}
