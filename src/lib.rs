//! Automata Workbench
//!
//! A command-line workbench for classifying and transforming finite automata.
//!
//! This library provides functionality for:
//! - Loading automaton descriptions from a line-oriented text format
//! - Classifying automata (deterministic, complete, standard)
//! - Standardizing to a single start state
//! - Completing the transition function via a sink state
//! - Determinizing via subset construction, epsilon transitions included
//! - Rendering automata as a states-by-symbols table or as JSON

pub mod automaton;
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;

pub use config::Config;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
