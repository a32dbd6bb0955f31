//! Parser module - Text loader for automaton descriptions
//!
//! The input is line-oriented with whitespace-separated tokens:
//!
//! ```text
//! States: q0 q1 q2
//! Alphabet: a b
//! Start: q0
//! Accept: q2
//! Transitions:
//! q0 a q1
//! q1 b q2
//! ```
//!
//! After `Transitions:`, each line is a `from symbol to` triple until a
//! blank line or end of input. Epsilon transitions use the `eps` symbol
//! and need no `Alphabet:` declaration.

use crate::automaton::{Automaton, EPSILON};
use crate::error::{Error, Result};
use std::path::Path;

/// Load an automaton description from a file.
///
/// A missing file is reported as a warning and yields an empty automaton;
/// any other I/O failure or a malformed description is an error.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Automaton> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => parse(&contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("File {:?} not found, continuing with an empty automaton", path);
            Ok(Automaton::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Parse an automaton description from text.
pub fn parse(input: &str) -> Result<Automaton> {
    let mut fa = Automaton::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("States:") {
            for state in rest.split_whitespace() {
                fa.add_state(state);
            }
        } else if let Some(rest) = line.strip_prefix("Alphabet:") {
            for symbol in rest.split_whitespace() {
                fa.add_symbol(symbol);
            }
        } else if let Some(rest) = line.strip_prefix("Start:") {
            for state in rest.split_whitespace() {
                check_state(&fa, state, "start state")?;
                fa.add_start_state(state);
            }
        } else if let Some(rest) = line.strip_prefix("Accept:") {
            for state in rest.split_whitespace() {
                check_state(&fa, state, "accept state")?;
                fa.add_accept_state(state);
            }
        } else if line.starts_with("Transitions:") {
            for line in lines.by_ref() {
                let line = line.trim();
                if line.is_empty() {
                    break;
                }
                parse_transition(&mut fa, line)?;
            }
        }
    }

    Ok(fa)
}

fn parse_transition(fa: &mut Automaton, line: &str) -> Result<()> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [from, symbol, to] = tokens[..] else {
        return Err(Error::parser(format!(
            "Malformed transition line '{}': expected 'from symbol to'",
            line
        )));
    };

    check_state(fa, from, "transition source")?;
    check_state(fa, to, "transition destination")?;
    if symbol != EPSILON && !fa.alphabet.contains(symbol) {
        return Err(Error::parser(format!(
            "Transition symbol '{}' is not in the alphabet",
            symbol
        )));
    }

    fa.add_transition(from, symbol, to);
    Ok(())
}

fn check_state(fa: &Automaton, state: &str, role: &str) -> Result<()> {
    if fa.states.contains(state) {
        Ok(())
    } else {
        Err(Error::parser(format!(
            "Unknown {} '{}': states must be declared before use",
            role, state
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
States: q0 q1 q2
Alphabet: a b
Start: q0
Accept: q2
Transitions:
q0 a q1
q0 eps q2
q1 b q2

";

    #[test]
    fn test_parse_sample() {
        let fa = parse(SAMPLE).unwrap();
        assert_eq!(fa.states.len(), 3);
        assert_eq!(fa.alphabet.len(), 2);
        assert_eq!(fa.start_states.iter().next().unwrap(), "q0");
        assert!(fa.accept_states.contains("q2"));
        assert_eq!(fa.transition_count(), 3);
        assert!(fa.destinations("q0", "a").unwrap().contains("q1"));
        assert!(fa.has_epsilon_transitions());
    }

    #[test]
    fn test_transitions_stop_at_blank_line() {
        let input = "\
States: q0
Alphabet: a
Transitions:
q0 a q0

Start: q0
";
        let fa = parse(input).unwrap();
        assert_eq!(fa.transition_count(), 1);
        // Sections after the blank line are still processed
        assert!(fa.start_states.contains("q0"));
    }

    #[test]
    fn test_malformed_transition_line_is_fatal() {
        let input = "\
States: q0
Alphabet: a
Transitions:
q0 a
";
        let err = parse(input).unwrap_err();
        assert!(err.to_string().contains("Malformed transition line"));
    }

    #[test]
    fn test_undeclared_state_is_fatal() {
        let input = "\
States: q0
Alphabet: a
Transitions:
q0 a q9
";
        assert!(parse(input).is_err());

        let input = "States: q0\nStart: q9\n";
        assert!(parse(input).is_err());
    }

    #[test]
    fn test_undeclared_symbol_is_fatal() {
        let input = "\
States: q0
Alphabet: a
Transitions:
q0 c q0
";
        assert!(parse(input).is_err());
    }

    #[test]
    fn test_epsilon_needs_no_declaration() {
        let input = "\
States: q0 q1
Alphabet: a
Transitions:
q0 eps q1
";
        let fa = parse(input).unwrap();
        assert!(fa.has_epsilon_transitions());
        assert!(!fa.alphabet.contains(EPSILON));
    }

    #[test]
    fn test_missing_file_yields_empty_automaton() {
        let fa = load_from_file("definitely/not/a/real/path.txt").unwrap();
        assert!(fa.states.is_empty());
        assert!(fa.transitions.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let fa = parse("").unwrap();
        assert!(fa.states.is_empty());
        assert!(fa.start_states.is_empty());
    }
}
