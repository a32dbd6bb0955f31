//! Automaton classification
//!
//! Classifies an automaton along the three classic axes: deterministic,
//! complete, and standard.

use super::{Automaton, EPSILON};
use std::fmt;

/// Classification report carrying the three predicate results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationReport {
    pub deterministic: bool,
    pub complete: bool,
    pub standard: bool,
}

impl ClassificationReport {
    /// The labels of the predicates that hold, in fixed order.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.deterministic {
            labels.push("deterministic");
        }
        if self.complete {
            labels.push("complete");
        }
        if self.standard {
            labels.push("standard");
        }
        labels
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();
        if labels.is_empty() {
            write!(f, "not recognized")
        } else {
            write!(f, "{}", labels.join(" "))
        }
    }
}

impl Automaton {
    /// False if any (state, symbol) pair has more than one destination, or
    /// any state has an outgoing epsilon transition. A state with no
    /// recorded transitions does not violate determinism (only
    /// completeness).
    pub fn is_deterministic(&self) -> bool {
        self.transitions.values().all(|by_symbol| {
            by_symbol
                .iter()
                .all(|(symbol, dests)| symbol != EPSILON && dests.len() <= 1)
        })
    }

    /// False if any state has no transition entry at all, or lacks an entry
    /// for some non-epsilon alphabet symbol.
    pub fn is_complete(&self) -> bool {
        self.states.iter().all(|state| {
            self.transitions.get(state).is_some_and(|by_symbol| {
                self.input_symbols().all(|s| by_symbol.contains_key(s))
            })
        })
    }

    /// True iff exactly one start state exists.
    pub fn is_standard(&self) -> bool {
        self.start_states.len() == 1
    }
}

/// Classify an automaton
pub fn classify(fa: &Automaton) -> ClassificationReport {
    ClassificationReport {
        deterministic: fa.is_deterministic(),
        complete: fa.is_complete(),
        standard: fa.is_standard(),
    }
}
