//! In-place transformations
//!
//! `standardize` rewrites the automaton to a single start state and
//! `complete` makes the transition function total via a sink state. Both
//! mutate the automaton and report the state they created, if any.

use super::{Automaton, StateId};
use std::collections::BTreeSet;

impl Automaton {
    /// Rewrite to exactly one start state. Returns the created start label,
    /// or `None` when the automaton was already standard.
    ///
    /// The new start state receives a copy of every original start state's
    /// outgoing transitions (the originals keep theirs), and is accepting
    /// when any original start state was, so empty-input acceptance is
    /// preserved.
    pub fn standardize(&mut self) -> Option<StateId> {
        if self.is_standard() {
            return None;
        }

        let new_start = self.fresh_label("start");
        self.add_state(&new_start);

        // Collect first, then apply: copying while iterating the start set
        // would alias the transition map.
        let mut copied: Vec<(String, StateId)> = Vec::new();
        let mut accepting = false;
        for start in &self.start_states {
            if self.accept_states.contains(start) {
                accepting = true;
            }
            if let Some(by_symbol) = self.transitions.get(start) {
                for (symbol, dests) in by_symbol {
                    for dest in dests {
                        copied.push((symbol.clone(), dest.clone()));
                    }
                }
            }
        }
        for (symbol, dest) in copied {
            self.add_transition(&new_start, &symbol, &dest);
        }
        if accepting {
            self.add_accept_state(&new_start);
        }

        self.start_states = BTreeSet::from([new_start.clone()]);

        tracing::debug!("Standardized with new start state '{}'", new_start);
        Some(new_start)
    }

    /// Make the transition function total over the non-epsilon alphabet.
    /// Returns the created sink label, or `None` when the automaton was
    /// already complete.
    ///
    /// Every missing (state, symbol) entry is filled with a transition to a
    /// fresh sink state, which loops to itself on every symbol and is never
    /// accepting.
    pub fn complete(&mut self) -> Option<StateId> {
        if self.is_complete() {
            return None;
        }

        let sink = self.fresh_label("sink");
        self.add_state(&sink);

        let mut missing: Vec<(StateId, String)> = Vec::new();
        for state in &self.states {
            if *state == sink {
                continue;
            }
            let defined = self.transitions.get(state);
            for symbol in self.input_symbols() {
                if !defined.is_some_and(|by_symbol| by_symbol.contains_key(symbol)) {
                    missing.push((state.clone(), symbol.to_string()));
                }
            }
        }
        for (state, symbol) in missing {
            self.add_transition(&state, &symbol, &sink);
        }

        let loops: Vec<String> = self.input_symbols().map(str::to_string).collect();
        for symbol in loops {
            self.add_transition(&sink, &symbol, &sink);
        }

        tracing::debug!("Completed with sink state '{}'", sink);
        Some(sink)
    }
}
