//! Automaton value type and builder operations

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub type StateId = String;

/// Reserved symbol denoting the empty transition. It is excluded from
/// completeness and determinism obligations and never needs to be declared
/// in the alphabet.
pub const EPSILON: &str = "eps";

/// A nondeterministic finite automaton with optional epsilon transitions
/// and possibly more than one start state.
///
/// All collections are ordered so that every iteration in the crate (table
/// rows, alphabet columns, subset-construction naming) is deterministic.
/// The transition relation is a two-level map `state -> symbol -> set of
/// destinations`; absence of an entry means "no transition defined", and a
/// present destination set is never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automaton {
    pub states: BTreeSet<StateId>,
    pub alphabet: BTreeSet<String>,
    pub start_states: BTreeSet<StateId>,
    pub accept_states: BTreeSet<StateId>,
    pub transitions: BTreeMap<StateId, BTreeMap<String, BTreeSet<StateId>>>,
}

impl Automaton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state. Idempotent.
    pub fn add_state(&mut self, state: &str) {
        self.states.insert(state.to_string());
    }

    /// Declare an input symbol. Idempotent.
    pub fn add_symbol(&mut self, symbol: &str) {
        self.alphabet.insert(symbol.to_string());
    }

    /// Mark a state as a start state. Idempotent.
    pub fn add_start_state(&mut self, state: &str) {
        self.start_states.insert(state.to_string());
    }

    /// Mark a state as an accept state. Idempotent.
    pub fn add_accept_state(&mut self, state: &str) {
        self.accept_states.insert(state.to_string());
    }

    /// Record a transition. Idempotent; destination sets stay non-empty
    /// because an entry is only created together with its first destination.
    pub fn add_transition(&mut self, from: &str, symbol: &str, to: &str) {
        self.transitions
            .entry(from.to_string())
            .or_default()
            .entry(symbol.to_string())
            .or_default()
            .insert(to.to_string());
    }

    /// Destination set for a (state, symbol) pair, if any transition is
    /// defined for it.
    pub fn destinations(&self, state: &str, symbol: &str) -> Option<&BTreeSet<StateId>> {
        self.transitions.get(state)?.get(symbol)
    }

    /// All outgoing transitions of a state, if any are defined.
    pub fn state_transitions(&self, state: &str) -> Option<&BTreeMap<String, BTreeSet<StateId>>> {
        self.transitions.get(state)
    }

    /// The alphabet with the epsilon symbol filtered out.
    pub fn input_symbols(&self) -> impl Iterator<Item = &str> {
        self.alphabet
            .iter()
            .map(String::as_str)
            .filter(|s| *s != EPSILON)
    }

    pub fn has_epsilon_transitions(&self) -> bool {
        self.transitions
            .values()
            .any(|by_symbol| by_symbol.contains_key(EPSILON))
    }

    /// A label not colliding with any existing state: `base`, or `base_1`,
    /// `base_2`, ... on collision.
    pub fn fresh_label(&self, base: &str) -> StateId {
        if !self.states.contains(base) {
            return base.to_string();
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}_{}", base, n);
            if !self.states.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Number of (from, symbol, to) triples in the transition relation.
    pub fn transition_count(&self) -> usize {
        self.transitions
            .values()
            .flat_map(|by_symbol| by_symbol.values())
            .map(|dests| dests.len())
            .sum()
    }

    /// Get automaton statistics
    pub fn stats(&self) -> AutomatonStats {
        AutomatonStats {
            total_states: self.states.len(),
            total_symbols: self.input_symbols().count(),
            total_transitions: self.transition_count(),
            start_states: self.start_states.len(),
            accept_states: self.accept_states.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AutomatonStats {
    pub total_states: usize,
    pub total_symbols: usize,
    pub total_transitions: usize,
    pub start_states: usize,
    pub accept_states: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_is_idempotent() {
        let mut fa = Automaton::new();
        fa.add_state("q0");
        fa.add_state("q0");
        fa.add_symbol("a");
        fa.add_symbol("a");
        fa.add_start_state("q0");
        fa.add_start_state("q0");
        fa.add_accept_state("q0");
        fa.add_accept_state("q0");
        fa.add_transition("q0", "a", "q0");
        fa.add_transition("q0", "a", "q0");

        assert_eq!(fa.states.len(), 1);
        assert_eq!(fa.alphabet.len(), 1);
        assert_eq!(fa.start_states.len(), 1);
        assert_eq!(fa.accept_states.len(), 1);
        assert_eq!(fa.transition_count(), 1);
    }

    #[test]
    fn test_destinations() {
        let mut fa = Automaton::new();
        fa.add_state("q0");
        fa.add_state("q1");
        fa.add_symbol("a");
        fa.add_transition("q0", "a", "q0");
        fa.add_transition("q0", "a", "q1");

        let dests = fa.destinations("q0", "a").unwrap();
        assert_eq!(dests.len(), 2);
        assert!(dests.contains("q1"));
        assert!(fa.destinations("q1", "a").is_none());
    }

    #[test]
    fn test_input_symbols_exclude_epsilon() {
        let mut fa = Automaton::new();
        fa.add_symbol("a");
        fa.add_symbol(EPSILON);
        fa.add_symbol("b");

        let symbols: Vec<&str> = fa.input_symbols().collect();
        assert_eq!(symbols, vec!["a", "b"]);
    }

    #[test]
    fn test_has_epsilon_transitions() {
        let mut fa = Automaton::new();
        fa.add_state("q0");
        fa.add_state("q1");
        fa.add_symbol("a");
        fa.add_transition("q0", "a", "q1");
        assert!(!fa.has_epsilon_transitions());

        fa.add_transition("q0", EPSILON, "q1");
        assert!(fa.has_epsilon_transitions());
    }

    #[test]
    fn test_fresh_label_avoids_collisions() {
        let mut fa = Automaton::new();
        assert_eq!(fa.fresh_label("sink"), "sink");

        fa.add_state("sink");
        fa.add_state("sink_1");
        assert_eq!(fa.fresh_label("sink"), "sink_2");
    }

    #[test]
    fn test_stats() {
        let mut fa = Automaton::new();
        fa.add_state("q0");
        fa.add_state("q1");
        fa.add_symbol("a");
        fa.add_start_state("q0");
        fa.add_accept_state("q1");
        fa.add_transition("q0", "a", "q1");
        fa.add_transition("q0", EPSILON, "q1");

        let stats = fa.stats();
        assert_eq!(stats.total_states, 2);
        assert_eq!(stats.total_symbols, 1);
        assert_eq!(stats.total_transitions, 2);
        assert_eq!(stats.start_states, 1);
        assert_eq!(stats.accept_states, 1);
    }
}
