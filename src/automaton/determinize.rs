//! Epsilon closure and determinization (subset construction)

use super::{Automaton, EPSILON, StateId};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

impl Automaton {
    /// All states reachable from `state` via zero or more epsilon
    /// transitions, including `state` itself.
    ///
    /// Work-list DFS; each state is processed at most once, so the
    /// traversal terminates on any finite automaton.
    pub fn epsilon_closure(&self, state: &str) -> BTreeSet<StateId> {
        let mut closure = BTreeSet::new();
        let mut stack = vec![state.to_string()];

        while let Some(s) = stack.pop() {
            if !closure.insert(s.clone()) {
                continue;
            }
            if let Some(dests) = self.destinations(&s, EPSILON) {
                for dest in dests {
                    if !closure.contains(dest) {
                        stack.push(dest.clone());
                    }
                }
            }
        }

        closure
    }

    /// Epsilon closure of a set of states.
    fn epsilon_closure_set(&self, states: &BTreeSet<StateId>) -> BTreeSet<StateId> {
        let mut closure = BTreeSet::new();
        for state in states {
            closure.extend(self.epsilon_closure(state));
        }
        closure
    }

    /// Union of the direct (non-epsilon) destinations for `symbol` over a
    /// set of states, expanded by epsilon closure.
    fn move_on_symbol(&self, states: &BTreeSet<StateId>, symbol: &str) -> BTreeSet<StateId> {
        let mut reached = BTreeSet::new();
        for state in states {
            if let Some(dests) = self.destinations(state, symbol) {
                reached.extend(dests.iter().cloned());
            }
        }
        self.epsilon_closure_set(&reached)
    }

    /// Equivalent deterministic automaton via subset construction.
    ///
    /// An already-deterministic automaton comes back unchanged. Otherwise
    /// each reachable set of original states becomes one new state, named
    /// `s0`, `s1`, ... in discovery order; discovery order is itself
    /// deterministic because states, symbols and subsets iterate sorted.
    /// The construction seeds from the union of the epsilon closures of
    /// all start states, and `s0` is the sole start state of the result.
    /// The result carries the non-epsilon alphabet and may be incomplete;
    /// run [`Automaton::complete`] afterwards if totality is required.
    pub fn determinize(&self) -> Automaton {
        if self.is_deterministic() {
            return self.clone();
        }

        let mut dfa = Automaton::new();
        for symbol in self.input_symbols() {
            dfa.add_symbol(symbol);
        }

        let seed = self.epsilon_closure_set(&self.start_states);
        if seed.is_empty() {
            // No start states: nothing is reachable
            return dfa;
        }

        // Subsets compare by membership; each maps to its synthesized name
        let mut names: BTreeMap<BTreeSet<StateId>, StateId> = BTreeMap::new();
        let mut queue: VecDeque<(BTreeSet<StateId>, StateId)> = VecDeque::new();

        let start_name = format!("s{}", names.len());
        names.insert(seed.clone(), start_name.clone());
        dfa.add_state(&start_name);
        dfa.add_start_state(&start_name);
        queue.push_back((seed, start_name));

        while let Some((subset, name)) = queue.pop_front() {
            if subset.iter().any(|s| self.accept_states.contains(s)) {
                dfa.add_accept_state(&name);
            }

            for symbol in self.input_symbols() {
                let next = self.move_on_symbol(&subset, symbol);
                if next.is_empty() {
                    continue;
                }

                let next_name = if let Some(existing) = names.get(&next) {
                    existing.clone()
                } else {
                    let fresh = format!("s{}", names.len());
                    names.insert(next.clone(), fresh.clone());
                    dfa.add_state(&fresh);
                    queue.push_back((next, fresh.clone()));
                    fresh
                };

                dfa.add_transition(&name, symbol, &next_name);
            }
        }

        tracing::debug!(
            "Determinized {} states into {} subset states",
            self.states.len(),
            dfa.states.len()
        );
        dfa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epsilon_nfa() -> Automaton {
        // q0 -eps-> q1 -a-> q2 (accept), start q0
        let mut fa = Automaton::new();
        for state in ["q0", "q1", "q2"] {
            fa.add_state(state);
        }
        fa.add_symbol("a");
        fa.add_start_state("q0");
        fa.add_accept_state("q2");
        fa.add_transition("q0", EPSILON, "q1");
        fa.add_transition("q1", "a", "q2");
        fa
    }

    #[test]
    fn test_closure_is_reflexive() {
        let fa = epsilon_nfa();
        assert!(fa.epsilon_closure("q2").contains("q2"));
    }

    #[test]
    fn test_closure_follows_chains() {
        let mut fa = epsilon_nfa();
        fa.add_state("q3");
        fa.add_transition("q1", EPSILON, "q3");

        let closure = fa.epsilon_closure("q0");
        assert_eq!(
            closure,
            ["q0", "q1", "q3"].iter().map(|s| s.to_string()).collect()
        );
    }

    #[test]
    fn test_closure_is_a_fixed_point() {
        let mut fa = epsilon_nfa();
        fa.add_transition("q1", EPSILON, "q0"); // epsilon cycle

        let closure = fa.epsilon_closure("q0");
        assert_eq!(fa.epsilon_closure_set(&closure), closure);
    }

    #[test]
    fn test_determinize_epsilon_nfa() {
        // Scenario: the start subset already contains q1 via epsilon, so a
        // single 'a' reaches an accepting composite state.
        let dfa = epsilon_nfa().determinize();

        assert!(dfa.is_deterministic());
        assert!(dfa.is_standard());
        assert!(!dfa.has_epsilon_transitions());
        assert_eq!(dfa.start_states.iter().next().unwrap(), "s0");

        let on_a = dfa.destinations("s0", "a").unwrap();
        assert_eq!(on_a.len(), 1);
        assert!(dfa.accept_states.contains(on_a.iter().next().unwrap()));
    }

    #[test]
    fn test_determinize_merges_destination_sets() {
        // q0 reaches both q1 and q2 on 'a'; the DFA folds them into one state
        let mut fa = Automaton::new();
        for state in ["q0", "q1", "q2"] {
            fa.add_state(state);
        }
        fa.add_symbol("a");
        fa.add_start_state("q0");
        fa.add_accept_state("q2");
        fa.add_transition("q0", "a", "q1");
        fa.add_transition("q0", "a", "q2");

        let dfa = fa.determinize();
        assert!(dfa.is_deterministic());
        assert_eq!(dfa.states.len(), 2);
        let on_a = dfa.destinations("s0", "a").unwrap();
        assert_eq!(on_a.iter().next().unwrap(), "s1");
        assert!(dfa.accept_states.contains("s1"));
    }

    #[test]
    fn test_determinize_identity_when_deterministic() {
        let mut fa = Automaton::new();
        fa.add_state("q0");
        fa.add_state("q1");
        fa.add_symbol("a");
        fa.add_start_state("q0");
        fa.add_transition("q0", "a", "q1");

        assert_eq!(fa.determinize(), fa);
    }

    #[test]
    fn test_determinize_seeds_from_all_start_states() {
        // q1 is only reachable as a start state; its 'b' transition must
        // survive into the start subset.
        let mut fa = Automaton::new();
        for state in ["q0", "q1", "q2"] {
            fa.add_state(state);
        }
        fa.add_symbol("a");
        fa.add_symbol("b");
        fa.add_start_state("q0");
        fa.add_start_state("q1");
        fa.add_accept_state("q2");
        fa.add_transition("q0", "a", "q0");
        fa.add_transition("q0", "a", "q2");
        fa.add_transition("q1", "b", "q2");

        let dfa = fa.determinize();
        assert!(dfa.is_deterministic());

        let start = dfa.start_states.iter().next().unwrap().clone();
        let on_b = dfa.destinations(&start, "b").unwrap();
        assert!(dfa.accept_states.contains(on_b.iter().next().unwrap()));
    }

    #[test]
    fn test_determinize_then_complete_is_total() {
        let mut dfa = epsilon_nfa().determinize();
        assert!(!dfa.is_complete()); // the accepting subset has no 'a' exit

        dfa.complete();
        assert!(dfa.is_complete());
        assert!(dfa.is_deterministic());
    }

    #[test]
    fn test_determinize_without_start_states() {
        let mut fa = Automaton::new();
        fa.add_state("q0");
        fa.add_state("q1");
        fa.add_symbol("a");
        fa.add_transition("q0", "a", "q0");
        fa.add_transition("q0", "a", "q1");

        let dfa = fa.determinize();
        assert!(dfa.states.is_empty());
        assert_eq!(dfa.alphabet, fa.alphabet);
    }

    #[test]
    fn test_determinize_naming_is_reproducible() {
        let fa = epsilon_nfa();
        assert_eq!(fa.determinize(), fa.determinize());
    }
}
