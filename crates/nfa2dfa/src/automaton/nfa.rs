//! Epsilon Non-deterministic Finite Automaton (ε-NFA) model.

use crate::automaton::label::DEAD_STATE_LABEL;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{EPSILON, SymbolId, is_epsilon};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;
use tracing::debug;

/// Errors detected while validating an NFA description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NfaError {
    /// No start state was declared.
    #[error("no start state was declared")]
    MissingStart,
    /// The declared start state is not a member of the state set.
    #[error("start state `{0}` is not declared in the state set")]
    UndefinedStart(String),
    /// A final state is not a member of the state set.
    #[error("final state `{0}` is not declared in the state set")]
    UndefinedFinal(String),
    /// A transition endpoint is not a member of the state set.
    #[error("transition references undeclared state `{0}`")]
    UndefinedTransitionState(String),
    /// A transition symbol is not a member of the alphabet.
    #[error("transition references undeclared symbol `{0}`")]
    UndefinedSymbol(String),
    /// Epsilon was declared as an alphabet member.
    #[error("the epsilon symbol cannot be a member of the alphabet")]
    EpsilonInAlphabet,
    /// A state name collides with the reserved dead-state label.
    #[error("state name `{0}` collides with the reserved dead-state label")]
    ReservedStateName(String),
}

/// An immutable ε-NFA: interned states and alphabet, a transition relation
/// keyed by `(state, symbol-or-ε)`, a start state and a final-state set.
///
/// Built once per conversion by [`NfaBuilder`] and read-only thereafter.
/// State and alphabet ids are assigned in lexicographic order of their
/// names, which fixes the enumeration order used by every consumer.
#[derive(Debug, Clone)]
pub struct Nfa {
    state_names: Vec<String>,
    alphabet: Vec<String>,
    transitions: HashMap<(StateId, SymbolId), StateSet>,
    start: StateId,
    finals: StateSet,
}

impl Nfa {
    /// Number of states.
    pub fn num_states(&self) -> usize {
        self.state_names.len()
    }

    /// State names, indexed by [`StateId`], in lexicographic order.
    pub fn state_names(&self) -> &[String] {
        &self.state_names
    }

    /// Alphabet symbol names, indexed by [`SymbolId`], in lexicographic
    /// order. Never contains ε.
    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    /// The start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// The final (accepting) states.
    pub fn finals(&self) -> &StateSet {
        &self.finals
    }

    /// Transition targets for `(state, symbol)`, if any are defined.
    pub fn targets(&self, state: StateId, symbol: SymbolId) -> Option<&StateSet> {
        self.transitions.get(&(state, symbol))
    }

    /// The epsilon closure of a set of states: the minimal superset closed
    /// under ε transitions.
    ///
    /// The closure set doubles as the visited set, so cyclic ε graphs
    /// terminate and each state is expanded at most once.
    pub fn epsilon_closure(&self, seed: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.state_names.len());
        let mut stack: Vec<StateId> = seed.iter().collect();

        while let Some(state) = stack.pop() {
            if closure.contains(state) {
                continue;
            }
            closure.insert(state);

            if let Some(targets) = self.transitions.get(&(state, EPSILON)) {
                for target in targets.iter() {
                    if !closure.contains(target) {
                        stack.push(target);
                    }
                }
            }
        }

        closure
    }

    /// The union of transition targets on `symbol` across all member
    /// states. An empty result is a normal outcome, not an error.
    pub fn move_set(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        assert!(!is_epsilon(symbol), "use epsilon_closure for epsilon moves");

        let mut reached = StateSet::with_capacity(self.state_names.len());
        for state in states.iter() {
            if let Some(targets) = self.transitions.get(&(state, symbol)) {
                reached.union_with(targets);
            }
        }

        reached
    }
}

/// Collects an NFA description and validates it into an immutable [`Nfa`].
#[derive(Debug, Default)]
pub struct NfaBuilder {
    states: BTreeSet<String>,
    alphabet: BTreeSet<String>,
    transitions: Vec<(String, Option<String>, String)>,
    start: Option<String>,
    finals: BTreeSet<String>,
}

impl NfaBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state. Duplicate declarations collapse.
    pub fn declare_state(&mut self, name: &str) {
        self.states.insert(name.to_string());
    }

    /// Declare an alphabet symbol. Duplicate declarations collapse.
    pub fn declare_symbol(&mut self, name: &str) {
        self.alphabet.insert(name.to_string());
    }

    /// Add a transition on an alphabet symbol.
    pub fn add_transition(&mut self, from: &str, symbol: &str, to: &str) {
        self.transitions
            .push((from.to_string(), Some(symbol.to_string()), to.to_string()));
    }

    /// Add an epsilon (non-consuming) transition.
    pub fn add_epsilon_transition(&mut self, from: &str, to: &str) {
        self.transitions.push((from.to_string(), None, to.to_string()));
    }

    /// Set the start state. A later call replaces an earlier one.
    pub fn set_start(&mut self, name: &str) {
        self.start = Some(name.to_string());
    }

    /// Mark a state as final. Duplicate declarations collapse.
    pub fn add_final(&mut self, name: &str) {
        self.finals.insert(name.to_string());
    }

    /// Validate the collected description and build the immutable [`Nfa`].
    pub fn build(self) -> Result<Nfa, NfaError> {
        for name in &self.states {
            if name == DEAD_STATE_LABEL {
                return Err(NfaError::ReservedStateName(name.clone()));
            }
        }
        if self.alphabet.contains("ε") {
            return Err(NfaError::EpsilonInAlphabet);
        }

        // BTreeSet iteration is sorted, so ids come out in lexicographic
        // name order.
        let state_names: Vec<String> = self.states.into_iter().collect();
        let alphabet: Vec<String> = self.alphabet.into_iter().collect();

        let state_ids: HashMap<&str, StateId> = state_names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.as_str(), id as StateId))
            .collect();
        let symbol_ids: HashMap<&str, SymbolId> = alphabet
            .iter()
            .enumerate()
            .map(|(id, name)| (name.as_str(), id as SymbolId))
            .collect();

        let start_name = self.start.ok_or(NfaError::MissingStart)?;
        let start = *state_ids
            .get(start_name.as_str())
            .ok_or_else(|| NfaError::UndefinedStart(start_name.clone()))?;

        let mut finals = StateSet::with_capacity(state_names.len());
        for name in self.finals {
            let id = state_ids
                .get(name.as_str())
                .ok_or_else(|| NfaError::UndefinedFinal(name.clone()))?;
            finals.insert(*id);
        }

        let mut transitions: HashMap<(StateId, SymbolId), StateSet> = HashMap::new();
        for (from, symbol, to) in self.transitions {
            let from_id = *state_ids
                .get(from.as_str())
                .ok_or_else(|| NfaError::UndefinedTransitionState(from.clone()))?;
            let to_id = *state_ids
                .get(to.as_str())
                .ok_or_else(|| NfaError::UndefinedTransitionState(to.clone()))?;
            let symbol_id = match symbol {
                None => EPSILON,
                Some(name) => *symbol_ids
                    .get(name.as_str())
                    .ok_or_else(|| NfaError::UndefinedSymbol(name.clone()))?,
            };
            transitions
                .entry((from_id, symbol_id))
                .or_insert_with(|| StateSet::with_capacity(state_names.len()))
                .insert(to_id);
        }

        debug!(
            states = state_names.len(),
            symbols = alphabet.len(),
            transitions = transitions.len(),
            "validated NFA"
        );

        Ok(Nfa {
            state_names,
            alphabet,
            transitions,
            start,
            finals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> Nfa {
        let mut builder = NfaBuilder::new();
        for state in ["q0", "q1", "q2"] {
            builder.declare_state(state);
        }
        for symbol in ["a", "b"] {
            builder.declare_symbol(symbol);
        }
        builder.add_transition("q0", "a", "q0");
        builder.add_transition("q0", "a", "q1");
        builder.add_epsilon_transition("q0", "q2");
        builder.add_transition("q1", "b", "q2");
        builder.set_start("q0");
        builder.add_final("q2");
        builder.build().unwrap()
    }

    #[test]
    fn test_ids_are_lexicographic() {
        let nfa = scenario_a();
        assert_eq!(nfa.num_states(), 3);
        assert_eq!(nfa.state_names(), ["q0", "q1", "q2"]);
        assert_eq!(nfa.alphabet(), ["a", "b"]);
        assert_eq!(nfa.start(), 0);
    }

    #[test]
    fn test_epsilon_closure_follows_chains() {
        let mut builder = NfaBuilder::new();
        for state in ["s0", "s1", "s2"] {
            builder.declare_state(state);
        }
        builder.add_epsilon_transition("s0", "s1");
        builder.add_epsilon_transition("s1", "s2");
        builder.set_start("s0");
        let nfa = builder.build().unwrap();

        let closure = nfa.epsilon_closure(&StateSet::singleton(0));
        assert_eq!(closure.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_epsilon_closure_terminates_on_cycle() {
        let mut builder = NfaBuilder::new();
        builder.declare_state("q0");
        builder.declare_state("q1");
        builder.add_epsilon_transition("q0", "q1");
        builder.add_epsilon_transition("q1", "q0");
        builder.set_start("q0");
        let nfa = builder.build().unwrap();

        let closure = nfa.epsilon_closure(&StateSet::singleton(0));
        assert_eq!(closure.to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_move_set_unions_targets() {
        let nfa = scenario_a();
        // 'a' from {q0, q2}: q0 goes to {q0, q1}, q2 has no 'a' edges.
        let from = StateSet::from_iter([0, 2]);
        let reached = nfa.move_set(&from, 0);
        assert_eq!(reached.to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_move_set_empty_is_normal() {
        let nfa = scenario_a();
        // 'b' from {q0, q2}: neither state has a 'b' edge.
        let from = StateSet::from_iter([0, 2]);
        let reached = nfa.move_set(&from, 1);
        assert!(reached.is_empty());
    }

    #[test]
    fn test_missing_start_rejected() {
        let mut builder = NfaBuilder::new();
        builder.declare_state("q0");
        assert_eq!(builder.build().unwrap_err(), NfaError::MissingStart);
    }

    #[test]
    fn test_undefined_start_rejected() {
        let mut builder = NfaBuilder::new();
        builder.declare_state("q0");
        builder.set_start("q9");
        assert_eq!(
            builder.build().unwrap_err(),
            NfaError::UndefinedStart("q9".into())
        );
    }

    #[test]
    fn test_undefined_final_rejected() {
        let mut builder = NfaBuilder::new();
        builder.declare_state("q0");
        builder.set_start("q0");
        builder.add_final("q7");
        assert_eq!(
            builder.build().unwrap_err(),
            NfaError::UndefinedFinal("q7".into())
        );
    }

    #[test]
    fn test_undefined_transition_state_rejected() {
        let mut builder = NfaBuilder::new();
        builder.declare_state("q0");
        builder.declare_symbol("a");
        builder.add_transition("q0", "a", "q5");
        builder.set_start("q0");
        assert_eq!(
            builder.build().unwrap_err(),
            NfaError::UndefinedTransitionState("q5".into())
        );
    }

    #[test]
    fn test_undefined_symbol_rejected() {
        let mut builder = NfaBuilder::new();
        builder.declare_state("q0");
        builder.add_transition("q0", "x", "q0");
        builder.set_start("q0");
        assert_eq!(
            builder.build().unwrap_err(),
            NfaError::UndefinedSymbol("x".into())
        );
    }

    #[test]
    fn test_epsilon_in_alphabet_rejected() {
        let mut builder = NfaBuilder::new();
        builder.declare_state("q0");
        builder.declare_symbol("ε");
        builder.set_start("q0");
        assert_eq!(builder.build().unwrap_err(), NfaError::EpsilonInAlphabet);
    }

    #[test]
    fn test_reserved_state_name_rejected() {
        let mut builder = NfaBuilder::new();
        builder.declare_state("∅");
        builder.set_start("∅");
        assert_eq!(
            builder.build().unwrap_err(),
            NfaError::ReservedStateName("∅".into())
        );
    }
}
