//! Subset construction: converting an ε-NFA into an equivalent DFA.

use crate::automaton::dfa::Dfa;
use crate::automaton::label::{DEAD_STATE_LABEL, canonical_label};
use crate::automaton::nfa::Nfa;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::SymbolId;
use indexmap::IndexMap;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Convert a validated ε-NFA into an equivalent DFA using the powerset
/// construction.
///
/// Each DFA state corresponds to a set of NFA states, labeled canonically.
/// Symbols are enumerated in ascending id order, which is lexicographic by
/// construction, so the resulting DFA is identical across runs. A dead
/// state absorbing every otherwise-undefined transition is synthesized only
/// if some transition targets it.
pub fn subset_construction(nfa: &Nfa) -> Dfa {
    let mut dfa = Dfa::new(nfa.alphabet().to_vec());
    let num_symbols = nfa.alphabet().len() as SymbolId;

    // Discovered state sets, keyed by their sorted membership.
    let mut discovered: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
    let mut processed: HashSet<StateId> = HashSet::new();
    let mut worklist: VecDeque<StateSet> = VecDeque::new();
    let mut dead: Option<StateId> = None;

    // The initial DFA state is the epsilon closure of the NFA start state.
    let start_set = nfa.epsilon_closure(&StateSet::singleton(nfa.start()));
    let start_id = dfa.add_state(canonical_label(&start_set, nfa.state_names()));
    dfa.set_start_state(start_id);
    if start_set.intersects(nfa.finals()) {
        dfa.add_final_state(start_id);
    }
    discovered.insert(start_set.to_vec(), start_id);
    worklist.push_back(start_set);

    while let Some(current_set) = worklist.pop_front() {
        let current_id = discovered[&current_set.to_vec()];
        // The discovered check below keeps duplicates out of the worklist;
        // this guard makes sure a set is never expanded twice even so.
        if !processed.insert(current_id) {
            continue;
        }

        for symbol in 0..num_symbols {
            let next_set = nfa.epsilon_closure(&nfa.move_set(&current_set, symbol));

            let target = if next_set.is_empty() {
                *dead.get_or_insert_with(|| dfa.add_state(DEAD_STATE_LABEL.to_string()))
            } else {
                let key = next_set.to_vec();
                if let Some(&existing) = discovered.get(&key) {
                    existing
                } else {
                    let id = dfa.add_state(canonical_label(&next_set, nfa.state_names()));
                    if next_set.intersects(nfa.finals()) {
                        dfa.add_final_state(id);
                    }
                    discovered.insert(key, id);
                    worklist.push_back(next_set);
                    id
                }
            };

            dfa.add_transition(current_id, symbol, target);
        }
    }

    // The dead state, once referenced, self-loops on every symbol and is
    // never final.
    if let Some(dead_id) = dead {
        for symbol in 0..num_symbols {
            dfa.add_transition(dead_id, symbol, dead_id);
        }
        dfa.set_dead_state(dead_id);
    }

    debug!(
        states = dfa.num_states(),
        dead = dead.is_some(),
        "subset construction complete"
    );

    dfa
}
