//! Graphviz DOT rendering of a DFA.

use crate::automaton::{Dfa, StateId, SymbolId};
use itertools::Itertools;

/// Render a DFA as a Graphviz digraph.
///
/// Final states are drawn as double circles, the start state is marked by
/// an arrow from an invisible `init` node, and every transition becomes a
/// labeled edge (self-loops included). States and edges are emitted in
/// sorted order so the same DFA always renders to the same text; layout is
/// left entirely to the consumer.
pub fn dfa_dot(dfa: &Dfa) -> String {
    let mut order: Vec<StateId> = (0..dfa.num_states() as StateId).collect();
    order.sort_unstable_by_key(|&id| dfa.label(id));

    let mut lines = vec![
        "rankdir=LR".to_string(),
        "init [label = \"\", shape = none]".to_string(),
        "node [shape = circle]".to_string(),
    ];

    for &state in &order {
        if dfa.is_final(state) {
            lines.push(format!("\"{}\" [shape = doublecircle]", dfa.label(state)));
        } else {
            lines.push(format!("\"{}\"", dfa.label(state)));
        }
    }

    lines.push(format!("init -> \"{}\"", dfa.start_label()));

    for &state in &order {
        for symbol in 0..dfa.alphabet().len() as SymbolId {
            if let Some(target) = dfa.transition(state, symbol) {
                lines.push(format!(
                    "\"{}\" -> \"{}\" [label = \"{}\"]",
                    dfa.label(state),
                    dfa.label(target),
                    dfa.symbol_name(symbol)
                ));
            }
        }
    }

    format!(
        "digraph dfa {{\n{}\n}}\n",
        lines.into_iter().map(|line| format!("    {line};")).join("\n")
    )
}
