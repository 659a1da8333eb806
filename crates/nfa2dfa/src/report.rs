//! Deterministic textual rendering of a DFA.

use crate::automaton::{Dfa, StateId, SymbolId};
use itertools::Itertools;

/// Render a DFA as a textual report.
///
/// The report lists the states, one transition per `(state, symbol)` pair,
/// the start state and the final states. Every enumeration is sorted
/// (states by label, symbols lexicographically), so the same DFA always
/// renders to the same text.
pub fn dfa_report(dfa: &Dfa) -> String {
    let mut order: Vec<StateId> = (0..dfa.num_states() as StateId).collect();
    order.sort_unstable_by_key(|&id| dfa.label(id));

    let states_line = order.iter().map(|&id| dfa.label(id)).join(", ");

    let mut transition_lines = String::new();
    for &state in &order {
        for symbol in 0..dfa.alphabet().len() as SymbolId {
            if let Some(target) = dfa.transition(state, symbol) {
                transition_lines.push_str(&format!(
                    "{} -- {} --> {}\n",
                    dfa.label(state),
                    dfa.symbol_name(symbol),
                    dfa.label(target)
                ));
            }
        }
    }

    let mut finals: Vec<&str> = dfa
        .final_states()
        .iter()
        .map(|id| dfa.label(id))
        .collect();
    finals.sort_unstable();

    format!(
        "DFA States: {}\n\nDFA Transitions:\n{}\nStart State: {}\nFinal States: {}",
        states_line,
        transition_lines,
        dfa.start_label(),
        finals.iter().join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{NfaBuilder, subset_construction};
    use crate::parser::parse_nfa;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_for_example() {
        let nfa = parse_nfa(
            "States: q0,q1,q2\n\
             Alphabet: a,b\n\
             Transition: q0,a,q0\n\
             Transition: q0,a,q1\n\
             Transition: q0,e,q2\n\
             Transition: q1,b,q2\n\
             Start: q0\n\
             Final: q2",
        )
        .unwrap();
        let dfa = subset_construction(&nfa);

        let expected = "\
DFA States: {q0,q1,q2}, {q0,q2}, {q2}, ∅

DFA Transitions:
{q0,q1,q2} -- a --> {q0,q1,q2}
{q0,q1,q2} -- b --> {q2}
{q0,q2} -- a --> {q0,q1,q2}
{q0,q2} -- b --> ∅
{q2} -- a --> ∅
{q2} -- b --> ∅
∅ -- a --> ∅
∅ -- b --> ∅

Start State: {q0,q2}
Final States: {q0,q1,q2}, {q0,q2}, {q2}";

        assert_eq!(dfa_report(&dfa), expected);
    }

    #[test]
    fn test_report_for_empty_alphabet() {
        let mut builder = NfaBuilder::new();
        builder.declare_state("s0");
        builder.set_start("s0");
        builder.add_final("s0");
        let dfa = subset_construction(&builder.build().unwrap());

        let expected = "\
DFA States: {s0}

DFA Transitions:

Start State: {s0}
Final States: {s0}";

        assert_eq!(dfa_report(&dfa), expected);
    }

    #[test]
    fn test_report_is_stable() {
        let nfa = parse_nfa(
            "States: a,b,c\nAlphabet: x,y\n\
             Transition: a,x,b\nTransition: a,x,c\nTransition: b,y,a\n\
             Start: a\nFinal: c",
        )
        .unwrap();

        let first = dfa_report(&subset_construction(&nfa));
        let second = dfa_report(&subset_construction(&nfa));
        assert_eq!(first, second);
    }
}
