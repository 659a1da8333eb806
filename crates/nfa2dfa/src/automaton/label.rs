//! Canonical labels for sets of NFA states.

use crate::automaton::state::StateSet;
use itertools::Itertools;

/// Reserved label for the synthesized dead/sink state.
///
/// [`crate::NfaBuilder`] rejects user-supplied state names that collide with
/// this token, so the label is unambiguous in every output.
pub const DEAD_STATE_LABEL: &str = "∅";

/// The canonical, order-independent label of a state set.
///
/// Member names are emitted sorted, comma-joined and brace-wrapped, e.g.
/// `{q0,q2}`. Relies on state ids being assigned in lexicographic name
/// order, so ascending bit-set iteration already yields sorted names. The
/// empty set maps to [`DEAD_STATE_LABEL`].
pub fn canonical_label(states: &StateSet, names: &[String]) -> String {
    if states.is_empty() {
        return DEAD_STATE_LABEL.to_string();
    }
    format!(
        "{{{}}}",
        states.iter().map(|s| names[s as usize].as_str()).join(",")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_set_is_dead_label() {
        let set = StateSet::with_capacity(4);
        assert_eq!(canonical_label(&set, &names(&["q0", "q1"])), "∅");
    }

    #[test]
    fn test_label_format() {
        let set = StateSet::from_iter([0, 2]);
        assert_eq!(
            canonical_label(&set, &names(&["q0", "q1", "q2"])),
            "{q0,q2}"
        );
    }

    #[test]
    fn test_singleton_label() {
        let set = StateSet::singleton(1);
        assert_eq!(canonical_label(&set, &names(&["q0", "q1"])), "{q1}");
    }

    #[test]
    fn test_label_is_insertion_order_independent() {
        let forward = StateSet::from_iter([0, 1, 2]);
        let mut shuffled = StateSet::with_capacity(3);
        shuffled.insert(2);
        shuffled.insert(0);
        shuffled.insert(1);

        let table = names(&["a", "b", "c"]);
        assert_eq!(
            canonical_label(&forward, &table),
            canonical_label(&shuffled, &table)
        );
        assert_eq!(canonical_label(&forward, &table), "{a,b,c}");
    }
}
