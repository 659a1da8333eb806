//! Finite automata models and the subset construction.
//!
//! This module provides the ε-NFA and DFA models together with:
//! - Epsilon closure computation
//! - The move function over state sets
//! - Canonical order-independent state-set labels
//! - Subset construction (ε-NFA to DFA conversion) with dead-state
//!   synthesis

mod dfa;
mod label;
mod nfa;
mod state;
mod subset_construction;
mod symbol;

pub use dfa::Dfa;
pub use label::{DEAD_STATE_LABEL, canonical_label};
pub use nfa::{Nfa, NfaBuilder, NfaError};
pub use state::{StateId, StateSet};
pub use subset_construction::subset_construction;
pub use symbol::{EPSILON, SymbolId, is_epsilon, is_epsilon_token};
