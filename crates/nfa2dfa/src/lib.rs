//! Epsilon-NFA to DFA conversion via subset construction.
//!
//! The crate consumes a line-oriented NFA description, converts it into an
//! equivalent DFA by treating reachable sets of NFA states as single DFA
//! states, and renders the result as a textual report or a Graphviz
//! diagram. Conversion is a pure function over immutable value objects:
//! parsing produces a validated [`Nfa`], [`subset_construction`] returns a
//! fresh [`Dfa`] on every call, and the renderers only read the finished
//! model.
//!
//! ```
//! use nfa2dfa::{dfa_report, parse_nfa, subset_construction};
//!
//! let nfa = parse_nfa(
//!     "States: q0,q1\nAlphabet: a\nTransition: q0,a,q1\nStart: q0\nFinal: q1",
//! )?;
//! let dfa = subset_construction(&nfa);
//! assert_eq!(dfa.start_label(), "{q0}");
//! println!("{}", dfa_report(&dfa));
//! # Ok::<(), nfa2dfa::ParseError>(())
//! ```
#![warn(missing_docs)]

mod automaton;
mod dot;
mod parser;
mod report;

pub use automaton::{
    DEAD_STATE_LABEL, Dfa, EPSILON, Nfa, NfaBuilder, NfaError, StateId, StateSet, SymbolId,
    canonical_label, is_epsilon, is_epsilon_token, subset_construction,
};
pub use dot::dfa_dot;
pub use parser::{ParseError, parse_nfa};
pub use report::dfa_report;
