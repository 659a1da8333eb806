//! Line-oriented parser for NFA descriptions.
//!
//! The format is a sequence of records, one per line:
//!
//! ```text
//! States: q0,q1,q2
//! Alphabet: a,b
//! Transition: q0,a,q1
//! Transition: q0,e,q2
//! Start: q0
//! Final: q2
//! ```
//!
//! The transition symbol token `e` (or the literal `ε`) denotes an epsilon
//! transition. Whitespace around tokens is trimmed; unrecognized lines are
//! ignored with a warning.

use crate::automaton::{Nfa, NfaBuilder, NfaError, is_epsilon_token};
use thiserror::Error;
use tracing::warn;

/// Errors detected while parsing an NFA description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A transition record did not have exactly three fields.
    #[error("line {line}: transition must have exactly three fields: `{text}`")]
    MalformedTransition {
        /// 1-based line number of the offending record.
        line: usize,
        /// The offending record text.
        text: String,
    },
    /// The description failed semantic validation.
    #[error(transparent)]
    Invalid(#[from] NfaError),
}

fn tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Parse an NFA description into a validated [`Nfa`].
///
/// On any error the conversion core must not be invoked; there is no
/// partial result.
pub fn parse_nfa(input: &str) -> Result<Nfa, ParseError> {
    let mut builder = NfaBuilder::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("States:") {
            for name in tokens(rest) {
                builder.declare_state(name);
            }
        } else if let Some(rest) = line.strip_prefix("Alphabet:") {
            for name in tokens(rest) {
                if name == "e" {
                    // Transition records spell epsilon as `e`, so edges on
                    // this symbol cannot be written down.
                    warn!(line = idx + 1, "alphabet symbol `e` is unreachable");
                }
                builder.declare_symbol(name);
            }
        } else if let Some(rest) = line.strip_prefix("Transition:") {
            let fields: Vec<&str> = tokens(rest).collect();
            let [from, symbol, to] = fields.as_slice() else {
                return Err(ParseError::MalformedTransition {
                    line: idx + 1,
                    text: line.to_string(),
                });
            };
            if is_epsilon_token(symbol) {
                builder.add_epsilon_transition(from, to);
            } else {
                builder.add_transition(from, symbol, to);
            }
        } else if let Some(rest) = line.strip_prefix("Start:") {
            builder.set_start(rest.trim());
        } else if let Some(rest) = line.strip_prefix("Final:") {
            for name in tokens(rest) {
                builder.add_final(name);
            }
        } else {
            warn!(line = idx + 1, text = line, "ignoring unrecognized line");
        }
    }

    Ok(builder.build()?)
}
