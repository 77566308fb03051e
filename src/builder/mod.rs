//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and the `dfa!` macro for creating
//! automata in code. Both funnel into the same validation as loaded
//! documents.

pub mod automaton;
pub mod macros;

pub use automaton::AutomatonBuilder;

use crate::core::{Automaton, MalformedAutomatonError};

/// Create an automaton whose every state loops to itself on every symbol.
///
/// Useful as a starting point in tests: every string over the alphabet
/// completes, and acceptance depends only on the initial state.
///
/// # Example
///
/// ```
/// use dfa_runner::builder::self_loops;
///
/// let automaton = self_loops(["q0"], "ab".chars(), "q0", ["q0"]).unwrap();
/// assert!(automaton.accepts("abba"));
/// assert!(!automaton.accepts("abc"));
/// ```
pub fn self_loops<S, A, F>(
    states: S,
    alphabet: A,
    initial: &str,
    accepting: F,
) -> Result<Automaton, MalformedAutomatonError>
where
    S: IntoIterator,
    S::Item: AsRef<str>,
    A: IntoIterator<Item = char>,
    F: IntoIterator,
    F::Item: AsRef<str>,
{
    let states: Vec<String> = states.into_iter().map(|s| s.as_ref().to_owned()).collect();
    let alphabet: Vec<char> = alphabet.into_iter().collect();

    let mut builder = AutomatonBuilder::new()
        .states(states.iter().map(String::as_str))
        .alphabet(alphabet.iter().copied())
        .initial(initial)
        .accepting(accepting.into_iter().map(|s| s.as_ref().to_owned()));

    for state in &states {
        for &symbol in &alphabet {
            builder = builder.transition(state.as_str(), symbol, state.as_str());
        }
    }

    builder.build()
}
