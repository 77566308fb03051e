//! Construction errors for automata.

use thiserror::Error;

/// A single structural problem found while building an automaton.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("automaton declares no states")]
    NoStates,

    #[error("automaton declares an empty alphabet")]
    EmptyAlphabet,

    #[error("initial state not specified")]
    MissingInitialState,

    #[error("initial state '{state}' is not a declared state")]
    UnknownInitialState { state: String },

    #[error("accepting state '{state}' is not a declared state")]
    UnknownAcceptingState { state: String },

    #[error("transition ({from}, {symbol}) -> {to}: source state '{from}' is not declared")]
    UnknownSourceState {
        from: String,
        symbol: String,
        to: String,
    },

    #[error("transition ({from}, {symbol}) -> {to}: target state '{to}' is not declared")]
    UnknownTargetState {
        from: String,
        symbol: String,
        to: String,
    },

    #[error("transition ({from}, {symbol}) -> {to}: symbol '{symbol}' is not in the alphabet")]
    SymbolOutsideAlphabet {
        from: String,
        symbol: String,
        to: String,
    },

    #[error("conflicting transitions for ({state}, {symbol}): '{first}' and '{second}'")]
    ConflictingTransition {
        state: String,
        symbol: String,
        first: String,
        second: String,
    },
}

/// Raised when an automaton description violates its structural invariants.
///
/// Carries every violation found, in the order the checks ran, rather than
/// only the first one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed automaton: {}", join_violations(.violations))]
pub struct MalformedAutomatonError {
    pub violations: Vec<Violation>,
}

impl MalformedAutomatonError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Check whether any recorded violation matches the predicate.
    pub fn has(&self, predicate: impl Fn(&Violation) -> bool) -> bool {
        self.violations.iter().any(predicate)
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_lists_every_violation() {
        let err = MalformedAutomatonError::new(vec![
            Violation::NoStates,
            Violation::UnknownInitialState {
                state: "q9".to_string(),
            },
        ]);

        assert_eq!(
            err.to_string(),
            "malformed automaton: automaton declares no states; \
             initial state 'q9' is not a declared state"
        );
    }

    #[test]
    fn has_matches_variants() {
        let err = MalformedAutomatonError::new(vec![Violation::EmptyAlphabet]);

        assert!(err.has(|v| matches!(v, Violation::EmptyAlphabet)));
        assert!(!err.has(|v| matches!(v, Violation::NoStates)));
    }
}
