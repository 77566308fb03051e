//! Run records produced by the simulation engine.
//!
//! A [`RunRecord`] is an immutable summary of one walk over an input string:
//! the derivation path, the final state (if the walk was not aborted), and
//! the verdict.

use crate::core::state::StateId;
use serde::Serialize;

/// Where and why a run stopped before consuming its whole input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Halt {
    /// Character index of the symbol that had no transition
    pub position: usize,
    /// The symbol that had no transition
    pub symbol: char,
    /// The state the run was in when it stopped
    pub state: StateId,
}

/// One transition taken during a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionRecord<'a> {
    pub from: &'a StateId,
    pub symbol: char,
    pub to: &'a StateId,
}

/// Result of running an automaton over one input string.
///
/// # Example
///
/// ```rust
/// use dfa_runner::dfa;
///
/// let automaton = dfa! {
///     states: [q0, q1],
///     alphabet: ['a', 'b'],
///     initial: q0,
///     accepting: [q1],
///     transitions: [(q0, 'a') => q1, (q1, 'b') => q1],
/// }
/// .unwrap();
///
/// let record = automaton.run("ba");
/// assert_eq!(record.path(), "q0");
/// assert!(record.final_state().is_none());
/// assert!(!record.is_accepted());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunRecord {
    input: String,
    derivation: Vec<StateId>,
    final_state: Option<StateId>,
    accepted: bool,
    halt: Option<Halt>,
}

impl RunRecord {
    pub(crate) fn new(
        input: &str,
        derivation: Vec<StateId>,
        final_state: Option<StateId>,
        accepted: bool,
        halt: Option<Halt>,
    ) -> Self {
        Self {
            input: input.to_owned(),
            derivation,
            final_state,
            accepted,
            halt,
        }
    }

    /// The input string that was consumed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Visited states in order, starting with the initial state.
    ///
    /// When the run halted, the path stops at the state where the undefined
    /// transition was attempted.
    pub fn derivation(&self) -> &[StateId] {
        &self.derivation
    }

    /// The state reached after consuming the whole input, or `None` when
    /// the run halted on an undefined transition.
    pub fn final_state(&self) -> Option<&StateId> {
        self.final_state.as_ref()
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Details of the undefined transition that stopped the run, if any.
    pub fn halt(&self) -> Option<&Halt> {
        self.halt.as_ref()
    }

    pub fn is_halted(&self) -> bool {
        self.halt.is_some()
    }

    /// Derivation path rendered as `q0 -> q1 -> q1`.
    pub fn path(&self) -> String {
        self.derivation
            .iter()
            .map(StateId::as_str)
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Transitions taken, pairing each consecutive pair of states with the
    /// symbol consumed between them.
    pub fn transitions(&self) -> Vec<TransitionRecord<'_>> {
        self.derivation
            .windows(2)
            .zip(self.input.chars())
            .map(|(pair, symbol)| TransitionRecord {
                from: &pair[0],
                symbol,
                to: &pair[1],
            })
            .collect()
    }
}
