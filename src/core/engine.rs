//! Simulation engine: single steps, stepwise execution, and full runs.
//!
//! Undefined transitions are a normal outcome (rejection), modeled as data.
//! Nothing in this module fails for a validated automaton.

use crate::core::automaton::Automaton;
use crate::core::run::{Halt, RunRecord};
use crate::core::state::StateId;
use std::iter::Enumerate;
use std::str::Chars;

/// Outcome of consuming one input symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult<'a> {
    /// A rule existed and the walk moved to `to`
    Transitioned {
        from: &'a StateId,
        symbol: char,
        to: &'a StateId,
    },

    /// No rule for `(state, symbol)`; the walk stops here
    Halted {
        state: &'a StateId,
        symbol: char,
        position: usize,
    },
}

/// Apply a single transition.
pub fn step<'a>(automaton: &'a Automaton, current: &str, symbol: char) -> Option<&'a StateId> {
    automaton.lookup(current, symbol)
}

/// Stepwise walk of an automaton over an input string.
///
/// Yields one [`StepResult`] per consumed symbol. After a
/// [`StepResult::Halted`] the iterator is exhausted, even if input remains.
///
/// # Example
///
/// ```rust
/// use dfa_runner::core::StepResult;
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
/// let mut execution = automaton.execute("aa");
/// assert!(matches!(execution.next(), Some(StepResult::Transitioned { .. })));
/// assert!(matches!(execution.next(), Some(StepResult::Halted { position: 1, .. })));
/// assert!(execution.next().is_none());
/// assert!(execution.is_halted());
/// ```
pub struct Execution<'a> {
    automaton: &'a Automaton,
    input: Enumerate<Chars<'a>>,
    current: &'a StateId,
    halted: bool,
}

impl<'a> Execution<'a> {
    /// Start at the automaton's initial state.
    pub fn new(automaton: &'a Automaton, input: &'a str) -> Self {
        Self {
            automaton,
            input: input.chars().enumerate(),
            current: automaton.initial(),
            halted: false,
        }
    }

    /// The state the walk is currently in (pure).
    ///
    /// After a halt this is the state where the undefined transition was
    /// attempted.
    pub fn current_state(&self) -> &'a StateId {
        self.current
    }

    /// Whether the walk stopped on an undefined transition (pure).
    pub fn is_halted(&self) -> bool {
        self.halted
    }
}

impl<'a> Iterator for Execution<'a> {
    type Item = StepResult<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        let (position, symbol) = self.input.next()?;
        let from = self.current;

        match step(self.automaton, from.as_str(), symbol) {
            Some(to) => {
                tracing::trace!(%from, %symbol, %to, "step");
                self.current = to;
                Some(StepResult::Transitioned { from, symbol, to })
            }
            None => {
                tracing::debug!(state = %from, %symbol, position, "no transition, run halted");
                self.halted = true;
                Some(StepResult::Halted {
                    state: from,
                    symbol,
                    position,
                })
            }
        }
    }
}

/// Run `automaton` over `input`, recording the derivation path.
///
/// Starts at the initial state and consumes symbols in order. The walk stops
/// at the first symbol without a transition; the path so far is kept and the
/// final state is `None`.
pub fn run(automaton: &Automaton, input: &str) -> RunRecord {
    let mut derivation = vec![automaton.initial().clone()];
    let mut halt = None;

    for result in Execution::new(automaton, input) {
        match result {
            StepResult::Transitioned { to, .. } => derivation.push(to.clone()),
            StepResult::Halted {
                state,
                symbol,
                position,
            } => {
                halt = Some(Halt {
                    position,
                    symbol,
                    state: state.clone(),
                });
            }
        }
    }

    let final_state = match halt {
        Some(_) => None,
        None => derivation.last().cloned(),
    };
    let accepted = final_state
        .as_ref()
        .is_some_and(|state| automaton.is_accepting(state.as_str()));

    RunRecord::new(input, derivation, final_state, accepted, halt)
}

/// Whether `input` is accepted: the run completes and ends in an accepting
/// state.
pub fn accepts(automaton: &Automaton, input: &str) -> bool {
    let mut execution = Execution::new(automaton, input);
    execution.by_ref().for_each(drop);
    !execution.is_halted() && automaton.is_accepting(execution.current_state().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfa;

    fn scenario() -> Automaton {
        dfa! {
            states: [q0, q1],
            alphabet: ['a', 'b'],
            initial: q0,
            accepting: [q1],
            transitions: [
                (q0, 'a') => q1,
                (q1, 'b') => q1,
            ],
        }
        .unwrap()
    }

    #[test]
    fn step_delegates_to_lookup() {
        let dfa = scenario();

        assert_eq!(step(&dfa, "q0", 'a').unwrap(), "q1");
        assert!(step(&dfa, "q0", 'b').is_none());
    }

    #[test]
    fn run_consumes_whole_input() {
        let record = run(&scenario(), "ab");

        assert_eq!(record.path(), "q0 -> q1 -> q1");
        assert_eq!(record.final_state().unwrap(), "q1");
        assert!(record.is_accepted());
        assert!(accepts(&scenario(), "ab"));
    }

    #[test]
    fn run_stops_on_undefined_transition() {
        let record = run(&scenario(), "ba");

        assert_eq!(record.path(), "q0");
        assert!(record.final_state().is_none());
        assert!(!record.is_accepted());
        assert_eq!(
            record.halt(),
            Some(&Halt {
                position: 0,
                symbol: 'b',
                state: StateId::from("q0"),
            })
        );
        assert!(!accepts(&scenario(), "ba"));
    }

    #[test]
    fn symbol_outside_alphabet_halts_like_missing_rule() {
        let record = run(&scenario(), "az");

        assert_eq!(record.path(), "q0 -> q1");
        assert!(record.final_state().is_none());
        assert_eq!(record.halt().unwrap().symbol, 'z');
    }

    #[test]
    fn empty_input_stays_in_initial_state() {
        let record = run(&scenario(), "");

        assert_eq!(record.derivation(), &[StateId::from("q0")]);
        assert_eq!(record.final_state().unwrap(), "q0");
        assert!(!record.is_accepted());
    }

    #[test]
    fn completed_run_in_non_accepting_state_is_rejected() {
        let dfa = dfa! {
            states: [q0, q1],
            alphabet: ['a'],
            initial: q0,
            accepting: [q1],
            transitions: [(q0, 'a') => q1, (q1, 'a') => q0],
        }
        .unwrap();

        let record = run(&dfa, "aa");

        assert_eq!(record.final_state().unwrap(), "q0");
        assert!(!record.is_halted());
        assert!(!record.is_accepted());
    }

    #[test]
    fn execution_reports_each_step() {
        let dfa = scenario();
        let steps: Vec<_> = dfa.execute("abb").collect();

        assert_eq!(steps.len(), 3);
        assert!(matches!(
            steps[0],
            StepResult::Transitioned { symbol: 'a', .. }
        ));
        assert!(matches!(
            steps[2],
            StepResult::Transitioned { from, symbol: 'b', to } if from == "q1" && to == "q1"
        ));
    }

    #[test]
    fn execution_stops_after_halt() {
        let dfa = scenario();
        let mut execution = dfa.execute("bab");

        assert!(matches!(
            execution.next(),
            Some(StepResult::Halted { position: 0, .. })
        ));
        assert!(execution.next().is_none());
        assert!(execution.next().is_none());
        assert_eq!(execution.current_state(), "q0");
    }

    #[test]
    fn runs_in_parallel_over_shared_automaton() {
        let dfa = scenario();
        let inputs = ["ab", "ba", "abbb", "", "a"];

        let verdicts: Vec<bool> = std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| {
                    let dfa = &dfa;
                    scope.spawn(move || accepts(dfa, input))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(verdicts, vec![true, false, true, false, true]);
    }
}
