//! The validated, immutable DFA.

use crate::core::description::RawAutomatonDescription;
use crate::core::engine::{self, Execution};
use crate::core::error::MalformedAutomatonError;
use crate::core::run::RunRecord;
use crate::core::state::StateId;
use crate::core::symbol::Symbol;
use crate::core::validate::validate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use stillwater::validation::Validation;

/// A single `(source, symbol) -> destination` rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Transition {
    pub from: StateId,
    pub symbol: Symbol,
    pub to: StateId,
}

/// A deterministic finite automaton.
///
/// Built once from a [`RawAutomatonDescription`] (or the builder) and
/// read-only afterwards, so a single value can be shared across threads and
/// used for any number of runs.
///
/// Transitions are indexed by state and then by symbol; [`Automaton::lookup`]
/// never scans the transition list.
///
/// # Example
///
/// ```rust
/// use dfa_runner::core::{Automaton, RawAutomatonDescription};
///
/// let raw = RawAutomatonDescription {
///     states: vec!["q0".into(), "q1".into()],
///     alphabet: vec!["a".into(), "b".into()],
///     initial: "q0".into(),
///     accepting: vec!["q1".into()],
///     transitions: vec![
///         ("q0".into(), "a".into(), "q1".into()),
///         ("q1".into(), "b".into(), "q1".into()),
///     ],
/// };
///
/// let dfa = Automaton::from_description(raw).unwrap();
///
/// assert_eq!(dfa.lookup("q0", 'a').map(|s| s.as_str()), Some("q1"));
/// assert!(dfa.lookup("q0", 'b').is_none());
/// assert!(dfa.accepts("abbb"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<StateId>,
    state_set: HashSet<StateId>,
    alphabet: Vec<Symbol>,
    initial: StateId,
    accepting: Vec<StateId>,
    accepting_set: HashSet<StateId>,
    transitions: Vec<Transition>,
    index: HashMap<StateId, HashMap<char, StateId>>,
}

impl Automaton {
    /// Validate a raw description and build the automaton.
    ///
    /// Every structural violation is collected; on failure the error lists
    /// all of them. Exact duplicates (states, symbols, transitions) are
    /// collapsed silently.
    pub fn from_description(
        raw: RawAutomatonDescription,
    ) -> Result<Self, MalformedAutomatonError> {
        match validate(&raw) {
            Validation::Success(_) => Ok(Self::assemble(raw)),
            Validation::Failure(violations) => Err(MalformedAutomatonError::new(
                violations.iter().cloned().collect(),
            )),
        }
    }

    // Only called on descriptions that passed validation.
    fn assemble(raw: RawAutomatonDescription) -> Self {
        let states = dedup(raw.states.into_iter().map(StateId::from));
        let state_set: HashSet<StateId> = states.iter().cloned().collect();
        let alphabet = dedup(raw.alphabet.into_iter().map(Symbol::from));
        let accepting = dedup(raw.accepting.into_iter().map(StateId::from));
        let accepting_set = accepting.iter().cloned().collect();

        let transitions = dedup(raw.transitions.into_iter().map(|(from, symbol, to)| Transition {
            from: StateId::from(from),
            symbol: Symbol::from(symbol),
            to: StateId::from(to),
        }));

        // Input is read per char, so only single-character rules are indexed.
        let mut index: HashMap<StateId, HashMap<char, StateId>> = HashMap::new();
        for t in &transitions {
            let Some(symbol) = t.symbol.as_char() else {
                tracing::debug!(
                    from = %t.from,
                    symbol = %t.symbol,
                    to = %t.to,
                    "multi-character symbol, transition can never fire"
                );
                continue;
            };
            index
                .entry(t.from.clone())
                .or_default()
                .entry(symbol)
                .or_insert_with(|| t.to.clone());
        }

        Self {
            states,
            state_set,
            alphabet,
            initial: StateId::from(raw.initial),
            accepting,
            accepting_set,
            transitions,
            index,
        }
    }

    /// Destination for `(state, symbol)`, or `None` when no rule exists.
    ///
    /// A symbol outside the alphabet and a known symbol without a rule are
    /// indistinguishable here: both yield `None`.
    pub fn lookup(&self, state: &str, symbol: char) -> Option<&StateId> {
        self.index.get(state)?.get(&symbol)
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    /// Input symbols, in declaration order.
    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    pub fn initial(&self) -> &StateId {
        &self.initial
    }

    /// Accepting states, in declaration order.
    pub fn accepting(&self) -> &[StateId] {
        &self.accepting
    }

    /// Transition rules, in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.state_set.contains(state)
    }

    pub fn is_accepting(&self, state: &str) -> bool {
        self.accepting_set.contains(state)
    }

    pub fn in_alphabet(&self, symbol: char) -> bool {
        self.alphabet.iter().any(|s| *s == symbol)
    }

    /// Start a stepwise execution over `input`.
    pub fn execute<'a>(&'a self, input: &'a str) -> Execution<'a> {
        Execution::new(self, input)
    }

    /// Run the automaton over `input`. See [`engine::run`].
    pub fn run(&self, input: &str) -> RunRecord {
        engine::run(self, input)
    }

    /// Whether `input` is accepted. See [`engine::accepts`].
    pub fn accepts(&self, input: &str) -> bool {
        engine::accepts(self, input)
    }

    /// Convert back to the normalized five-tuple form.
    pub fn to_description(&self) -> RawAutomatonDescription {
        RawAutomatonDescription {
            states: self.states.iter().map(ToString::to_string).collect(),
            alphabet: self.alphabet.iter().map(ToString::to_string).collect(),
            initial: self.initial.to_string(),
            accepting: self.accepting.iter().map(ToString::to_string).collect(),
            transitions: self
                .transitions
                .iter()
                .map(|t| (t.from.to_string(), t.symbol.to_string(), t.to.to_string()))
                .collect(),
        }
    }
}

fn dedup<T, I>(items: I) -> Vec<T>
where
    T: Clone + Eq + std::hash::Hash,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "States: {}", join(&self.states))?;
        writeln!(f, "Alphabet: {}", join(&self.alphabet))?;
        writeln!(f, "Initial state: {}", self.initial)?;
        writeln!(f, "Accepting states: {}", join(&self.accepting))?;
        write!(f, "Transitions:")?;
        for t in &self.transitions {
            write!(f, "\n  {} --{}--> {}", t.from, t.symbol, t.to)?;
        }
        Ok(())
    }
}
