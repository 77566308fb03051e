//! Structural validation of automaton descriptions.
//!
//! Uses Stillwater's `Validation` to accumulate every violation instead of
//! stopping at the first one, so a broken document is reported in one pass.

use crate::core::description::RawAutomatonDescription;
use crate::core::error::Violation;
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<Violation>>;

fn check(ok: bool, violation: impl FnOnce() -> Violation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Run every structural check against a description.
pub(crate) fn validate(raw: &RawAutomatonDescription) -> Check {
    let states: HashSet<&str> = raw.states.iter().map(String::as_str).collect();
    let alphabet: HashSet<&str> = raw.alphabet.iter().map(String::as_str).collect();

    let mut checks: Vec<Check> = Vec::new();

    checks.push(check(!states.is_empty(), || Violation::NoStates));
    checks.push(check(!alphabet.is_empty(), || Violation::EmptyAlphabet));

    if raw.initial.is_empty() {
        checks.push(Validation::fail(Violation::MissingInitialState));
    } else {
        checks.push(check(states.contains(raw.initial.as_str()), || {
            Violation::UnknownInitialState {
                state: raw.initial.clone(),
            }
        }));
    }

    for state in &raw.accepting {
        checks.push(check(states.contains(state.as_str()), || {
            Violation::UnknownAcceptingState {
                state: state.clone(),
            }
        }));
    }

    let mut seen: HashMap<(&str, &str), &str> = HashMap::new();

    for (from, symbol, to) in &raw.transitions {
        let triple = || (from.clone(), symbol.clone(), to.clone());

        checks.push(check(states.contains(from.as_str()), || {
            let (from, symbol, to) = triple();
            Violation::UnknownSourceState { from, symbol, to }
        }));
        checks.push(check(states.contains(to.as_str()), || {
            let (from, symbol, to) = triple();
            Violation::UnknownTargetState { from, symbol, to }
        }));
        checks.push(check(alphabet.contains(symbol.as_str()), || {
            let (from, symbol, to) = triple();
            Violation::SymbolOutsideAlphabet { from, symbol, to }
        }));

        match seen.get(&(from.as_str(), symbol.as_str())) {
            Some(first) if *first != to.as_str() => {
                checks.push(Validation::fail(Violation::ConflictingTransition {
                    state: from.clone(),
                    symbol: symbol.clone(),
                    first: (*first).to_string(),
                    second: to.clone(),
                }));
            }
            Some(_) => {}
            None => {
                seen.insert((from.as_str(), symbol.as_str()), to.as_str());
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(
        states: &[&str],
        alphabet: &[&str],
        initial: &str,
        accepting: &[&str],
        delta: &[(&str, &str, &str)],
    ) -> RawAutomatonDescription {
        let owned = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        RawAutomatonDescription {
            states: owned(states),
            alphabet: owned(alphabet),
            initial: initial.to_string(),
            accepting: owned(accepting),
            transitions: delta
                .iter()
                .map(|(a, b, c)| (a.to_string(), b.to_string(), c.to_string()))
                .collect(),
        }
    }

    fn violations(result: Check) -> Vec<Violation> {
        match result {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    #[test]
    fn well_formed_description_passes() {
        let result = validate(&raw(
            &["q0", "q1"],
            &["a", "b"],
            "q0",
            &["q1"],
            &[("q0", "a", "q1"), ("q1", "b", "q1")],
        ));

        assert!(result.is_success());
    }

    #[test]
    fn accumulates_all_violations() {
        let found = violations(validate(&raw(
            &["q0"],
            &["a", "bc"],
            "q9",
            &["q7"],
            &[("q0", "z", "q3")],
        )));

        assert!(found.contains(&Violation::UnknownInitialState {
            state: "q9".into()
        }));
        assert!(found.contains(&Violation::UnknownAcceptingState {
            state: "q7".into()
        }));
        assert!(found.contains(&Violation::UnknownTargetState {
            from: "q0".into(),
            symbol: "z".into(),
            to: "q3".into(),
        }));
        assert!(found.contains(&Violation::SymbolOutsideAlphabet {
            from: "q0".into(),
            symbol: "z".into(),
            to: "q3".into(),
        }));
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn empty_description_reports_missing_parts() {
        let found = violations(validate(&RawAutomatonDescription::default()));

        assert_eq!(
            found,
            vec![
                Violation::NoStates,
                Violation::EmptyAlphabet,
                Violation::MissingInitialState
            ]
        );
    }

    #[test]
    fn conflicting_transitions_are_rejected() {
        let found = violations(validate(&raw(
            &["q0", "q1"],
            &["a"],
            "q0",
            &[],
            &[("q0", "a", "q0"), ("q0", "a", "q1")],
        )));

        assert_eq!(
            found,
            vec![Violation::ConflictingTransition {
                state: "q0".into(),
                symbol: "a".into(),
                first: "q0".into(),
                second: "q1".into(),
            }]
        );
    }

    #[test]
    fn duplicate_identical_transitions_are_tolerated() {
        let result = validate(&raw(
            &["q0"],
            &["a"],
            "q0",
            &[],
            &[("q0", "a", "q0"), ("q0", "a", "q0")],
        ));

        assert!(result.is_success());
    }

    #[test]
    fn multi_character_tokens_are_valid_symbols() {
        let result = validate(&raw(
            &["q0", "q1"],
            &["a", "id"],
            "q0",
            &["q1"],
            &[("q0", "a", "q1"), ("q1", "id", "q1")],
        ));

        assert!(result.is_success());
    }

    #[test]
    fn token_outside_alphabet_is_reported_once() {
        let found = violations(validate(&raw(
            &["q0"],
            &["a"],
            "q0",
            &[],
            &[("q0", "aa", "q0")],
        )));

        assert_eq!(
            found,
            vec![Violation::SymbolOutsideAlphabet {
                from: "q0".into(),
                symbol: "aa".into(),
                to: "q0".into(),
            }]
        );
    }
}
