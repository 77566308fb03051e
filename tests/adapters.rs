//! Loading the bundled sample documents through every format adapter.

use dfa_runner::adapters::{self, parse_automaton, parse_description, DocumentFormat, LoadError};
use dfa_runner::{Automaton, Violation};
use std::fs;
use std::path::PathBuf;

fn asset(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(name)
}

fn load(name: &str) -> Automaton {
    adapters::load_automaton(asset(name)).unwrap()
}

#[test]
fn every_format_yields_the_same_automaton() {
    let reference = load("dfa.json");

    for name in ["dfa.yml", "dfa.xml", "dfa.csv"] {
        assert_eq!(load(name), reference, "{name} differs from dfa.json");
    }
}

#[test]
fn every_format_yields_the_same_verdicts() {
    let automata: Vec<_> = ["dfa.json", "dfa.yml", "dfa.xml", "dfa.csv"]
        .into_iter()
        .map(load)
        .collect();

    for input in ["", "aabbaa", "b", "abab", "bbb", "abc"] {
        let verdicts: Vec<_> = automata.iter().map(|a| a.accepts(input)).collect();
        assert!(
            verdicts.windows(2).all(|w| w[0] == w[1]),
            "formats disagree on {input:?}: {verdicts:?}"
        );
    }
}

#[test]
fn even_b_count_document() {
    let automaton = load("dfa.xml");
    let record = automaton.run("aabbaa");

    assert!(record.is_accepted());
    assert_eq!(record.path(), "q0 -> q0 -> q0 -> q1 -> q0 -> q0 -> q0");
    assert!(!automaton.accepts("ab"));
}

#[test]
fn contains_ab_document() {
    let automaton = load("dfa1.yml");

    assert!(automaton.accepts("abbaab"));
    assert!(automaton.accepts("ab"));
    assert!(!automaton.accepts("bbaa"));
}

#[test]
fn numeric_literal_document() {
    let automaton = load("numeric.json");

    assert!(automaton.accepts("+0.1234567"));
    assert!(automaton.accepts("42"));
    assert!(automaton.accepts("-3.5"));
    assert!(!automaton.accepts("1.61-8081"));
    assert!(!automaton.accepts("2024.3.3.3"));
    assert!(!automaton.accepts("7."));
}

#[test]
fn numeric_literal_halts_on_second_dot() {
    let record = load("numeric.json").run("2024.3.3.3");
    let halt = record.halt().unwrap();

    assert!(record.final_state().is_none());
    assert_eq!(halt.position, 6);
    assert_eq!(halt.symbol, '.');
    assert_eq!(halt.state.as_str(), "q4");
}

#[test]
fn explicit_format_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("automaton.txt");
    fs::copy(asset("dfa.yml"), &path).unwrap();

    assert!(matches!(
        adapters::load_automaton(&path),
        Err(LoadError::UnsupportedFormat { .. })
    ));

    let automaton = adapters::load_automaton_as(&path, DocumentFormat::Yaml).unwrap();
    assert!(automaton.accepts("aabbaa"));
}

#[test]
fn descriptions_agree_before_validation() {
    let json = fs::read_to_string(asset("dfa.json")).unwrap();
    let csv = fs::read_to_string(asset("dfa.csv")).unwrap();

    let from_json = parse_description(&json, DocumentFormat::Json).unwrap();
    let from_csv = parse_description(&csv, DocumentFormat::Csv).unwrap();

    assert_eq!(from_json.states, from_csv.states);
    assert_eq!(from_json.alphabet, from_csv.alphabet);
    assert_eq!(from_json.initial, from_csv.initial);
    assert_eq!(from_json.accepting, from_csv.accepting);
    assert_eq!(from_json.transitions, from_csv.transitions);
}

#[test]
fn malformed_document_reports_every_violation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{
            "Q": ["q0", "q1"],
            "Sigma": ["a", "bc"],
            "q0": "q9",
            "F": ["q1"],
            "delta": [["q0", "a", "q1"], ["q0", "a", "q0"], ["q1", "c", "q1"]]
        }"#,
    )
    .unwrap();

    let Err(LoadError::Malformed(err)) = adapters::load_automaton(&path) else {
        panic!("expected a malformed automaton error");
    };

    assert!(err.has(|v| matches!(v, Violation::SymbolOutsideAlphabet { symbol, .. } if symbol == "c")));
    assert!(err.has(|v| matches!(v, Violation::UnknownInitialState { .. })));
    assert!(err.has(|v| matches!(v, Violation::ConflictingTransition { .. })));
    assert_eq!(err.violations.len(), 3);
}

#[test]
fn multi_character_tokens_load_from_json() {
    let automaton = parse_automaton(
        r#"{
            "Q": ["q0", "q1"],
            "Sigma": ["a", "id"],
            "q0": "q0",
            "F": ["q1"],
            "delta": [["q0", "a", "q1"], ["q1", "id", "q1"]]
        }"#,
        DocumentFormat::Json,
    )
    .unwrap();

    assert!(automaton.accepts("a"));
    assert!(!automaton.accepts("aid"));
    assert_eq!(automaton.alphabet()[1], "id");
}

#[test]
fn multi_character_tokens_load_from_csv() {
    let automaton = parse_automaton(
        "# States,Q,q0,q1\n\
         # Alphabet,Sigma,a,num\n\
         # Initial,q0,q0\n\
         # Accepting,F,q1\n\
         q0,a,q1\n\
         q1,num,q0\n",
        DocumentFormat::Csv,
    )
    .unwrap();

    assert_eq!(automaton.transitions().len(), 2);
    assert!(automaton.accepts("a"));
    assert!(automaton.lookup("q1", 'n').is_none());
}
