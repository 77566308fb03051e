//! Console presentation of automata and run results.
//!
//! Rendering is read-only over core values. Coloring goes through `colored`,
//! which honors `NO_COLOR` and can be switched off globally with
//! [`colored::control::set_override`].

use crate::core::{Automaton, RunRecord};
use colored::Colorize;

const UNDEFINED: &str = "undefined";

fn list<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// One newline-terminated line per entry.
fn lines(entries: Vec<String>) -> String {
    entries.into_iter().map(|line| line + "\n").collect()
}

/// Describe an automaton: states, alphabet, initial and accepting states,
/// then one line per transition.
pub fn render_automaton(automaton: &Automaton) -> String {
    let mut out = vec![
        "Automaton".yellow().bold().to_string(),
        format!("{} {}", "States:".cyan(), list(automaton.states())),
        format!("{} {}", "Alphabet:".cyan(), list(automaton.alphabet())),
        format!("{} {}", "Initial state:".cyan(), automaton.initial()),
        format!("{} {}", "Accepting states:".cyan(), list(automaton.accepting())),
        "Transitions:".magenta().to_string(),
    ];
    out.extend(
        automaton
            .transitions()
            .iter()
            .map(|t| format!("  {}", format!("{} --{}--> {}", t.from, t.symbol, t.to).green())),
    );

    lines(out)
}

/// Describe a single transition query: `δ(state, symbol) = next`.
pub fn render_step(automaton: &Automaton, state: &str, symbol: char) -> String {
    let next = automaton
        .lookup(state, symbol)
        .map_or(UNDEFINED, |s| s.as_str());

    format!("{} δ({state}, {symbol}) = {next}\n", "Transition:".blue())
}

/// Describe one run: input, final state, derivation path, and verdict.
pub fn render_run(label: Option<&str>, record: &RunRecord) -> String {
    let heading = match label {
        Some(label) => format!("Input {label}: {:?}", record.input()),
        None => format!("Input: {:?}", record.input()),
    };
    let final_state = record.final_state().map_or(UNDEFINED, |s| s.as_str());

    let mut out = vec![
        heading.yellow().bold().to_string(),
        format!("{} {}", "Final state:".cyan(), final_state),
        format!("{} {}", "Derivation:".cyan(), record.path()),
    ];

    if let Some(halt) = record.halt() {
        out.push(format!(
            "{} no transition from {} on {:?} (position {})",
            "Halted:".cyan(),
            halt.state,
            halt.symbol,
            halt.position
        ));
    }

    let verdict = if record.is_accepted() {
        "yes".green().bold()
    } else {
        "no".red().bold()
    };
    out.push(format!("{} {}", "Accepted:".cyan(), verdict));

    lines(out)
}

/// Section heading for a suite or automaton.
pub fn render_heading(title: &str) -> String {
    format!("{}\n", format!("--- {title} ---").red().bold())
}

/// Compare a verdict with its expectation.
pub fn render_expectation(expected: bool, accepted: bool) -> String {
    let word = |accept: bool| if accept { "accept" } else { "reject" };
    if expected == accepted {
        format!("{} {} {}\n", "Expected:".cyan(), word(expected), "ok".green())
    } else {
        format!(
            "{} {} {}\n",
            "Expected:".cyan(),
            word(expected),
            "MISMATCH".red().bold()
        )
    }
}

/// One-line tally of a suite run.
pub fn render_summary(passed: usize, total: usize) -> String {
    let tally = format!("{passed}/{total} inputs matched expectations");
    if passed == total {
        format!("{}\n", tally.green().bold())
    } else {
        format!("{}\n", tally.red().bold())
    }
}

/// Pretty JSON array of run records.
pub fn runs_to_json(records: &[RunRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Pretty JSON of the normalized five-tuple (`Q`, `Sigma`, `q0`, `F`, `delta`).
pub fn automaton_to_json(automaton: &Automaton) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&automaton.to_description())
}
