//! Command-line front end for dfa-runner.
//!
//! Loads automaton documents, runs input strings against them, and prints
//! reports. Logging goes to stderr and is controlled by `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dfa_runner::adapters::{self, DocumentFormat};
use dfa_runner::config::SuiteConfig;
use dfa_runner::{report, Automaton};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "dfa-runner")]
#[command(about = "Simulate deterministic finite automata described in JSON, YAML, XML or CSV")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an automaton over one or more input strings
    Run {
        /// Automaton document (.json, .yml/.yaml, .xml, .csv)
        automaton: PathBuf,
        /// Input strings
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
        /// Document format, overriding the file extension
        #[arg(long)]
        format: Option<DocumentFormat>,
        /// Print run records as JSON
        #[arg(long)]
        json: bool,
        /// Print the automaton description before the runs
        #[arg(long)]
        show: bool,
    },
    /// Query a single transition
    Step {
        /// Automaton document
        automaton: PathBuf,
        /// Source state
        state: String,
        /// Input symbol
        #[arg(allow_hyphen_values = true)]
        symbol: char,
        /// Document format, overriding the file extension
        #[arg(long)]
        format: Option<DocumentFormat>,
    },
    /// Print an automaton description
    Show {
        /// Automaton document
        automaton: PathBuf,
        /// Document format, overriding the file extension
        #[arg(long)]
        format: Option<DocumentFormat>,
        /// Print the normalized description as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run every automaton and input listed in a TOML suite file
    Suite {
        /// Suite file
        file: PathBuf,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn load(path: &Path, format: Option<DocumentFormat>) -> Result<Automaton> {
    let loaded = match format {
        Some(format) => adapters::load_automaton_as(path, format),
        None => adapters::load_automaton(path),
    };
    loaded.with_context(|| format!("Failed to load automaton from {}", path.display()))
}

fn run_inputs(
    path: &Path,
    inputs: &[String],
    format: Option<DocumentFormat>,
    json: bool,
    show: bool,
) -> Result<()> {
    let automaton = load(path, format)?;
    let records: Vec<_> = inputs.iter().map(|input| automaton.run(input)).collect();

    if json {
        println!("{}", report::runs_to_json(&records)?);
        return Ok(());
    }

    if show {
        println!("{}", report::render_automaton(&automaton));
    }
    for record in &records {
        println!("{}", report::render_run(None, record));
    }
    Ok(())
}

fn show(path: &Path, format: Option<DocumentFormat>, json: bool) -> Result<()> {
    let automaton = load(path, format)?;

    if json {
        println!("{}", report::automaton_to_json(&automaton)?);
    } else {
        print!("{}", report::render_automaton(&automaton));
    }
    Ok(())
}

fn run_suite(file: &Path) -> Result<ExitCode> {
    let config = SuiteConfig::load(file)
        .with_context(|| format!("Failed to load suite {}", file.display()))?;

    let mut passed = 0;
    let mut total = 0;

    for suite in &config.suites {
        print!("{}", report::render_heading(&suite.name));
        println!("File: {}", suite.automaton.display());

        let automaton = suite
            .load_automaton()
            .with_context(|| format!("Suite '{}'", suite.name))?;

        if suite.show_automaton {
            println!("{}", report::render_automaton(&automaton));
        }

        let outcome = suite.run(&automaton);
        for result in &outcome.results {
            print!("{}", report::render_run(Some(&result.label), &result.record));
            if let Some(expected) = result.expect {
                print!(
                    "{}",
                    report::render_expectation(expected, result.record.is_accepted())
                );
            }
            println!();
        }

        passed += outcome.passed();
        total += outcome.results.len();
    }

    print!("{}", report::render_summary(passed, total));

    Ok(if passed == total {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn execute(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Run {
            automaton,
            inputs,
            format,
            json,
            show,
        } => run_inputs(&automaton, &inputs, format, json, show).map(|()| ExitCode::SUCCESS),
        Commands::Step {
            automaton,
            state,
            symbol,
            format,
        } => {
            let automaton = load(&automaton, format)?;
            print!("{}", report::render_step(&automaton, &state, symbol));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show {
            automaton,
            format,
            json,
        } => show(&automaton, format, json).map(|()| ExitCode::SUCCESS),
        Commands::Suite { file } => run_suite(&file),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match execute(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
