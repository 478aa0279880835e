//! `brotocare-shell`: drive the complaint desk over JSON lines.
//!
//! Commands are read from stdin, or from `--script <path>`, one JSON object
//! per line. Responses go to stdout and structured logs to stderr.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

use brotocare::domain::ports::UuidIdGenerator;
use brotocare::domain::ComplaintDesk;
use brotocare::example_data::{ExampleDataSettings, load_initial_desk, read_text_file};
use brotocare::inbound::shell::Shell;
use clap::Parser;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `brotocare-shell` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "brotocare-shell",
    about = "Submit, triage and report on student complaints from a JSON-lines shell",
    version
)]
struct CliArgs {
    /// Read commands from this file instead of stdin.
    #[arg(long = "script", value_name = "path")]
    script: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let settings = ExampleDataSettings::load_from_iter([OsString::from("brotocare")])
        .map_err(|error| io::Error::other(format!("load example data settings: {error}")))?;

    let clock = Arc::new(DefaultClock);
    let outcome = load_initial_desk(&settings, Arc::clone(&clock))
        .map_err(|error| io::Error::other(format!("build initial desk: {error}")))?;
    info!(
        seed_key = outcome.seed_key.as_deref().unwrap_or("none"),
        users = outcome.state.users().len(),
        complaints = outcome.state.complaints().len(),
        "desk ready"
    );

    let desk = ComplaintDesk::new(clock, Arc::new(UuidIdGenerator));
    let mut shell = Shell::new(desk, outcome.state);
    let stdout = io::stdout().lock();
    match args.script {
        Some(path) => {
            let script = read_text_file(&path)?;
            shell.run(script.as_bytes(), stdout)
        }
        None => shell.run(BufReader::new(io::stdin().lock()), stdout),
    }
}
