//! Generate mock JSON documents from a JSON schema.
//!
//! This binary delegates to `schema_mock::cli` for reading inputs and
//! generating output. Generated JSON goes to stdout; structured logs and
//! errors go to stderr.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mockable::DefaultClock;
use schema_mock::cli::{CliArgs, CliError, load_settings, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    match execute(&args) {
        Ok(output) => write_output(&output),
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &CliArgs) -> Result<String, CliError> {
    let settings = load_settings()?;
    run(args, &settings, Arc::new(DefaultClock))
}

fn write_output(output: &str) -> ExitCode {
    match writeln!(io::stdout().lock(), "{output}") {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            warn!(error = %err, "failed to write output");
            ExitCode::FAILURE
        }
    }
}
