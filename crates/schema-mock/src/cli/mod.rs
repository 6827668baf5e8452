//! CLI support for generating mock documents from schema files.
//!
//! The `schema-mock` binary delegates to these functions so the read,
//! generate and render flow can be exercised in tests without spawning a
//! process.

mod error;

use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;
use mockable::Clock;
use ortho_config::OrthoConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use tracing::info;

pub use error::CliError;

use crate::generator::MockGenerator;
use crate::settings::GeneratorSettings;

const PROGRAM_NAME: &str = "schema-mock";

/// `schema-mock` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "schema-mock",
    about = "Generate mock JSON documents from a JSON schema",
    version
)]
pub struct CliArgs {
    /// Path to the JSON schema file.
    #[arg(long = "schema", value_name = "path")]
    pub schema: Utf8PathBuf,
    /// Path to a JSON object of field overrides.
    #[arg(long = "user-object", value_name = "path")]
    pub user_object: Option<Utf8PathBuf>,
    /// RNG seed. Falls back to `SCHEMA_MOCK_SEED`, then to a random seed.
    #[arg(long = "seed", value_name = "seed")]
    pub seed: Option<u64>,
    /// Number of documents to generate; more than one yields a JSON array.
    #[arg(long = "count", value_name = "n", default_value = "1")]
    pub count: NonZeroUsize,
    /// Pretty-print the generated JSON.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

/// Loads generator settings from the environment and configuration files.
///
/// # Errors
///
/// Returns [`CliError::Config`] when a configured value cannot be parsed.
pub fn load_settings() -> Result<GeneratorSettings, CliError> {
    GeneratorSettings::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| {
        CliError::Config {
            message: err.to_string(),
        }
    })
}

/// Reads the input files, generates documents and renders them as JSON.
///
/// Flags take precedence over `settings`. The seed actually used is logged so
/// an unseeded run can be replayed.
///
/// # Errors
///
/// Returns [`CliError`] when an input file cannot be read or parsed, the user
/// object is not a JSON object, or generation fails.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use clap::Parser;
/// use mockable::DefaultClock;
/// use schema_mock::cli::{CliArgs, CliError, run};
/// use schema_mock::GeneratorSettings;
///
/// let args = CliArgs::parse_from(["schema-mock", "--schema", "missing/schema.json"]);
/// let settings = GeneratorSettings {
///     seed: None,
///     max_unique_attempts: None,
///     max_depth: None,
///     pretty: false,
/// };
///
/// let result = run(&args, &settings, Arc::new(DefaultClock));
/// assert!(matches!(result, Err(CliError::Io { .. })));
/// ```
pub fn run(
    args: &CliArgs,
    settings: &GeneratorSettings,
    clock: Arc<dyn Clock>,
) -> Result<String, CliError> {
    let schema = read_json(&args.schema)?;
    let user_object = args
        .user_object
        .as_deref()
        .map(read_user_object)
        .transpose()?;

    let seed = args
        .seed
        .or_else(|| settings.seed())
        .unwrap_or_else(random_seed);
    info!(seed, count = args.count.get(), schema = %args.schema, "generating mock documents");

    let generator = MockGenerator::new(clock, settings.options());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let output = if args.count.get() == 1 {
        generator.generate(&mut rng, &schema, user_object.as_ref())?
    } else {
        let documents = (0..args.count.get())
            .map(|_| generator.generate(&mut rng, &schema, user_object.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Value::Array(documents)
    };

    render(&output, args.pretty || settings.pretty)
}

fn read_user_object(path: &Utf8Path) -> Result<Value, CliError> {
    let value = read_json(path)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(CliError::InvalidUserObject {
            path: path.to_owned(),
        })
    }
}

fn read_json(path: &Utf8Path) -> Result<Value, CliError> {
    let io_error = |message: String| CliError::Io {
        path: path.to_owned(),
        message,
    };

    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io_error("path does not name a file".to_owned()))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| io_error(err.to_string()))?;
    let contents = dir
        .read_to_string(file_name)
        .map_err(|err| io_error(err.to_string()))?;

    serde_json::from_str(&contents).map_err(|err| CliError::Parse {
        path: path.to_owned(),
        message: err.to_string(),
    })
}

fn render(output: &Value, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    };
    rendered.map_err(|err| CliError::Serialize {
        message: err.to_string(),
    })
}

fn random_seed() -> u64 {
    rand::rng().random()
}
