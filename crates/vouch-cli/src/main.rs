//! vouch: validate a retrieved JSON document against acceptance criteria.
//!
//! Acquires a document from a URL or file, loads the criteria (a JSON file
//! or the built-in default), runs the matcher, and renders the report.
//! Exit status: 0 on overall PASS, 1 on overall FAIL, 2 when acquisition or
//! criteria loading fails before matching could run.

mod acquire;
mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use acquire::{acquire, DEFAULT_SOURCE};
use vouch_core::{check, CriteriaSet};

/// Criteria file picked up from the working directory when present.
const DEFAULT_CRITERIA_FILE: &str = "acceptance_criteria.json";

#[derive(Parser, Debug)]
#[command(
    name = "vouch",
    version,
    about = "Validate a retrieved JSON document against declared acceptance criteria"
)]
struct Cli {
    /// Document source: an http(s) URL or a local file path
    #[arg(default_value = DEFAULT_SOURCE)]
    source: String,

    /// Criteria file (JSON object); defaults to ./acceptance_criteria.json
    /// when present, otherwise the built-in criteria
    #[arg(long, value_name = "PATH")]
    criteria: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let criteria = load_criteria(cli.criteria.as_deref())?;

    render::phase("Get the document from the source...");
    info!("{}", cli.source);
    let document = acquire(&cli.source)
        .with_context(|| format!("failed to acquire document from {}", cli.source))?;

    render::phase("Validation is started...");
    let report = check(&criteria, &document);
    render::report(&report);
    render::phase("Validation is completed.");

    Ok(report.passed())
}

/// Load criteria from an explicit path, the default file, or the built-in
/// fallback, in that order. Explicit and default files that exist but do
/// not parse are fatal.
fn load_criteria(path: Option<&Path>) -> anyhow::Result<CriteriaSet> {
    if let Some(path) = path {
        return CriteriaSet::from_json_file(path)
            .with_context(|| format!("failed to load criteria from {}", path.display()));
    }

    let default = Path::new(DEFAULT_CRITERIA_FILE);
    if default.exists() {
        CriteriaSet::from_json_file(default)
            .with_context(|| format!("failed to load criteria from {DEFAULT_CRITERIA_FILE}"))
    } else {
        info!("no {DEFAULT_CRITERIA_FILE} found, the default acceptance criteria will be configured");
        Ok(CriteriaSet::default())
    }
}
