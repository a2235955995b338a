//! fdclosure CLI -- compute attribute closures under functional dependencies.

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use derive_more::From;
use fdclosure_core::{Closure, FunctionalDependency, ProgressTracking};
use fdclosure_parser::{parse_dependencies, ParseError};

pub mod fixtures;

#[derive(Debug, Parser)]
#[command(
    name = "fdclosure",
    about = "Attribute closure under functional dependencies"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the closure of an attribute group
    Closure(ClosureArgs),
    /// Print the closures of the two textbook examples
    Demo,
    /// Generate random closure problems
    Generate(GenerateArgs),
    /// Compute closures for generated problem files
    Solve(SolveArgs),
    /// Format dependency list (.fd) files; comments are not preserved
    Fmt(FmtArgs),
    /// Print the JSON Schema for the problem file format to stdout
    Schema,
}

#[derive(Debug, Parser)]
pub struct ClosureArgs {
    /// Starting attribute group, one attribute per character (e.g. AG)
    #[arg(long)]
    pub attributes: String,
    /// Dependency list file in the .fd text format
    #[arg(long)]
    pub dependencies: Option<PathBuf>,
    /// A single dependency such as "CG->H"; may be repeated
    #[arg(long = "dependency", short = 'd', allow_hyphen_values = true)]
    pub dependency: Vec<String>,
    /// How the saturation loop tracks applied dependencies
    #[arg(long, value_enum, default_value_t = TrackingMode::Attribute)]
    pub tracking: TrackingMode,
    /// Output the result as a JSON object
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of problems to generate
    #[arg(long)]
    pub n_problem: u64,
    /// Alphabet size (at most 26)
    #[arg(long)]
    pub n_attribute: u64,
    /// Number of dependencies per problem
    #[arg(long)]
    pub n_dependency: u64,
    /// Largest number of attributes on either side of a dependency
    #[arg(long, default_value_t = 3)]
    pub max_side: u64,
    /// Output directory for generated problem files
    #[arg(long)]
    pub output_dir: PathBuf,
}

#[derive(Debug, Parser)]
pub struct SolveArgs {
    /// Input directory containing problem JSON files
    #[arg(long)]
    pub input_dir: PathBuf,
    /// How the saturation loop tracks applied dependencies
    #[arg(long, value_enum, default_value_t = TrackingMode::Attribute)]
    pub tracking: TrackingMode,
    /// Print the full iteration trace for every problem
    #[arg(long)]
    pub verbose: bool,
    /// Output results as JSON (one object per file)
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct FmtArgs {
    /// Input files or directories to format
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Check formatting without modifying files (exit 1 if unformatted)
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TrackingMode {
    Attribute,
    Dependency,
}

impl From<TrackingMode> for ProgressTracking {
    fn from(mode: TrackingMode) -> Self {
        match mode {
            TrackingMode::Attribute => Self::Attribute,
            TrackingMode::Dependency => Self::Dependency,
        }
    }
}

/// Anything that makes a command fail.
#[derive(Debug, From)]
pub enum CliError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Parse(ParseError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Collects the dependencies of a `closure` invocation: the file first, then
/// every `--dependency` in command-line order.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be read and
/// [`CliError::Parse`] if the file or an inline dependency is malformed.
pub fn load_dependencies(args: &ClosureArgs) -> Result<Vec<FunctionalDependency>, CliError> {
    let mut dependencies = match &args.dependencies {
        Some(path) => parse_dependencies(&fs::read_to_string(path)?)?,
        None => Vec::new(),
    };
    for inline in &args.dependency {
        dependencies.extend(parse_dependencies(inline)?);
    }
    tracing::debug!(
        dependencies = dependencies.len(),
        "closure: dependencies loaded"
    );
    Ok(dependencies)
}

/// The JSON form of a closure result.
#[must_use]
pub fn closure_json(result: &Closure) -> serde_json::Value {
    serde_json::json!({
        "attributes": result.attributes(),
        "closure": result.result(),
        "trace": result.trace(),
        "iterations": result.iterations(),
    })
}

/// Expands directories to the `.fd` files they contain, sorted by path.
///
/// # Errors
///
/// Returns [`CliError::Io`] if a directory cannot be read.
pub fn collect_fd_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)?
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|p| is_fd_file(p))
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn is_fd_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "fd")
}
