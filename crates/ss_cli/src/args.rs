// crates/ss_cli/src/args.rs
//
// Deterministic, offline CLI argument surface (types + validation).
//
// Rules:
// - No networked paths (reject any scheme:// like http/https/file)
// - Listing modes (--list-scenarios, --scenario, --demo) take no run inputs
// - Run inputs: --params <file|-> and/or per-field overrides
// - --render requires --out

use clap::Parser;
use std::path::{Path, PathBuf};

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "syncsim",
    version,
    disable_help_subcommand = true,
    about = "Offline, deterministic election-synchronization scenario simulator"
)]
pub struct Args {
    // --- Catalogue modes ---
    /// Print the preset scenario ids and names, then exit.
    #[arg(long, conflicts_with_all = ["scenario", "demo"])]
    pub list_scenarios: bool,
    /// Print one preset scenario (unknown ids fall back to the default preset).
    #[arg(long, conflicts_with = "demo")]
    pub scenario: Option<String>,
    /// Print the guest demo records and the fallback baseline result.
    #[arg(long)]
    pub demo: bool,

    // --- Run inputs ---
    /// Request JSON path, or `-` for stdin.
    #[arg(long)]
    pub params: Option<PathBuf>,
    /// Election model override (current, partial, full).
    #[arg(long)]
    pub model: Option<String>,
    /// States-count override.
    #[arg(long)]
    pub states: Option<String>,
    /// Cycle-length override (years).
    #[arg(long)]
    pub cycle: Option<String>,
    /// Cost assumption override (low, medium, high).
    #[arg(long)]
    pub cost: Option<String>,
    /// Manpower level override (minimal, standard, heavy).
    #[arg(long)]
    pub manpower: Option<String>,
    /// Budget level override (tight, normal, comfortable, high).
    #[arg(long)]
    pub budget: Option<String>,

    /// Reject unrecognized, malformed or missing values instead of defaulting them.
    #[arg(long)]
    pub strict: bool,

    /// Second request JSON to compare the run against.
    #[arg(long)]
    pub compare_with: Option<PathBuf>,

    // --- Output & rendering ---
    /// Output directory for `result.json` (omit to print the result to stdout).
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Report renderer(s) to emit into --out. Choose up to 2 (json, html).
    #[arg(long, value_parser = ["json", "html"], num_args = 1..=2)]
    pub render: Vec<String>,

    /// Only log errors.
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    pub fn is_catalogue_mode(&self) -> bool {
        self.list_scenarios || self.scenario.is_some() || self.demo
    }

    /// Request overrides as (wire field, raw value), in wire order.
    pub fn overrides(&self) -> Vec<(&'static str, &str)> {
        [
            ("electionModel", &self.model),
            ("statesCount", &self.states),
            ("cycleLength", &self.cycle),
            ("costAssumption", &self.cost),
            ("manpowerLevel", &self.manpower),
            ("budgetLevel", &self.budget),
        ]
        .into_iter()
        .filter_map(|(field, v)| v.as_deref().map(|s| (field, s)))
        .collect()
    }
}

/// Errors surfaced by argument validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    Parse(String),
    BadCombo(&'static str),
    NonLocalPath(String),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            Parse(s) => write!(f, "{s}"),
            BadCombo(s) => write!(f, "invalid flag combination: {s}"),
            NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
            NotFound(p) => write!(f, "file not found: {p}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Reject any explicit URI scheme (e.g., http://, https://, file://).
#[inline]
fn has_scheme(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://") || lower.starts_with("http:") || lower.starts_with("https:") || lower.starts_with("file:")
}

#[inline]
fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    match p.to_str() {
        Some(s) if has_scheme(s) => Err(CliError::NonLocalPath(s.to_string())),
        _ => Ok(()),
    }
}

#[inline]
fn is_stdin(p: &Path) -> bool {
    p.as_os_str() == "-"
}

/// Structural checks that clap's attributes cannot express.
pub fn validate(args: &Args) -> Result<(), CliError> {
    let has_run_inputs = args.params.is_some()
        || !args.overrides().is_empty()
        || args.compare_with.is_some()
        || args.out.is_some()
        || args.strict;
    if args.is_catalogue_mode() && has_run_inputs {
        return Err(CliError::BadCombo("catalogue modes take no run inputs"));
    }
    if !args.render.is_empty() && args.out.is_none() {
        return Err(CliError::BadCombo("--render requires --out"));
    }

    let inputs = args.params.iter().chain(args.compare_with.iter());
    for p in inputs.clone().chain(args.out.iter()) {
        ensure_local_path(p)?;
    }
    for p in inputs {
        if !is_stdin(p) && !p.is_file() {
            return Err(CliError::NotFound(p.display().to_string()));
        }
    }
    if args.compare_with.as_deref().is_some_and(is_stdin) {
        return Err(CliError::BadCombo("--compare-with cannot read stdin"));
    }
    Ok(())
}

/// Parse from the process arguments and validate.
pub fn parse_and_validate() -> Result<Args, CliError> {
    let args = Args::try_parse().map_err(|e| {
        // --help / --version are not errors; let clap print and exit 0.
        if !e.use_stderr() {
            e.exit();
        }
        CliError::Parse(e.to_string())
    })?;
    validate(&args)?;
    Ok(args)
}
