//! ss_pipeline: request → results orchestration (coerce → calculate → fallback → id).
//! Raw JSON handling, canonical bytes and hashing live in `ss_io`; the math
//! lives in `ss_algo`. Nothing here touches the filesystem.

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use ss_core::ids::ResultId;
use ss_core::SimulationParams;
use ss_io::loader::{coerce_params, Coercion};
use ss_io::{hasher, IoError};

pub mod calculate;
pub mod compare;
pub mod record;

pub use calculate::{
    calculate, calculate_or_fallback, fallback_results, try_calculate, CalculatedResults, EngineError, Outcome,
};
pub use compare::{compare, ComparisonRow, Verdict};
pub use record::SimulationRecord;

/// Engine identifiers, baked from the crate manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineMeta {
    pub name: &'static str,
    pub version: &'static str,
}

pub const ENGINE: EngineMeta = EngineMeta {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

/// How the boundary treats fields it had to default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Default every missing/unrecognized/malformed field and carry on.
    #[default]
    Lenient,
    /// Reject the request if any field had to be defaulted.
    Strict,
}

/// Single error surface for the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("validation: {0}")]
    Validate(String),
    #[error("io: {0}")]
    Io(String),
    #[error("build: {0}")]
    Build(String),
}

impl From<IoError> for PipelineError {
    fn from(e: IoError) -> Self {
        match e {
            IoError::Invalid(m) => PipelineError::Validate(m),
            IoError::Path(m) => PipelineError::Io(format!("path: {m}")),
            IoError::Json { pointer, msg } => PipelineError::Build(format!("json {pointer}: {msg}")),
            IoError::Hash(m) => PipelineError::Build(format!("hash: {m}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOutputs {
    pub params: SimulationParams,
    /// Fields the boundary defaulted (always empty in strict mode).
    pub coercions: Vec<Coercion>,
    pub results: CalculatedResults,
    pub outcome: Outcome,
    pub result_id: ResultId,
}

impl RunOutputs {
    /// The `result.json` document: id, resolved params, outcome, defaulted fields and results.
    pub fn result_doc(&self) -> Value {
        let coerced: Vec<String> = self.coercions.iter().map(ToString::to_string).collect();
        json!({
            "id": self.result_id.as_str(),
            "engine": ENGINE,
            "params": self.params,
            "outcome": self.outcome,
            "coercions": coerced,
            "results": self.results,
        })
    }

    pub fn record(&self) -> SimulationRecord {
        SimulationRecord::from_run(&self.params, &self.results)
    }
}

/// Raw request → outputs. In `Mode::Lenient` this only fails if hashing fails.
pub fn run(request: &Value, mode: Mode) -> Result<RunOutputs, PipelineError> {
    let coerced = coerce_params(request);
    let coercions = coerced.coercions.clone();
    let params = match mode {
        Mode::Lenient => coerced.params,
        Mode::Strict => coerced.into_strict()?,
    };
    let mut out = run_params(&params)?;
    out.coercions = coercions;
    Ok(out)
}

/// Typed params → outputs (no coercion step).
pub fn run_params(params: &SimulationParams) -> Result<RunOutputs, PipelineError> {
    let (results, outcome) = calculate_or_fallback(params);
    let result_id = hasher::result_id_for(params, &results)?;
    tracing::debug!(id = %result_id, ?outcome, "run complete");
    Ok(RunOutputs { params: *params, coercions: Vec::new(), results, outcome, result_id })
}
