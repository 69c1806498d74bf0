//! Loader: read a request JSON and coerce it into `SimulationParams`.
//!
//! Coercion is lenient: a field that is missing, unrecognized, or malformed
//! falls back to its default and is recorded as a `Coercion`, never an error.
//! Callers that want rejection inspect `Coerced::coercions` (or call
//! `Coerced::into_strict`). No network I/O.

#![forbid(unsafe_code)]

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};
use ss_core::rounding::round_half_up;
use ss_core::variables::{DEFAULT_CYCLE_LENGTH, DEFAULT_STATES_COUNT};
use ss_core::{BudgetLevel, CostAssumption, ElectionModel, ManpowerLevel, SimulationParams};

use crate::IoError;

/// Request files are tiny; anything larger is not a parameter set.
pub const MAX_PARAMS_BYTES: u64 = 64 * 1024;

// ----------------------------- Public types -----------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercionKind {
    /// Field absent or `null`.
    Missing,
    /// A string that is not one of the field's tokens.
    Unrecognized(String),
    /// Wrong JSON type, negative, fractional overflow, or non-numeric text.
    Malformed(String),
}

/// One field that was replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coercion {
    pub field: &'static str,
    pub kind: CoercionKind,
}

impl fmt::Display for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CoercionKind::Missing => write!(f, "{}: missing", self.field),
            CoercionKind::Unrecognized(s) => write!(f, "{}: unrecognized value {s:?}", self.field),
            CoercionKind::Malformed(s) => write!(f, "{}: malformed value {s}", self.field),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coerced {
    pub params: SimulationParams,
    pub coercions: Vec<Coercion>,
}

impl Coerced {
    pub fn is_clean(&self) -> bool {
        self.coercions.is_empty()
    }

    /// Reject if any field had to be defaulted.
    pub fn into_strict(self) -> Result<SimulationParams, IoError> {
        if self.coercions.is_empty() {
            return Ok(self.params);
        }
        let detail: Vec<String> = self.coercions.iter().map(ToString::to_string).collect();
        Err(IoError::Invalid(detail.join("; ")))
    }
}

// ----------------------------- Coercion -----------------------------

/// Total coercion of any JSON value into parameters. A non-object defaults
/// every field (each recorded as `Missing`).
pub fn coerce_params(v: &Value) -> Coerced {
    let empty = Map::new();
    let obj = match v {
        Value::Object(m) => m,
        other => {
            tracing::warn!(kind = json_kind(other), "request is not a JSON object; defaulting every field");
            &empty
        }
    };

    let mut coercions = Vec::new();
    let mut note = |field: &'static str, kind: CoercionKind| {
        tracing::warn!(field, ?kind, "parameter defaulted");
        coercions.push(Coercion { field, kind });
    };

    let election_model = token_field(obj, "electionModel", ElectionModel::from_token, &mut note);
    let states_count = count_field::<u32>(obj, "statesCount", DEFAULT_STATES_COUNT, &mut note);
    let cycle_length = count_field::<u8>(obj, "cycleLength", DEFAULT_CYCLE_LENGTH, &mut note);
    let cost_assumption = token_field(obj, "costAssumption", CostAssumption::from_token, &mut note);
    let manpower_level = token_field(obj, "manpowerLevel", ManpowerLevel::from_token, &mut note);
    let budget_level = token_field(obj, "budgetLevel", BudgetLevel::from_token, &mut note);

    Coerced {
        params: SimulationParams {
            election_model,
            states_count,
            cycle_length,
            cost_assumption,
            manpower_level,
            budget_level,
        },
        coercions,
    }
}

fn token_field<T: Default>(
    obj: &Map<String, Value>,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
    note: &mut impl FnMut(&'static str, CoercionKind),
) -> T {
    match obj.get(field) {
        None | Some(Value::Null) => {
            note(field, CoercionKind::Missing);
            T::default()
        }
        Some(Value::String(s)) => match parse(s) {
            Some(t) => t,
            None => {
                note(field, CoercionKind::Unrecognized(s.clone()));
                T::default()
            }
        },
        Some(other) => {
            note(field, CoercionKind::Malformed(other.to_string()));
            T::default()
        }
    }
}

fn count_field<T: TryFrom<i64> + Copy>(
    obj: &Map<String, Value>,
    field: &'static str,
    default: T,
    note: &mut impl FnMut(&'static str, CoercionKind),
) -> T {
    let raw = match obj.get(field) {
        None | Some(Value::Null) => {
            note(field, CoercionKind::Missing);
            return default;
        }
        Some(v) => v,
    };
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    let fitted = parsed
        .filter(|x| x.is_finite() && *x >= 0.0)
        .map(round_half_up)
        .filter(|x| *x <= i64::MAX as f64)
        .and_then(|x| T::try_from(x as i64).ok());
    match fitted {
        Some(t) => t,
        None => {
            note(field, CoercionKind::Malformed(raw.to_string()));
            default
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ----------------------------- Reading -----------------------------

/// Parse a request from any reader, bounded by `MAX_PARAMS_BYTES`.
pub fn read_params_value<R: Read>(reader: R) -> Result<Value, IoError> {
    let mut buf = Vec::new();
    reader.take(MAX_PARAMS_BYTES + 1).read_to_end(&mut buf)?;
    if buf.len() as u64 > MAX_PARAMS_BYTES {
        return Err(IoError::Invalid(format!("request exceeds {MAX_PARAMS_BYTES} bytes")));
    }
    Ok(serde_json::from_slice(&buf)?)
}

/// Read a local request file as raw JSON (coercion is the caller's next step).
pub fn load_params_file(path: &Path) -> Result<Value, IoError> {
    let f = File::open(path).map_err(|e| IoError::Path(format!("{} ({e})", path.display())))?;
    read_params_value(f).map_err(|e| match e {
        IoError::Json { pointer, msg } => IoError::Json { pointer, msg: format!("{}: {msg}", path.display()) },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_request() -> Value {
        json!({
            "electionModel": "full",
            "statesCount": 15,
            "cycleLength": 5,
            "costAssumption": "medium",
            "manpowerLevel": "standard",
            "budgetLevel": "normal"
        })
    }

    #[test]
    fn clean_request_has_no_coercions() {
        let c = coerce_params(&full_request());
        assert!(c.is_clean());
        assert_eq!(c.params, SimulationParams::canonical());
        assert_eq!(c.into_strict().unwrap(), SimulationParams::canonical());
    }

    #[test]
    fn unknown_token_falls_back_to_band_default() {
        let mut v = full_request();
        v["electionModel"] = json!("bogus");
        v["manpowerLevel"] = json!("Heavy");
        let c = coerce_params(&v);
        assert_eq!(c.params.election_model, ElectionModel::Current);
        assert_eq!(c.params.manpower_level, ManpowerLevel::Standard);
        assert_eq!(
            c.coercions,
            vec![
                Coercion { field: "electionModel", kind: CoercionKind::Unrecognized("bogus".into()) },
                Coercion { field: "manpowerLevel", kind: CoercionKind::Unrecognized("Heavy".into()) },
            ]
        );
    }

    #[test]
    fn numbers_accept_strings_and_round_half_up() {
        let mut v = full_request();
        v["statesCount"] = json!("20");
        v["cycleLength"] = json!(4.5);
        let c = coerce_params(&v);
        assert!(c.is_clean());
        assert_eq!(c.params.states_count, 20);
        assert_eq!(c.params.cycle_length, 5);
    }

    #[test]
    fn bad_numbers_default_to_canonical_counts() {
        let mut v = full_request();
        v["statesCount"] = json!(-3);
        v["cycleLength"] = json!(300);
        let c = coerce_params(&v);
        assert_eq!(c.params.states_count, DEFAULT_STATES_COUNT);
        assert_eq!(c.params.cycle_length, DEFAULT_CYCLE_LENGTH);
        assert!(matches!(c.coercions[0].kind, CoercionKind::Malformed(_)));
        assert!(matches!(c.coercions[1].kind, CoercionKind::Malformed(_)));
    }

    #[test]
    fn non_object_defaults_everything() {
        let c = coerce_params(&json!([1, 2, 3]));
        assert_eq!(c.coercions.len(), 6);
        assert!(c.coercions.iter().all(|x| x.kind == CoercionKind::Missing));
        assert_eq!(c.params.election_model, ElectionModel::Current);
        assert_eq!(c.params.states_count, 15);
        assert_eq!(c.params.cycle_length, 5);
        assert_eq!(c.params.budget_level, BudgetLevel::Normal);
    }

    #[test]
    fn strict_rejection_lists_fields() {
        let c = coerce_params(&json!({"electionModel": 3}));
        let err = c.into_strict().unwrap_err().to_string();
        assert!(err.contains("electionModel: malformed value 3"));
        assert!(err.contains("statesCount: missing"));
    }

    #[test]
    fn file_loader_reads_and_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let ok = dir.path().join("params.json");
        std::fs::write(&ok, full_request().to_string()).unwrap();
        assert_eq!(load_params_file(&ok).unwrap(), full_request());

        let big = dir.path().join("big.json");
        std::fs::write(&big, vec![b' '; (MAX_PARAMS_BYTES + 10) as usize]).unwrap();
        assert!(matches!(load_params_file(&big), Err(IoError::Invalid(_))));

        let missing = dir.path().join("nope.json");
        assert!(matches!(load_params_file(&missing), Err(IoError::Path(_))));
    }
}
