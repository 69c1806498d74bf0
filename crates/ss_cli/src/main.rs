// crates/ss_cli/src/main.rs
//
// Exit codes, typed error mapping, logging init, and the three entry paths:
// catalogue listing, a single run, and a run with comparison. Results go to
// stdout unless --out is given; logs always go to stderr.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
    pub const RENDER: i32 = 5;
}

use std::fs;
use std::io::{self, Write as _};
use std::path::Path;
use std::process::ExitCode;

use serde_json::{json, Map, Value};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use args::{parse_and_validate as parse_cli, Args};

use ss_core::catalogue;
use ss_core::SimulationParams;
use ss_io::{canonical_json, loader, IoError};
use ss_pipeline::{compare, fallback_results, run, Mode, Outcome, PipelineError, RunOutputs};
use ss_report::{build_model, ReportError, ReportModel};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Unreadable JSON, strict-mode rejections, bad flag combinations
    Validation(String),
    /// Read/write/path errors
    Io(String),
    /// Report build or output
    Render(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "validation: {m}"),
            MainError::Io(m) => write!(f, "io: {m}"),
            MainError::Render(m) => write!(f, "render: {m}"),
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("syncsim: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    init_logging(args.quiet);

    let outcome = if args.is_catalogue_mode() { run_catalogue(&args) } else { run_once(&args) };
    let rc = match outcome {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("syncsim: error: {e}");
            map_error(&e)
        }
    };

    ExitCode::from(rc as u8)
}

/// `RUST_LOG` wins; otherwise `warn`, or `error` with --quiet. Always stderr.
fn init_logging(quiet: bool) {
    let fallback = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Io(_) => IO,
        MainError::Render(_) => RENDER,
    }
}

fn map_ssio_err(e: IoError) -> MainError {
    use IoError::*;
    match e {
        Json { pointer, msg } => MainError::Validation(format!("json {pointer}: {msg}")),
        Invalid(m) => MainError::Validation(m),
        Path(m) => MainError::Io(format!("path: {m}")),
        Hash(m) => MainError::Io(format!("hash: {m}")),
    }
}

fn map_pipeline_err(e: PipelineError) -> MainError {
    match e {
        PipelineError::Validate(m) => MainError::Validation(m),
        PipelineError::Io(m) | PipelineError::Build(m) => MainError::Io(m),
    }
}

fn map_report_err(e: ReportError) -> MainError {
    match e {
        ReportError::Inconsistent(m) => MainError::Render(format!("inconsistent: {m}")),
    }
}

// ---- catalogue ----

fn run_catalogue(args: &Args) -> Result<(), MainError> {
    let doc = if args.list_scenarios {
        let rows: Vec<Value> = catalogue::scenarios()
            .iter()
            .map(|s| json!({ "id": s.id, "name": s.name, "description": s.description }))
            .collect();
        Value::Array(rows)
    } else if let Some(id) = &args.scenario {
        if catalogue::scenario_by_id(id).is_none() {
            tracing::warn!(id = %id, "unknown scenario id; showing the default preset");
        }
        to_value(catalogue::scenario_or_default(id))?
    } else {
        json!({
            "simulations": to_value(catalogue::demo_simulations())?,
            "baseline": to_value(fallback_results())?,
        })
    };
    print_json(&doc)
}

// ---- run ----

fn run_once(args: &Args) -> Result<(), MainError> {
    let mode = if args.strict { Mode::Strict } else { Mode::Lenient };

    let request = build_request(args)?;
    let outs = run(&request, mode).map_err(map_pipeline_err)?;
    if outs.outcome == Outcome::Fallback {
        tracing::warn!(id = %outs.result_id, "result replaced by the canonical fallback");
    }

    let mut doc = outs.result_doc();
    if let Some(other_path) = &args.compare_with {
        let other_req = loader::load_params_file(other_path).map_err(map_ssio_err)?;
        let other = run(&other_req, mode).map_err(map_pipeline_err)?;
        if let Value::Object(m) = &mut doc {
            m.insert("comparison".into(), comparison_doc(&outs, &other)?);
        }
    }

    match &args.out {
        None => print_json(&doc),
        Some(out_dir) => {
            write_artifacts(out_dir, &doc, &outs)?;
            maybe_render_reports(args, &outs, out_dir)
        }
    }
}

/// Request JSON from --params (file or stdin) with per-field overrides applied.
fn build_request(args: &Args) -> Result<Value, MainError> {
    let base = match &args.params {
        Some(p) if p.as_os_str() == "-" => loader::read_params_value(io::stdin().lock()).map_err(map_ssio_err)?,
        Some(p) => loader::load_params_file(p).map_err(map_ssio_err)?,
        None => Value::Object(Map::new()),
    };

    let overrides = args.overrides();
    if overrides.is_empty() {
        return Ok(base);
    }
    let mut obj = match base {
        Value::Object(m) => m,
        _ => {
            tracing::warn!("request is not a JSON object; starting from an empty request");
            Map::new()
        }
    };
    for (field, raw) in overrides {
        obj.insert(field.to_string(), Value::String(raw.to_string()));
    }
    Ok(Value::Object(obj))
}

fn comparison_doc(a: &RunOutputs, b: &RunOutputs) -> Result<Value, MainError> {
    Ok(json!({
        "with": { "id": b.result_id.as_str(), "params": to_value(b.params)? },
        "rows": to_value(compare(&a.results, &b.results))?,
    }))
}

/// `result.json` plus `record.json`, the saved-simulation row for this run.
fn write_artifacts(out_dir: &Path, doc: &Value, outs: &RunOutputs) -> Result<(), MainError> {
    fs::create_dir_all(out_dir).map_err(|e| MainError::Io(format!("mkdir {}: {e}", out_dir.display())))?;

    let res_path = out_dir.join("result.json");
    canonical_json::write_canonical_file(&res_path, doc)
        .map_err(|e| MainError::Io(format!("write result.json: {e}")))?;

    let rec_path = out_dir.join("record.json");
    canonical_json::write_canonical_file(&rec_path, &to_value(outs.record())?)
        .map_err(|e| MainError::Io(format!("write record.json: {e}")))?;

    tracing::info!(dir = %out_dir.display(), "artifacts written");
    Ok(())
}

// ---- reports ----

fn maybe_render_reports(args: &Args, outs: &RunOutputs, out_dir: &Path) -> Result<(), MainError> {
    if args.render.is_empty() {
        return Ok(());
    }

    // Fallback results describe the canonical params, not the request.
    let params = match outs.outcome {
        Outcome::Computed => outs.params,
        Outcome::Fallback => SimulationParams::canonical(),
    };
    let model = build_model(&params, &outs.results, &outs.result_id).map_err(map_report_err)?;

    for fmt in &args.render {
        match fmt.as_str() {
            "json" => render_json_report(&model, out_dir)?,
            "html" => render_html_report(&model, out_dir)?,
            other => return Err(MainError::Render(format!("unknown renderer: {other}"))),
        }
    }
    Ok(())
}

fn render_json_report(model: &ReportModel, out_dir: &Path) -> Result<(), MainError> {
    #[cfg(feature = "report-json")]
    {
        let bytes = serde_json::to_vec_pretty(&ss_report::render_json(model))
            .map_err(|e| MainError::Render(format!("report.json: {e}")))?;
        write_report(out_dir, "report.json", &bytes)
    }
    #[cfg(not(feature = "report-json"))]
    {
        let _ = (model, out_dir);
        Err(MainError::Render("json renderer not enabled (build with feature `report-json`)".into()))
    }
}

fn render_html_report(model: &ReportModel, out_dir: &Path) -> Result<(), MainError> {
    #[cfg(feature = "report-html")]
    {
        write_report(out_dir, "report.html", ss_report::render_html(model).as_bytes())
    }
    #[cfg(not(feature = "report-html"))]
    {
        let _ = (model, out_dir);
        Err(MainError::Render("html renderer not enabled (build with feature `report-html`)".into()))
    }
}

#[allow(dead_code)]
fn write_report(out_dir: &Path, name: &str, bytes: &[u8]) -> Result<(), MainError> {
    let path = out_dir.join(name);
    fs::write(&path, bytes).map_err(|e| MainError::Io(format!("write {name}: {e}")))?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

// ---- helpers ----

fn to_value<T: serde::Serialize>(v: T) -> Result<Value, MainError> {
    serde_json::to_value(v).map_err(|e| MainError::Io(format!("serialize: {e}")))
}

fn print_json(v: &Value) -> Result<(), MainError> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, v).map_err(|e| MainError::Io(format!("stdout: {e}")))?;
    writeln!(out).map_err(|e| MainError::Io(format!("stdout: {e}")))
}
