//! ss_report: pure offline report model + renderers (JSON/HTML).
//!
//! Determinism rules:
//! - No I/O here. Callers supply params, results and the result id in memory.
//! - Nothing is recomputed: every figure is read from `CalculatedResults`.
//! - No timestamps; stable section order and field names.

#![deny(unsafe_code)]

use thiserror::Error;

use ss_core::format::format_inr;
use ss_core::ids::ResultId;
use ss_core::SimulationParams;
use ss_pipeline::{CalculatedResults, SimulationRecord, ENGINE};

#[cfg(feature = "render_html")]
pub mod render_html;
#[cfg(feature = "render_json")]
pub mod render_json;

#[cfg(feature = "render_html")]
pub use render_html::render_html;
#[cfg(feature = "render_json")]
pub use render_json::render_json;

// ===== Errors =====

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Results do not describe the params they are reported against.
    #[error("inconsistent report input: {0}")]
    Inconsistent(&'static str),
}

// ===== Model =====

#[derive(Clone, Debug, PartialEq)]
pub struct ReportModel {
    pub cover: SectionCover,
    pub summary: String,
    pub metrics: Vec<KeyValue>,
    pub assumptions: Vec<KeyValue>,
    pub charts: Vec<ChartTable>,
    pub insights: SectionInsights,
    pub disclaimer: String,
    pub integrity: SectionIntegrity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionCover {
    pub brand: String,
    pub title: String,
    pub scenario_name: String,
    /// "N States | C-Year Cycle"
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// A chart rendered as a table: one header row, string cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionInsights {
    pub benefits: Vec<KeyValue>,
    pub considerations: Vec<KeyValue>,
    pub feasibility: Vec<KeyValue>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionIntegrity {
    pub result_id: String,
    pub engine_name: String,
    pub engine_version: String,
}

// ---- fixed narrative ----

const BRAND: &str = "VoteVichar";
const TITLE: &str = "Election Synchronization Analysis Report";

const BENEFITS: [(&str, &str); 3] = [
    ("Financial", "Reduced election expenditure through consolidated operations"),
    ("Administrative", "Lower personnel deployment and logistics overhead"),
    ("Governance", "Improved policy continuity with longer stable terms"),
];

const CONSIDERATIONS: [(&str, &str); 3] = [
    ("Legal", "Constitutional amendments required for implementation"),
    ("Federal", "Impact on state autonomy and regional representation"),
    ("Logistic", "Large-scale EVM and security coordination challenges"),
];

const FEASIBILITY: [(&str, &str); 3] = [
    ("Timeline", "Estimated 3-5 years for full implementation with phased rollout"),
    ("Prerequisites", "Political consensus, constitutional amendments, ECI capacity expansion"),
    ("Risk Level", "Moderate - requires careful stakeholder engagement"),
];

const DISCLAIMER: &str = "This simulation uses hypothetical data for demonstration purposes. \
Actual implementation would require detailed feasibility studies, stakeholder consultations, \
and legislative analysis. VoteVichar provides neutral, evidence-based insights without \
advocating for any specific policy position.";

// ===== API =====

/// Build the report model (pure, offline). `results` must have been computed
/// from `params`; a governance series whose length differs from the cycle
/// length is rejected.
pub fn build_model(
    params: &SimulationParams,
    results: &CalculatedResults,
    result_id: &ResultId,
) -> Result<ReportModel, ReportError> {
    if results.governance_data.len() != usize::from(params.cycle_length) {
        return Err(ReportError::Inconsistent("governance series length != cycle length"));
    }

    let record = SimulationRecord::from_run(params, results);
    let cover = SectionCover {
        brand: BRAND.to_string(),
        title: TITLE.to_string(),
        scenario_name: record.name,
        subtitle: format!("{} States | {}-Year Cycle", params.states_count, params.cycle_length),
    };

    let summary = format!(
        "Projected Savings: {} | Efficiency Gain: {} | Policy Continuity: {}",
        results.cost_savings, results.efficiency, results.policy_continuity
    );

    let metrics = vec![
        kv("Cost Savings", &results.cost_savings),
        kv("Efficiency Gain", &results.efficiency),
        kv("Manpower Saved", &results.manpower_saved),
        kv("Admin Efficiency", &results.admin_efficiency),
        kv("Policy Continuity", results.policy_continuity.as_str()),
    ];

    let assumptions = vec![
        kv("Election Model", params.election_model.display_name()),
        kv("Cost Band", &results.cost_band),
        kv("Manpower", &results.manpower_estimate),
        kv("Budget", &results.budget_range),
    ];

    let insights = SectionInsights {
        benefits: BENEFITS.iter().map(|(k, v)| kv(k, v)).collect(),
        considerations: CONSIDERATIONS.iter().map(|(k, v)| kv(k, v)).collect(),
        feasibility: FEASIBILITY.iter().map(|(k, v)| kv(k, v)).collect(),
    };

    Ok(ReportModel {
        cover,
        summary,
        metrics,
        assumptions,
        charts: chart_tables(results),
        insights,
        disclaimer: DISCLAIMER.to_string(),
        integrity: SectionIntegrity {
            result_id: result_id.as_str().to_string(),
            engine_name: ENGINE.name.to_string(),
            engine_version: ENGINE.version.to_string(),
        },
    })
}

// ===== Helpers =====

fn kv(key: &str, value: &str) -> KeyValue {
    KeyValue { key: key.to_string(), value: value.to_string() }
}

fn table(title: &str, headers: &[&str], rows: Vec<Vec<String>>) -> ChartTable {
    ChartTable {
        title: title.to_string(),
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows,
    }
}

/// One decimal at most; "81.0" prints as "81".
fn fmt_num(x: f64) -> String {
    let s = format!("{x:.1}");
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

fn chart_tables(r: &CalculatedResults) -> Vec<ChartTable> {
    vec![
        table(
            "Financial Breakdown (₹ Cr)",
            &["Scenario", "Cost", "Savings"],
            r.financial_data
                .iter()
                .map(|p| vec![p.name.to_string(), format_inr(p.cost), format_inr(p.savings)])
                .collect(),
        ),
        table(
            "Workload Reduction (%)",
            &["Category", "Current", "Synced"],
            r.workload_data
                .iter()
                .map(|p| vec![p.name.to_string(), fmt_num(p.current), p.synced.to_string()])
                .collect(),
        ),
        table(
            "Governance Trend",
            &["Year", "Stability", "Efficiency", "Continuity"],
            r.governance_data
                .iter()
                .map(|p| {
                    vec![p.year.to_string(), fmt_num(p.stability), fmt_num(p.efficiency), fmt_num(p.continuity)]
                })
                .collect(),
        ),
        table(
            "Logistics",
            &["Subject", "Current", "Optimized"],
            r.logistics_data
                .iter()
                .map(|p| vec![p.subject.to_string(), p.current.to_string(), p.optimized.to_string()])
                .collect(),
        ),
        table(
            "Benefit Distribution (%)",
            &["Area", "Share"],
            r.pie_data.iter().map(|s| vec![s.name.to_string(), s.value.to_string()]).collect(),
        ),
    ]
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn canonical_model() -> ReportModel {
        let out = ss_pipeline::run_params(&SimulationParams::canonical()).unwrap();
        build_model(&out.params, &out.results, &out.result_id).unwrap()
    }
}
