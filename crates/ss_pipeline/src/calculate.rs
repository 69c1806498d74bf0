//! Parameter → results transform and its fallback wrapper.
//!
//! `calculate` is total: every categorical field already resolved to a band
//! when `SimulationParams` was built, so there is no lookup miss to handle.
//! `try_calculate` additionally checks the float intermediates and is what
//! `calculate_or_fallback` uses to decide whether to substitute the canonical
//! baseline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use ss_algo::{
    admin_efficiency, cost_metrics, distribution_series, financial_series, governance_series,
    logistics_series, workload_series, CostMetrics, PolicyContinuity,
};
use ss_core::format::{format_crore, format_gain_pct, format_pct};
use ss_core::{
    DistributionSlice, FinancialPoint, GovernancePoint, LogisticsPoint, SimulationParams, WorkloadPoint,
};

/// Output of one calculation. Field names follow the camelCase wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedResults {
    pub cost_savings: String,
    pub cost_savings_value: i64,
    pub efficiency: String,
    pub efficiency_value: i64,
    pub manpower_saved: String,
    pub manpower_saved_value: i64,
    pub admin_efficiency: String,
    pub policy_continuity: PolicyContinuity,
    pub financial_data: Vec<FinancialPoint>,
    pub workload_data: Vec<WorkloadPoint>,
    pub governance_data: Vec<GovernancePoint>,
    pub logistics_data: Vec<LogisticsPoint>,
    pub pie_data: Vec<DistributionSlice>,
    pub budget_range: String,
    pub manpower_estimate: String,
    pub cost_band: String,
}

/// Internal failures `try_calculate` refuses to format into results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("non-finite intermediate value: {0}")]
    NonFinite(&'static str),
    #[error("manpower factor is zero")]
    ZeroManpowerFactor,
}

/// Whether `calculate_or_fallback` returned the requested computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Computed,
    Fallback,
}

pub fn calculate(p: &SimulationParams) -> CalculatedResults {
    assemble(p, &cost_metrics(p))
}

pub fn try_calculate(p: &SimulationParams) -> Result<CalculatedResults, EngineError> {
    let m = cost_metrics(p);
    check_metrics(&m)?;
    Ok(assemble(p, &m))
}

/// Results for the canonical parameter set (full / 15 / 5 / medium / standard / normal).
pub fn fallback_results() -> CalculatedResults {
    calculate(&SimulationParams::canonical())
}

/// Never fails: an internal error is logged and replaced by `fallback_results()`.
pub fn calculate_or_fallback(p: &SimulationParams) -> (CalculatedResults, Outcome) {
    match try_calculate(p) {
        Ok(r) => (r, Outcome::Computed),
        Err(e) => {
            tracing::warn!(error = %e, "calculation failed; substituting fallback baseline");
            (fallback_results(), Outcome::Fallback)
        }
    }
}

fn check_metrics(m: &CostMetrics) -> Result<(), EngineError> {
    let named = [
        ("base_cost", m.base_cost),
        ("state_factor", m.state_factor),
        ("manpower_factor", m.manpower_factor),
        ("savings_factor", m.model.savings),
        ("efficiency_factor", m.model.efficiency),
    ];
    if let Some((name, _)) = named.into_iter().find(|(_, x)| !x.is_finite()) {
        return Err(EngineError::NonFinite(name));
    }
    if m.manpower_factor == 0.0 {
        return Err(EngineError::ZeroManpowerFactor);
    }
    debug_assert!(m.is_well_formed());
    Ok(())
}

fn assemble(p: &SimulationParams, m: &CostMetrics) -> CalculatedResults {
    let cost_band = p.cost_assumption.band();
    let manpower_band = p.manpower_level.band();
    let budget_band = p.budget_level.band();
    tracing::debug!(
        cost = cost_band.label,
        manpower = manpower_band.label,
        budget = budget_band.label,
        model = p.election_model.as_token(),
        "bands resolved"
    );

    CalculatedResults {
        cost_savings: format_crore(m.savings_value),
        cost_savings_value: m.savings_value,
        efficiency: format_gain_pct(m.efficiency_value),
        efficiency_value: m.efficiency_value,
        manpower_saved: format_pct(m.manpower_saved_value),
        manpower_saved_value: m.manpower_saved_value,
        admin_efficiency: format_gain_pct(admin_efficiency(m.efficiency_value)),
        policy_continuity: PolicyContinuity::from_efficiency(m.efficiency_value),
        financial_data: financial_series(m.current_cost),
        workload_data: workload_series(p.states_count, m.model.savings),
        governance_data: governance_series(p.cycle_length, m.model.efficiency),
        logistics_data: logistics_series(m.model.savings),
        pie_data: distribution_series(m.model.savings),
        budget_range: budget_band.label.to_string(),
        manpower_estimate: manpower_band.label.to_string(),
        cost_band: cost_band.label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ss_core::{BudgetLevel, ElectionModel};

    #[test]
    fn canonical_worked_example() {
        let r = calculate(&SimulationParams::canonical());
        assert_eq!(r.cost_savings, "₹2,772 Cr");
        assert_eq!(r.cost_savings_value, 2_772);
        assert_eq!(r.efficiency, "+45%");
        assert_eq!(r.manpower_saved, "23%");
        assert_eq!(r.admin_efficiency, "+41%");
        assert_eq!(r.policy_continuity, PolicyContinuity::High);
        assert_eq!(r.cost_band, "Medium Cost (₹10,000-13,000 Cr)");
        assert_eq!(r.manpower_estimate, "Standard (Normal levels)");
        assert_eq!(r.budget_range, "Normal Budget (₹9,000-12,000 Cr)");
        assert_eq!(r.financial_data[0].cost, 6_161);
        assert_eq!(r.governance_data.len(), 5);
    }

    #[test]
    fn budget_level_only_changes_label() {
        let base = calculate(&SimulationParams::canonical());
        let tight = calculate(&SimulationParams { budget_level: BudgetLevel::Tight, ..SimulationParams::canonical() });
        assert_eq!(tight.budget_range, "Tight Budget (₹6,000-8,000 Cr)");
        assert_eq!(CalculatedResults { budget_range: base.budget_range.clone(), ..tight }, base);
    }

    #[test]
    fn current_model_is_low_continuity() {
        let r = calculate(&SimulationParams { election_model: ElectionModel::Current, ..SimulationParams::canonical() });
        assert_eq!(r.cost_savings, "₹0 Cr");
        assert_eq!(r.efficiency, "+0%");
        assert_eq!(r.manpower_saved, "0%");
        assert_eq!(r.policy_continuity, PolicyContinuity::Low);
        assert_eq!(r.pie_data.iter().map(|s| s.value).collect::<Vec<_>>(), [30, 40, 30]);
    }

    #[test]
    fn try_calculate_agrees_with_calculate() {
        let p = SimulationParams::canonical();
        assert_eq!(try_calculate(&p), Ok(calculate(&p)));
        assert_eq!(calculate_or_fallback(&p), (calculate(&p), Outcome::Computed));
    }

    #[test]
    fn malformed_metrics_are_rejected() {
        let mut m = cost_metrics(&SimulationParams::canonical());
        m.state_factor = f64::NAN;
        assert_eq!(check_metrics(&m), Err(EngineError::NonFinite("state_factor")));
        let mut m = cost_metrics(&SimulationParams::canonical());
        m.manpower_factor = 0.0;
        assert_eq!(check_metrics(&m), Err(EngineError::ZeroManpowerFactor));
    }

    #[test]
    fn results_serialize_with_wire_names() {
        let v = serde_json::to_value(fallback_results()).unwrap();
        assert_eq!(v["costSavingsValue"], 2_772);
        assert_eq!(v["policyContinuity"], "High");
        assert_eq!(v["pieData"][0]["name"], "Financial");
        assert_eq!(v["governanceData"][0]["year"], "Y1");
        assert_eq!(v["logisticsData"][0]["subject"], "EVM/VVPAT Transport");
        let back: CalculatedResults = serde_json::from_value(v).unwrap();
        assert_eq!(back, fallback_results());
    }
}
