//! Scalar metrics: cost, savings, efficiency, manpower saved.
//!
//! Contract:
//! - `current_cost = round(base_cost * state_factor * manpower_factor)`, with
//!   `base_cost` the cost-band midpoint and `state_factor = states / 28`.
//! - `savings_value = round(current_cost * savings_factor)`.
//! - `efficiency_value = round(efficiency_factor * cycle_length / 5)`.
//! - `manpower_saved_value = max(0, round((1 - 1/manpower_factor) * 100 + efficiency_factor / 2))`.
//! - Rounding is half-up everywhere (`ss_core::rounding`).

use core::fmt;

use ss_core::bands::{ModelFactor, REFERENCE_CYCLE_YEARS, REFERENCE_STATES};
use ss_core::rounding::round_to_i64;
use ss_core::SimulationParams;

/// Intermediate and final scalars of one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostMetrics {
    pub base_cost: f64,
    pub state_factor: f64,
    pub manpower_factor: f64,
    pub model: ModelFactor,
    pub current_cost: i64,
    pub savings_value: i64,
    pub efficiency_value: i64,
    pub manpower_saved_value: i64,
}

impl CostMetrics {
    /// All float intermediates are finite and the staffing divisor is nonzero.
    pub fn is_well_formed(&self) -> bool {
        [self.base_cost, self.state_factor, self.manpower_factor, self.model.savings, self.model.efficiency]
            .iter()
            .all(|x| x.is_finite())
            && self.manpower_factor != 0.0
    }
}

pub fn cost_metrics(p: &SimulationParams) -> CostMetrics {
    let base_cost = p.cost_assumption.band().midpoint();
    let state_factor = f64::from(p.states_count) / REFERENCE_STATES;
    let model = *p.election_model.factor();
    let manpower_factor = p.manpower_level.band().factor;

    let current_cost = round_to_i64(base_cost * state_factor * manpower_factor);
    let savings_value = round_to_i64(current_cost as f64 * model.savings);
    let efficiency_value =
        round_to_i64(model.efficiency * (f64::from(p.cycle_length) / REFERENCE_CYCLE_YEARS));
    let manpower_saved_value = manpower_saved(manpower_factor, model.efficiency);

    CostMetrics {
        base_cost,
        state_factor,
        manpower_factor,
        model,
        current_cost,
        savings_value,
        efficiency_value,
        manpower_saved_value,
    }
}

/// Staffing reduction (%) implied by a manpower factor plus half the model's
/// efficiency gain. Never negative.
pub fn manpower_saved(manpower_factor: f64, efficiency_factor: f64) -> i64 {
    round_to_i64((1.0 - 1.0 / manpower_factor) * 100.0 + efficiency_factor * 0.5).max(0)
}

/// Administrative efficiency gain (%), 90% of the headline efficiency.
pub fn admin_efficiency(efficiency_value: i64) -> i64 {
    round_to_i64(efficiency_value as f64 * 0.9)
}

/// Policy continuity classification of an efficiency gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolicyContinuity {
    Low,
    Moderate,
    High,
}

impl PolicyContinuity {
    /// High above 30, Moderate above 15, Low otherwise.
    pub fn from_efficiency(efficiency_value: i64) -> Self {
        if efficiency_value > 30 {
            PolicyContinuity::High
        } else if efficiency_value > 15 {
            PolicyContinuity::Moderate
        } else {
            PolicyContinuity::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyContinuity::Low => "Low",
            PolicyContinuity::Moderate => "Moderate",
            PolicyContinuity::High => "High",
        }
    }
}

impl fmt::Display for PolicyContinuity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ss_core::{CostAssumption, ElectionModel, ManpowerLevel};

    #[test]
    fn canonical_request_matches_worked_example() {
        let m = cost_metrics(&SimulationParams::canonical());
        assert_eq!(m.base_cost, 11_500.0);
        assert!((m.state_factor - 0.5357).abs() < 1e-4);
        assert_eq!(m.manpower_factor, 1.0);
        assert_eq!(m.current_cost, 6_161);
        assert_eq!(m.savings_value, 2_772);
        assert_eq!(m.efficiency_value, 45);
        assert_eq!(m.manpower_saved_value, 23);
        assert!(m.is_well_formed());
    }

    #[test]
    fn current_model_saves_nothing() {
        let p = SimulationParams { election_model: ElectionModel::Current, ..SimulationParams::canonical() };
        let m = cost_metrics(&p);
        assert_eq!(m.savings_value, 0);
        assert_eq!(m.efficiency_value, 0);
        assert_eq!(m.manpower_saved_value, 0);
    }

    #[test]
    fn efficiency_scales_with_cycle_length() {
        let p = SimulationParams { cycle_length: 7, ..SimulationParams::canonical() };
        assert_eq!(cost_metrics(&p).efficiency_value, 63);
        let p = SimulationParams { cycle_length: 3, ..SimulationParams::canonical() };
        assert_eq!(cost_metrics(&p).efficiency_value, 27);
    }

    #[test]
    fn heavy_manpower_raises_cost_and_saving_share() {
        let p = SimulationParams {
            states_count: 28,
            cost_assumption: CostAssumption::High,
            manpower_level: ManpowerLevel::Heavy,
            ..SimulationParams::canonical()
        };
        let m = cost_metrics(&p);
        assert_eq!(m.current_cost, 20_250);
        assert_eq!(m.savings_value, 9_113);
        assert_eq!(m.manpower_saved_value, 48);
    }

    #[test]
    fn minimal_manpower_floor_is_zero() {
        assert_eq!(manpower_saved(0.7, 0.0), 0);
        assert_eq!(manpower_saved(0.7, 45.0), 0);
        assert_eq!(manpower_saved(1.0, 25.0), 13);
    }

    #[test]
    fn zero_states_yields_zero_cost() {
        let p = SimulationParams { states_count: 0, ..SimulationParams::canonical() };
        let m = cost_metrics(&p);
        assert_eq!(m.current_cost, 0);
        assert_eq!(m.savings_value, 0);
    }

    #[test]
    fn continuity_thresholds_are_strict() {
        assert_eq!(PolicyContinuity::from_efficiency(31), PolicyContinuity::High);
        assert_eq!(PolicyContinuity::from_efficiency(30), PolicyContinuity::Moderate);
        assert_eq!(PolicyContinuity::from_efficiency(16), PolicyContinuity::Moderate);
        assert_eq!(PolicyContinuity::from_efficiency(15), PolicyContinuity::Low);
        assert_eq!(PolicyContinuity::from_efficiency(0).to_string(), "Low");
    }

    #[test]
    fn admin_efficiency_is_ninety_percent() {
        assert_eq!(admin_efficiency(45), 41);
        assert_eq!(admin_efficiency(25), 23);
        assert_eq!(admin_efficiency(0), 0);
    }
}
