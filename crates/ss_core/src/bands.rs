//! Static band tables (₹ crore) and election-model factors.
//!
//! Lookups are exhaustive `match`es over the categorical enums, so an
//! unresolved band can never reach the arithmetic.

use crate::variables::{BudgetLevel, CostAssumption, ElectionModel, ManpowerLevel};

/// State count that maps to a state factor of 1.0 (linear scaling policy).
pub const REFERENCE_STATES: f64 = 28.0;
/// Cycle length (years) that maps to an efficiency multiplier of 1.0.
pub const REFERENCE_CYCLE_YEARS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CostBand {
    pub min: u32,
    pub max: u32,
    pub label: &'static str,
}

impl CostBand {
    pub fn midpoint(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ManpowerBand {
    /// Staffing multiplier applied to the cost estimate.
    pub factor: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BudgetBand {
    pub min: u32,
    pub max: u32,
    pub label: &'static str,
}

/// `(savings, efficiency)` pair for an election model.
/// `savings` is a fraction in `[0, 0.45]`, `efficiency` a percentage in `[0, 45]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelFactor {
    pub savings: f64,
    pub efficiency: f64,
}

// ---- Cost bands ----
pub const COST_LOW: CostBand = CostBand { min: 8_000, max: 10_000, label: "Low Cost (₹8,000-10,000 Cr)" };
pub const COST_MEDIUM: CostBand = CostBand { min: 10_000, max: 13_000, label: "Medium Cost (₹10,000-13,000 Cr)" };
pub const COST_HIGH: CostBand = CostBand { min: 13_000, max: 17_000, label: "High Cost (₹13,000-17,000 Cr)" };

// ---- Manpower bands ----
pub const MANPOWER_MINIMAL: ManpowerBand = ManpowerBand { factor: 0.7, label: "Minimal (20-30% fewer staff)" };
pub const MANPOWER_STANDARD: ManpowerBand = ManpowerBand { factor: 1.0, label: "Standard (Normal levels)" };
pub const MANPOWER_HEAVY: ManpowerBand = ManpowerBand { factor: 1.35, label: "Heavy (25-40% more staff)" };

// ---- Budget bands ----
pub const BUDGET_TIGHT: BudgetBand = BudgetBand { min: 6_000, max: 8_000, label: "Tight Budget (₹6,000-8,000 Cr)" };
pub const BUDGET_NORMAL: BudgetBand = BudgetBand { min: 9_000, max: 12_000, label: "Normal Budget (₹9,000-12,000 Cr)" };
pub const BUDGET_COMFORTABLE: BudgetBand =
    BudgetBand { min: 12_000, max: 15_000, label: "Comfortable Budget (₹12,000-15,000 Cr)" };
pub const BUDGET_HIGH: BudgetBand = BudgetBand { min: 16_000, max: 20_000, label: "High Budget (₹16,000-20,000 Cr)" };

// ---- Model factors ----
pub const MODEL_CURRENT: ModelFactor = ModelFactor { savings: 0.0, efficiency: 0.0 };
pub const MODEL_PARTIAL: ModelFactor = ModelFactor { savings: 0.25, efficiency: 25.0 };
pub const MODEL_FULL: ModelFactor = ModelFactor { savings: 0.45, efficiency: 45.0 };

impl CostAssumption {
    pub fn band(self) -> &'static CostBand {
        match self {
            CostAssumption::Low => &COST_LOW,
            CostAssumption::Medium => &COST_MEDIUM,
            CostAssumption::High => &COST_HIGH,
        }
    }
}

impl ManpowerLevel {
    pub fn band(self) -> &'static ManpowerBand {
        match self {
            ManpowerLevel::Minimal => &MANPOWER_MINIMAL,
            ManpowerLevel::Standard => &MANPOWER_STANDARD,
            ManpowerLevel::Heavy => &MANPOWER_HEAVY,
        }
    }
}

impl BudgetLevel {
    pub fn band(self) -> &'static BudgetBand {
        match self {
            BudgetLevel::Tight => &BUDGET_TIGHT,
            BudgetLevel::Normal => &BUDGET_NORMAL,
            BudgetLevel::Comfortable => &BUDGET_COMFORTABLE,
            BudgetLevel::High => &BUDGET_HIGH,
        }
    }
}

impl ElectionModel {
    pub fn factor(self) -> &'static ModelFactor {
        match self {
            ElectionModel::Current => &MODEL_CURRENT,
            ElectionModel::Partial => &MODEL_PARTIAL,
            ElectionModel::Full => &MODEL_FULL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_midpoint_is_11500() {
        assert_eq!(CostAssumption::Medium.band().midpoint(), 11_500.0);
        assert_eq!(CostAssumption::Low.band().midpoint(), 9_000.0);
        assert_eq!(CostAssumption::High.band().midpoint(), 15_000.0);
    }

    #[test]
    fn unknown_tokens_land_on_default_bands() {
        assert_eq!(CostAssumption::resolve("nope").band(), &COST_MEDIUM);
        assert_eq!(ManpowerLevel::resolve("nope").band().factor, 1.0);
        assert_eq!(BudgetLevel::resolve("nope").band(), &BUDGET_NORMAL);
        assert_eq!(ElectionModel::resolve("nope").factor(), &MODEL_CURRENT);
    }

    #[test]
    fn model_factors_stay_in_documented_ranges() {
        for m in ElectionModel::ALL {
            let f = m.factor();
            assert!((0.0..=0.45).contains(&f.savings));
            assert!((0.0..=45.0).contains(&f.efficiency));
        }
    }

    #[test]
    fn manpower_factors_are_nonzero() {
        for l in ManpowerLevel::ALL {
            assert!(l.band().factor > 0.0);
        }
    }
}
