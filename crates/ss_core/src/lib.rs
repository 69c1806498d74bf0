//! ss_core: Core types, band tables, formatting, and the scenario catalogue.
//!
//! This crate is **I/O-free**. It defines stable types/APIs used across the
//! simulator (`ss_algo`, `ss_io`, `ss_pipeline`, `ss_report`, `ss_cli`).
//!
//! - Categorical parameters: `ElectionModel`, `CostAssumption`, `ManpowerLevel`, `BudgetLevel`
//! - Static band tables and model factors (total lookups, no miss state)
//! - Half-up rounding and percentage clamping
//! - Indian digit-grouped currency strings
//! - Output IDs: `RES:`
//! - Chart point types, the five preset scenarios, and guest demo records
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod bands;
pub mod catalogue;
pub mod charts;
pub mod format;
pub mod ids;
pub mod variables;

pub use bands::{BudgetBand, CostBand, ManpowerBand, ModelFactor, REFERENCE_CYCLE_YEARS, REFERENCE_STATES};
pub use charts::{DistributionSlice, FinancialPoint, GovernancePoint, LogisticsPoint, WorkloadPoint};
pub use variables::{BudgetLevel, CostAssumption, ElectionModel, ManpowerLevel, SimulationParams};

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain parsing.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        InvalidId,
        InvalidHex,
        UnknownToken(&'static str),
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidId => write!(f, "invalid id"),
                CoreError::InvalidHex => write!(f, "invalid hex"),
                CoreError::UnknownToken(k) => write!(f, "unknown token for {k}"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub mod rounding {
    //! Float helpers shared by every metric.

    /// Round halves toward +∞ (2.5 → 3, -2.5 → -2).
    #[inline]
    pub fn round_half_up(x: f64) -> f64 {
        (x + 0.5).floor()
    }

    /// `round_half_up` then narrow to `i64` (saturating on overflow, 0 for NaN).
    #[inline]
    pub fn round_to_i64(x: f64) -> i64 {
        round_half_up(x) as i64
    }

    /// Clamp a percentage-bearing value to `[0, 100]`. NaN maps to 0.
    #[inline]
    pub fn clamp_pct(x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        x.clamp(0.0, 100.0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn halves_round_up() {
            assert_eq!(round_half_up(2.5), 3.0);
            assert_eq!(round_half_up(4.5), 5.0);
            assert_eq!(round_half_up(-2.5), -2.0);
            assert_eq!(round_half_up(2772.45), 2772.0);
        }

        #[test]
        fn clamp_pct_bounds() {
            assert_eq!(clamp_pct(104.2), 100.0);
            assert_eq!(clamp_pct(-3.0), 0.0);
            assert_eq!(clamp_pct(f64::NAN), 0.0);
            assert_eq!(clamp_pct(68.5), 68.5);
        }

        #[test]
        fn round_to_i64_saturates() {
            assert_eq!(round_to_i64(6160.714), 6161);
            assert_eq!(round_to_i64(f64::NAN), 0);
        }
    }
}
