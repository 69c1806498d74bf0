// crates/ss_algo/src/lib.rs
#![forbid(unsafe_code)]

//! Pure derivations from resolved parameters to metrics and chart series.
//! Nothing here allocates beyond the returned series or touches I/O.

pub mod metrics;
pub mod series;

// Tight, explicit re-exports (avoid wildcard export drift).
pub use metrics::{admin_efficiency, cost_metrics, manpower_saved, CostMetrics, PolicyContinuity};
pub use series::{
    distribution_series, financial_series, governance_series, logistics_series, workload_series,
};
