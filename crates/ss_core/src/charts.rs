//! Chart-ready series points.
//!
//! Labels are `Cow<'static, str>` so the same types back both the static
//! preset catalogue and series computed per request.

use std::borrow::Cow;

pub type Label = Cow<'static, str>;

/// Financial bar: projected cost and savings (₹ Cr) for one sync level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinancialPoint {
    pub name: Label,
    pub cost: i64,
    pub savings: i64,
}

/// Workload bar. `current` keeps its fractional value, `synced` is rounded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkloadPoint {
    pub name: Label,
    pub current: f64,
    pub synced: i64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GovernancePoint {
    pub year: Label,
    pub stability: f64,
    pub efficiency: f64,
    pub continuity: f64,
}

/// Radar pair for one logistics subject.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogisticsPoint {
    pub subject: Label,
    pub current: i64,
    pub optimized: i64,
}

/// Pie slice; the slices of one chart sum to 100.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionSlice {
    pub name: Label,
    pub value: i64,
}

impl FinancialPoint {
    pub const fn fixed(name: &'static str, cost: i64, savings: i64) -> Self {
        Self { name: Cow::Borrowed(name), cost, savings }
    }
}

impl WorkloadPoint {
    pub const fn fixed(name: &'static str, current: f64, synced: i64) -> Self {
        Self { name: Cow::Borrowed(name), current, synced }
    }
}

impl GovernancePoint {
    pub const fn fixed(year: &'static str, stability: f64, efficiency: f64, continuity: f64) -> Self {
        Self { year: Cow::Borrowed(year), stability, efficiency, continuity }
    }
}

impl LogisticsPoint {
    pub const fn fixed(subject: &'static str, current: i64, optimized: i64) -> Self {
        Self { subject: Cow::Borrowed(subject), current, optimized }
    }
}

impl DistributionSlice {
    pub const fn fixed(name: &'static str, value: i64) -> Self {
        Self { name: Cow::Borrowed(name), value }
    }
}
