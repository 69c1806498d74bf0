//! Side-by-side comparison of two calculated scenarios.
//!
//! Every compared metric is "higher is better"; verdicts are from the first
//! scenario's point of view.

use serde::{Deserialize, Serialize};

use ss_algo::admin_efficiency;

use crate::calculate::CalculatedResults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Better,
    Worse,
    Same,
}

impl Verdict {
    fn of<T: Ord>(first: T, second: T) -> Self {
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Verdict::Better,
            std::cmp::Ordering::Less => Verdict::Worse,
            std::cmp::Ordering::Equal => Verdict::Same,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Better => "better",
            Verdict::Worse => "worse",
            Verdict::Same => "same",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub metric: String,
    pub scenario1: String,
    pub scenario2: String,
    pub verdict: Verdict,
}

fn row<T: Ord>(metric: &str, first: (String, T), second: (String, T)) -> ComparisonRow {
    ComparisonRow {
        metric: metric.to_string(),
        scenario1: first.0,
        scenario2: second.0,
        verdict: Verdict::of(first.1, second.1),
    }
}

/// Rows in display order: Cost Savings, Efficiency, Manpower Reduction,
/// Admin Efficiency, Policy Continuity.
pub fn compare(a: &CalculatedResults, b: &CalculatedResults) -> Vec<ComparisonRow> {
    vec![
        row(
            "Cost Savings",
            (a.cost_savings.clone(), a.cost_savings_value),
            (b.cost_savings.clone(), b.cost_savings_value),
        ),
        row(
            "Efficiency",
            (a.efficiency.clone(), a.efficiency_value),
            (b.efficiency.clone(), b.efficiency_value),
        ),
        row(
            "Manpower Reduction",
            (a.manpower_saved.clone(), a.manpower_saved_value),
            (b.manpower_saved.clone(), b.manpower_saved_value),
        ),
        row(
            "Admin Efficiency",
            (a.admin_efficiency.clone(), admin_efficiency(a.efficiency_value)),
            (b.admin_efficiency.clone(), admin_efficiency(b.efficiency_value)),
        ),
        row(
            "Policy Continuity",
            (a.policy_continuity.to_string(), a.policy_continuity),
            (b.policy_continuity.to_string(), b.policy_continuity),
        ),
    ]
}
