//! Chart-series derivations.
//!
//! Every bounded value (workload, governance, logistics "optimized") is
//! clamped to `[0, 100]`. Distribution slices always sum to exactly 100.

use std::borrow::Cow;

use ss_core::rounding::{clamp_pct, round_to_i64};
use ss_core::{DistributionSlice, FinancialPoint, GovernancePoint, LogisticsPoint, WorkloadPoint};

/// Fixed proportional split (current / partial / full sync). Independent of the
/// request's own model factor; a display simplification.
const FINANCIAL_SPLIT: [(&str, f64); 3] = [("Current", 1.0), ("Partial", 0.75), ("Full Sync", 0.55)];

/// (category, offset from the workload base, sensitivity to the savings factor)
const WORKLOAD_ROWS: [(&str, f64, f64); 4] = [
    ("Personnel", 0.0, 1.0),
    ("Logistics", -5.0, 1.0),
    ("Security", 5.0, 0.8),
    ("Equipment", -10.0, 1.2),
];

const LOGISTICS_BASELINE: [(&str, i64); 4] = [
    ("EVM/VVPAT Transport", 82),
    ("Vehicle Deployment", 71),
    ("Booth Setup", 78),
    ("Training Cycles", 63),
];

pub fn financial_series(current_cost: i64) -> Vec<FinancialPoint> {
    let cost = current_cost as f64;
    FINANCIAL_SPLIT
        .iter()
        .map(|&(name, share)| FinancialPoint {
            name: Cow::Borrowed(name),
            cost: round_to_i64(cost * share),
            savings: round_to_i64(cost * (1.0 - share)),
        })
        .collect()
}

/// Workload base grows 1.4 points per state from 60, capped at 100.
pub fn workload_series(states_count: u32, savings_factor: f64) -> Vec<WorkloadPoint> {
    let base = (60.0 + f64::from(states_count) * 1.4).min(100.0);
    WORKLOAD_ROWS
        .iter()
        .map(|&(name, offset, sensitivity)| {
            let current = clamp_pct(base + offset);
            let synced = round_to_i64(current * (1.0 - savings_factor * sensitivity)).clamp(0, 100);
            WorkloadPoint { name: Cow::Borrowed(name), current, synced }
        })
        .collect()
}

/// One point per cycle year (`Y1..Yn`): a linear baseline, a per-year
/// increment, and an offset scaled by the model's efficiency factor.
pub fn governance_series(cycle_length: u8, efficiency_factor: f64) -> Vec<GovernancePoint> {
    (0..cycle_length)
        .map(|i| {
            let year = f64::from(i);
            GovernancePoint {
                year: Cow::Owned(format!("Y{}", u32::from(i) + 1)),
                stability: clamp_pct(55.0 + year * 8.0 + efficiency_factor * 0.3),
                efficiency: clamp_pct(40.0 + year * 10.0 + efficiency_factor * 0.4),
                continuity: clamp_pct(60.0 + year * 7.0 + efficiency_factor * 0.35),
            }
        })
        .collect()
}

pub fn logistics_series(savings_factor: f64) -> Vec<LogisticsPoint> {
    let lift = 1.0 + savings_factor * 0.3;
    LOGISTICS_BASELINE
        .iter()
        .map(|&(subject, current)| LogisticsPoint {
            subject: Cow::Borrowed(subject),
            current,
            optimized: round_to_i64(current as f64 * lift).clamp(0, 100),
        })
        .collect()
}

/// Financial gains `round(savings * 20)` points; Administrative cedes the
/// floor half of that gain, Governance the rest.
pub fn distribution_series(savings_factor: f64) -> Vec<DistributionSlice> {
    let gain = round_to_i64(savings_factor * 20.0);
    let admin_cede = gain / 2;
    let governance_cede = gain - admin_cede;
    vec![
        DistributionSlice { name: Cow::Borrowed("Financial"), value: 30 + gain },
        DistributionSlice { name: Cow::Borrowed("Administrative"), value: 40 - admin_cede },
        DistributionSlice { name: Cow::Borrowed("Governance"), value: 30 - governance_cede },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn financial_split_for_worked_example() {
        let f = financial_series(6_161);
        assert_eq!(f[0], FinancialPoint::fixed("Current", 6_161, 0));
        assert_eq!(f[1], FinancialPoint::fixed("Partial", 4_621, 1_540));
        assert_eq!(f[2], FinancialPoint::fixed("Full Sync", 3_389, 2_772));
    }

    #[test]
    fn workload_at_fifteen_states_full_sync() {
        let w = workload_series(15, 0.45);
        let names: Vec<_> = w.iter().map(|p| p.name.as_ref()).collect();
        assert_eq!(names, ["Personnel", "Logistics", "Security", "Equipment"]);
        assert!((w[0].current - 81.0).abs() < 1e-9);
        assert_eq!(w[0].synced, 45);
        assert!((w[2].current - 86.0).abs() < 1e-9);
        assert_eq!(w[2].synced, 55);
        assert_eq!(w[3].synced, 33);
    }

    #[test]
    fn workload_security_clamped_at_max_states() {
        let w = workload_series(28, 0.0);
        assert!(w.iter().all(|p| (0.0..=100.0).contains(&p.current)));
        assert_eq!(w[2].current, 100.0);
        assert_eq!(w[2].synced, 100);
    }

    #[test]
    fn governance_has_one_point_per_year() {
        let g = governance_series(7, 45.0);
        assert_eq!(g.len(), 7);
        assert_eq!(g[0].year, "Y1");
        assert_eq!(g[6].year, "Y7");
        assert!((g[0].stability - 68.5).abs() < 1e-9);
        assert!((g[0].efficiency - 58.0).abs() < 1e-9);
        assert_eq!(g[6].efficiency, 100.0);
        assert!(governance_series(0, 45.0).is_empty());
    }

    #[test]
    fn logistics_lift_for_full_sync() {
        let l = logistics_series(0.45);
        let optimized: Vec<_> = l.iter().map(|p| p.optimized).collect();
        assert_eq!(optimized, [93, 81, 89, 72]);
        let flat: Vec<_> = logistics_series(0.0).iter().map(|p| p.optimized).collect();
        assert_eq!(flat, [82, 71, 78, 63]);
    }

    #[test]
    fn distribution_values_per_model() {
        let v = |s: f64| distribution_series(s).iter().map(|d| d.value).collect::<Vec<_>>();
        assert_eq!(v(0.0), [30, 40, 30]);
        assert_eq!(v(0.25), [35, 38, 27]);
        assert_eq!(v(0.45), [39, 36, 25]);
    }

    proptest! {
        #[test]
        fn distribution_always_sums_to_100(s in 0.0f64..=0.45) {
            let total: i64 = distribution_series(s).iter().map(|d| d.value).sum();
            prop_assert_eq!(total, 100);
        }

        #[test]
        fn bounded_series_stay_in_range(states in 0u32..=200, cycle in 0u8..=40, s in 0.0f64..=0.45, e in 0.0f64..=45.0) {
            for p in workload_series(states, s) {
                prop_assert!((0.0..=100.0).contains(&p.current));
                prop_assert!((0..=100).contains(&p.synced));
            }
            for p in governance_series(cycle, e) {
                prop_assert!((0.0..=100.0).contains(&p.stability));
                prop_assert!((0.0..=100.0).contains(&p.efficiency));
                prop_assert!((0.0..=100.0).contains(&p.continuity));
            }
            for p in logistics_series(s) {
                prop_assert!((0..=100).contains(&p.optimized));
            }
        }
    }
}
