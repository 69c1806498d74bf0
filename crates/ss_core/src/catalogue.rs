//! Preset scenario catalogue and guest demo simulations.
//!
//! Presets are illustrative templates displayed independently of the live
//! calculation. Order is fixed; the first entry is the default.

use crate::charts::{DistributionSlice, FinancialPoint, GovernancePoint, LogisticsPoint, WorkloadPoint};
use crate::variables::{BudgetLevel, CostAssumption, ManpowerLevel};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScenarioConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cost_savings: &'static str,
    pub efficiency: &'static str,
    pub complexity: &'static str,
    pub financial_data: &'static [FinancialPoint],
    pub workload_data: &'static [WorkloadPoint],
    pub logistics_data: &'static [LogisticsPoint],
    pub governance_data: &'static [GovernancePoint],
    pub pie_data: &'static [DistributionSlice],
}

/// Baseline logistics radar shared by the general-election preset.
const LOGISTICS_MOVEMENT: &[LogisticsPoint] = &[
    LogisticsPoint::fixed("EVM/VVPAT Transport", 82, 94),
    LogisticsPoint::fixed("Vehicle Deployment", 71, 89),
    LogisticsPoint::fixed("Booth Setup", 78, 90),
    LogisticsPoint::fixed("Training Cycles", 63, 86),
];

static SCENARIOS: [ScenarioConfig; 5] = [
    ScenarioConfig {
        id: "lok-sabha-general",
        name: "General Lok Sabha Election Model",
        description: "Full national election simulation covering all 543 constituencies",
        cost_savings: "₹45,000 Cr",
        efficiency: "+48%",
        complexity: "High",
        financial_data: &[
            FinancialPoint::fixed("Current", 60_000, 0),
            FinancialPoint::fixed("Partial", 45_000, 15_000),
            FinancialPoint::fixed("Full Sync", 28_000, 32_000),
        ],
        workload_data: &[
            WorkloadPoint::fixed("Personnel", 95.0, 55),
            WorkloadPoint::fixed("Logistics", 90.0, 50),
            WorkloadPoint::fixed("Security", 100.0, 65),
            WorkloadPoint::fixed("Equipment", 85.0, 40),
        ],
        logistics_data: LOGISTICS_MOVEMENT,
        governance_data: &[
            GovernancePoint::fixed("Y1", 60.0, 45.0, 65.0),
            GovernancePoint::fixed("Y2", 70.0, 60.0, 72.0),
            GovernancePoint::fixed("Y3", 78.0, 72.0, 80.0),
            GovernancePoint::fixed("Y4", 85.0, 82.0, 88.0),
            GovernancePoint::fixed("Y5", 92.0, 90.0, 95.0),
        ],
        pie_data: &[
            DistributionSlice::fixed("Financial", 40),
            DistributionSlice::fixed("Administrative", 35),
            DistributionSlice::fixed("Governance", 25),
        ],
    },
    ScenarioConfig {
        id: "state-assembly-cycle",
        name: "State Assembly Cycle Model",
        description: "Regional state assembly election cycle optimization",
        cost_savings: "₹18,000 Cr",
        efficiency: "+32%",
        complexity: "Moderate",
        financial_data: &[
            FinancialPoint::fixed("Current", 35_000, 0),
            FinancialPoint::fixed("Partial", 28_000, 7_000),
            FinancialPoint::fixed("Full Sync", 17_000, 18_000),
        ],
        workload_data: &[
            WorkloadPoint::fixed("Personnel", 75.0, 50),
            WorkloadPoint::fixed("Logistics", 70.0, 45),
            WorkloadPoint::fixed("Security", 80.0, 55),
            WorkloadPoint::fixed("Equipment", 72.0, 38),
        ],
        logistics_data: &[
            LogisticsPoint::fixed("EVM/VVPAT Transport", 75, 90),
            LogisticsPoint::fixed("Vehicle Deployment", 68, 85),
            LogisticsPoint::fixed("Booth Setup", 72, 88),
            LogisticsPoint::fixed("Training Cycles", 60, 82),
        ],
        governance_data: &[
            GovernancePoint::fixed("Y1", 68.0, 52.0, 72.0),
            GovernancePoint::fixed("Y2", 74.0, 64.0, 78.0),
            GovernancePoint::fixed("Y3", 80.0, 72.0, 82.0),
            GovernancePoint::fixed("Y4", 84.0, 80.0, 86.0),
            GovernancePoint::fixed("Y5", 88.0, 85.0, 90.0),
        ],
        pie_data: &[
            DistributionSlice::fixed("Financial", 35),
            DistributionSlice::fixed("Administrative", 42),
            DistributionSlice::fixed("Governance", 23),
        ],
    },
    ScenarioConfig {
        id: "mixed-sync-6-states",
        name: "Mixed Sync Cycle (6 States Grouped)",
        description: "Synchronized elections for 6 grouped states with mixed schedules",
        cost_savings: "₹12,000 Cr",
        efficiency: "+28%",
        complexity: "Moderate",
        financial_data: &[
            FinancialPoint::fixed("Current", 25_000, 0),
            FinancialPoint::fixed("Partial", 20_000, 5_000),
            FinancialPoint::fixed("Full Sync", 13_000, 12_000),
        ],
        workload_data: &[
            WorkloadPoint::fixed("Personnel", 70.0, 48),
            WorkloadPoint::fixed("Logistics", 65.0, 42),
            WorkloadPoint::fixed("Security", 75.0, 52),
            WorkloadPoint::fixed("Equipment", 68.0, 35),
        ],
        logistics_data: &[
            LogisticsPoint::fixed("EVM/VVPAT Transport", 78, 92),
            LogisticsPoint::fixed("Vehicle Deployment", 70, 87),
            LogisticsPoint::fixed("Booth Setup", 74, 89),
            LogisticsPoint::fixed("Training Cycles", 62, 84),
        ],
        governance_data: &[
            GovernancePoint::fixed("Y1", 70.0, 55.0, 74.0),
            GovernancePoint::fixed("Y2", 76.0, 65.0, 79.0),
            GovernancePoint::fixed("Y3", 81.0, 73.0, 83.0),
            GovernancePoint::fixed("Y4", 85.0, 80.0, 87.0),
            GovernancePoint::fixed("Y5", 89.0, 86.0, 91.0),
        ],
        pie_data: &[
            DistributionSlice::fixed("Financial", 32),
            DistributionSlice::fixed("Administrative", 45),
            DistributionSlice::fixed("Governance", 23),
        ],
    },
    ScenarioConfig {
        id: "financial-manpower-high",
        name: "Financial + Manpower High-Load Scenario",
        description: "Stress test with maximum financial and personnel requirements",
        cost_savings: "₹52,000 Cr",
        efficiency: "+55%",
        complexity: "Very High",
        financial_data: &[
            FinancialPoint::fixed("Current", 75_000, 0),
            FinancialPoint::fixed("Partial", 55_000, 20_000),
            FinancialPoint::fixed("Full Sync", 23_000, 52_000),
        ],
        workload_data: &[
            WorkloadPoint::fixed("Personnel", 100.0, 45),
            WorkloadPoint::fixed("Logistics", 95.0, 40),
            WorkloadPoint::fixed("Security", 100.0, 50),
            WorkloadPoint::fixed("Equipment", 90.0, 35),
        ],
        logistics_data: &[
            LogisticsPoint::fixed("EVM/VVPAT Transport", 85, 96),
            LogisticsPoint::fixed("Vehicle Deployment", 75, 92),
            LogisticsPoint::fixed("Booth Setup", 80, 94),
            LogisticsPoint::fixed("Training Cycles", 65, 88),
        ],
        governance_data: &[
            GovernancePoint::fixed("Y1", 55.0, 40.0, 60.0),
            GovernancePoint::fixed("Y2", 68.0, 58.0, 70.0),
            GovernancePoint::fixed("Y3", 78.0, 72.0, 80.0),
            GovernancePoint::fixed("Y4", 86.0, 84.0, 88.0),
            GovernancePoint::fixed("Y5", 94.0, 92.0, 96.0),
        ],
        pie_data: &[
            DistributionSlice::fixed("Financial", 45),
            DistributionSlice::fixed("Administrative", 32),
            DistributionSlice::fixed("Governance", 23),
        ],
    },
    ScenarioConfig {
        id: "low-turnout-stress",
        name: "Low-Turnout Economic Stress Scenario",
        description: "Economic downturn simulation with reduced voter participation",
        cost_savings: "₹8,500 Cr",
        efficiency: "+18%",
        complexity: "Low",
        financial_data: &[
            FinancialPoint::fixed("Current", 20_000, 0),
            FinancialPoint::fixed("Partial", 16_000, 4_000),
            FinancialPoint::fixed("Full Sync", 11_500, 8_500),
        ],
        workload_data: &[
            WorkloadPoint::fixed("Personnel", 60.0, 45),
            WorkloadPoint::fixed("Logistics", 55.0, 40),
            WorkloadPoint::fixed("Security", 65.0, 50),
            WorkloadPoint::fixed("Equipment", 58.0, 38),
        ],
        logistics_data: &[
            LogisticsPoint::fixed("EVM/VVPAT Transport", 70, 85),
            LogisticsPoint::fixed("Vehicle Deployment", 62, 78),
            LogisticsPoint::fixed("Booth Setup", 68, 82),
            LogisticsPoint::fixed("Training Cycles", 55, 75),
        ],
        governance_data: &[
            GovernancePoint::fixed("Y1", 72.0, 58.0, 75.0),
            GovernancePoint::fixed("Y2", 76.0, 65.0, 78.0),
            GovernancePoint::fixed("Y3", 79.0, 70.0, 81.0),
            GovernancePoint::fixed("Y4", 82.0, 75.0, 84.0),
            GovernancePoint::fixed("Y5", 85.0, 80.0, 87.0),
        ],
        pie_data: &[
            DistributionSlice::fixed("Financial", 28),
            DistributionSlice::fixed("Administrative", 48),
            DistributionSlice::fixed("Governance", 24),
        ],
    },
];

/// All presets in display order.
pub fn scenarios() -> &'static [ScenarioConfig] {
    &SCENARIOS
}

pub fn scenario_by_id(id: &str) -> Option<&'static ScenarioConfig> {
    SCENARIOS.iter().find(|s| s.id == id)
}

/// First preset.
pub fn default_scenario() -> &'static ScenarioConfig {
    &SCENARIOS[0]
}

/// Lookup that never misses: absent ids yield the default preset.
pub fn scenario_or_default(id: &str) -> &'static ScenarioConfig {
    scenario_by_id(id).unwrap_or_else(default_scenario)
}

// ----------------------------- Guest demo records -----------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SimulationStatus {
    Completed,
    Pending,
}

/// Saved-simulation shaped record shown to guests who have no history.
/// Ages are relative (days) so nothing depends on the wall clock.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DemoSimulation {
    pub id: &'static str,
    pub name: &'static str,
    pub model: &'static str,
    pub states_count: u32,
    pub cycle_length: u8,
    pub cost_assumption: CostAssumption,
    pub manpower_level: ManpowerLevel,
    pub budget_level: BudgetLevel,
    pub cost_savings: &'static str,
    pub efficiency: &'static str,
    pub status: SimulationStatus,
    pub age_days: u32,
    pub scenario_type: &'static str,
}

impl DemoSimulation {
    /// The preset this demo record illustrates.
    pub fn scenario(&self) -> &'static ScenarioConfig {
        scenario_or_default(self.scenario_type)
    }
}

static DEMO_SIMULATIONS: [DemoSimulation; 3] = [
    DemoSimulation {
        id: "demo-001",
        name: "Full Sync - 28 States",
        model: "Full Synchronization",
        states_count: 28,
        cycle_length: 5,
        cost_assumption: CostAssumption::Medium,
        manpower_level: ManpowerLevel::Standard,
        budget_level: BudgetLevel::Normal,
        cost_savings: "₹45,000 Cr",
        efficiency: "+48%",
        status: SimulationStatus::Completed,
        age_days: 3,
        scenario_type: "lok-sabha-general",
    },
    DemoSimulation {
        id: "demo-002",
        name: "Partial Sync - North Region",
        model: "Partial Synchronization",
        states_count: 8,
        cycle_length: 5,
        cost_assumption: CostAssumption::Low,
        manpower_level: ManpowerLevel::Minimal,
        budget_level: BudgetLevel::Tight,
        cost_savings: "₹12,000 Cr",
        efficiency: "+22%",
        status: SimulationStatus::Completed,
        age_days: 5,
        scenario_type: "mixed-sync-6-states",
    },
    DemoSimulation {
        id: "demo-003",
        name: "State Assembly Cycle",
        model: "State Assembly",
        states_count: 15,
        cycle_length: 5,
        cost_assumption: CostAssumption::Medium,
        manpower_level: ManpowerLevel::Standard,
        budget_level: BudgetLevel::Normal,
        cost_savings: "₹27,000 Cr",
        efficiency: "+35%",
        status: SimulationStatus::Completed,
        age_days: 7,
        scenario_type: "state-assembly-cycle",
    },
];

/// Demo records, most recent first.
pub fn demo_simulations() -> &'static [DemoSimulation] {
    &DEMO_SIMULATIONS
}
