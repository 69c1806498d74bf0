//! Saved-simulation record: the row a persistence collaborator stores when a
//! user saves a run. Field names are snake_case to match that row shape.

use serde::{Deserialize, Serialize};

use ss_core::catalogue::SimulationStatus;
use ss_core::{BudgetLevel, CostAssumption, ManpowerLevel, SimulationParams};

use crate::calculate::CalculatedResults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRecord {
    /// "<model display name> - <n> States"
    pub name: String,
    /// Model display name, not the wire token.
    pub model: String,
    pub states_count: u32,
    pub cycle_length: u8,
    pub cost_assumption: CostAssumption,
    pub manpower_level: ManpowerLevel,
    pub budget_level: BudgetLevel,
    pub cost_savings: String,
    pub efficiency: String,
    pub status: SimulationStatus,
}

impl SimulationRecord {
    pub fn from_run(params: &SimulationParams, results: &CalculatedResults) -> Self {
        let model = params.election_model.display_name();
        Self {
            name: format!("{model} - {} States", params.states_count),
            model: model.to_string(),
            states_count: params.states_count,
            cycle_length: params.cycle_length,
            cost_assumption: params.cost_assumption,
            manpower_level: params.manpower_level,
            budget_level: params.budget_level,
            cost_savings: results.cost_savings.clone(),
            efficiency: results.efficiency.clone(),
            status: SimulationStatus::Completed,
        }
    }
}
