//! End-of-run summaries.

use crate::agent::AgentState;

/// Summary of a finished (or budget-exhausted) delivery run.
///
/// Every field is a pure function of the map, the planner, and its seed,
/// so two identical runs produce byte-identical reports. Determinism
/// tests rely on that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Final agent state. `Executing` or `Replanning` here means the tick
    /// budget ran out mid-delivery.
    pub outcome: AgentState,
    /// Simulated ticks elapsed, including ticks spent waiting on a
    /// blocked cell.
    pub ticks: u64,
    /// Terrain cost of every cell actually entered.
    pub fuel_used: u64,
    /// Replanning episodes triggered by blocked moves.
    pub replans: u32,
    /// Search nodes expanded across the initial plan and all replans.
    pub nodes_expanded: u64,
    /// Cost of the most recently committed path.
    pub path_cost: u64,
    /// Step count of the most recently committed path.
    pub path_steps: usize,
}
