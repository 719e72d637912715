//! The delivery agent and its execution loop.

use std::fmt;

use courier_core::{Cell, Path, PlanError, Tick};
use courier_grid::Grid;
use courier_plan::Planner;
use tracing::{debug, info, warn};

use crate::report::RunReport;

/// The agent's lifecycle.
///
/// `Idle -> Planning -> Executing`, with `Executing -> Replanning ->
/// Executing` loops whenever a move is blocked, terminating in `Arrived`
/// or `Failed`. Planning states resolve within a single [`step`] and do
/// not consume simulated time; a blocked move does, because the agent
/// holds position for that tick.
///
/// [`step`]: DeliveryAgent::step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentState {
    /// Created, no plan committed yet.
    Idle,
    /// Computing the initial plan.
    Planning,
    /// Following the committed path one cell per tick.
    Executing,
    /// A move was blocked; computing a fresh plan from the current
    /// position and clock.
    Replanning,
    /// Terminal: the goal cell was reached.
    Arrived,
    /// Terminal: planning failed or the committed path ran out short of
    /// the goal.
    Failed,
}

impl AgentState {
    /// Whether the run is over.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Arrived | Self::Failed)
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Planning => "planning",
            Self::Executing => "executing",
            Self::Replanning => "replanning",
            Self::Arrived => "arrived",
            Self::Failed => "failed",
        })
    }
}

/// A courier executing deliveries on a borrowed grid.
///
/// The agent is conservative about dynamic obstacles: before each move it
/// checks the next cell's occupancy at the *current* tick, even though
/// the committed plan was collision-checked at arrival ticks. A patrol
/// sitting on the next cell right now therefore stops the agent for one
/// tick and triggers a replan, which is exactly the reactive behavior a
/// real courier needs when the world and the plan disagree.
pub struct DeliveryAgent<'g> {
    grid: &'g Grid,
    planner: Planner,
    position: Cell,
    goal: Cell,
    clock: Tick,
    state: AgentState,
    path: Option<Path>,
    plan_index: usize,
    trail: Vec<Cell>,
    fuel_used: u64,
    replans: u32,
    nodes_expanded: u64,
    last_error: Option<PlanError>,
}

impl<'g> DeliveryAgent<'g> {
    /// Create an idle agent at `start` tasked with reaching `goal`.
    pub fn new(grid: &'g Grid, planner: Planner, start: Cell, goal: Cell) -> Self {
        Self {
            grid,
            planner,
            position: start,
            goal,
            clock: Tick::ZERO,
            state: AgentState::Idle,
            path: None,
            plan_index: 0,
            trail: vec![start],
            fuel_used: 0,
            replans: 0,
            nodes_expanded: 0,
            last_error: None,
        }
    }

    /// Current position.
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Current simulated tick.
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AgentState {
        self.state
    }

    /// The most recently committed path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Every cell the agent has actually occupied, start first.
    pub fn trail(&self) -> &[Cell] {
        &self.trail
    }

    /// The planning error that caused a `Failed` state, if that is why
    /// the run ended.
    pub fn last_error(&self) -> Option<&PlanError> {
        self.last_error.as_ref()
    }

    /// Advance the state machine by one transition and return the new
    /// state. Terminal states are absorbing.
    pub fn step(&mut self) -> AgentState {
        match self.state {
            AgentState::Idle | AgentState::Planning => self.plan(false),
            AgentState::Replanning => self.plan(true),
            AgentState::Executing => self.advance(),
            terminal => terminal,
        }
    }

    /// Drive the agent until it terminates or the clock reaches
    /// `max_ticks`, then summarize the run.
    pub fn run(&mut self, max_ticks: u64) -> RunReport {
        while !self.state.is_terminal() && self.clock.0 < max_ticks {
            self.step();
        }
        if !self.state.is_terminal() {
            warn!(tick = %self.clock, state = %self.state, "tick budget exhausted mid-delivery");
        }
        self.report()
    }

    /// Snapshot the run counters.
    pub fn report(&self) -> RunReport {
        RunReport {
            outcome: self.state,
            ticks: self.clock.0,
            fuel_used: self.fuel_used,
            replans: self.replans,
            nodes_expanded: self.nodes_expanded,
            path_cost: self.path.as_ref().map_or(0, |p| p.cost()),
            path_steps: self.path.as_ref().map_or(0, |p| p.step_count()),
        }
    }

    fn plan(&mut self, replan: bool) -> AgentState {
        if !replan {
            self.state = AgentState::Planning;
        }
        match self
            .planner
            .find_path(self.grid, self.position, self.goal, self.clock)
        {
            Ok(plan) => {
                self.nodes_expanded += plan.nodes_expanded;
                if replan {
                    self.replans += 1;
                    debug!(
                        planner = %self.planner,
                        tick = %self.clock,
                        from = %self.position,
                        cost = plan.path.cost(),
                        "replanned from current position"
                    );
                } else {
                    debug!(
                        planner = %self.planner,
                        cost = plan.path.cost(),
                        steps = plan.path.step_count(),
                        nodes = plan.nodes_expanded,
                        "committed initial plan"
                    );
                }
                self.path = Some(plan.path);
                self.plan_index = 0;
                self.state = AgentState::Executing;
            }
            Err(err) => {
                warn!(tick = %self.clock, error = %err, "planning failed");
                self.last_error = Some(err);
                self.state = AgentState::Failed;
            }
        }
        self.state
    }

    fn advance(&mut self) -> AgentState {
        let next = self.path.as_ref().and_then(|p| p.get(self.plan_index + 1));
        let Some(next) = next else {
            // A committed path always ends at the goal; the only way to
            // exhaust one is to have arrived.
            self.state = if self.position == self.goal {
                AgentState::Arrived
            } else {
                AgentState::Failed
            };
            return self.state;
        };

        if self.grid.is_occupied(next, self.clock) {
            // Holding position costs the tick the move would have taken.
            debug!(cell = %next, tick = %self.clock, "next cell occupied, holding to replan");
            self.clock = self.clock.next();
            self.state = AgentState::Replanning;
            return self.state;
        }

        if let Ok(cost) = self.grid.cost(next) {
            self.fuel_used += u64::from(cost);
        }
        self.position = next;
        self.plan_index += 1;
        self.trail.push(next);
        self.clock = self.clock.next();
        if self.position == self.goal {
            info!(tick = %self.clock, fuel = self.fuel_used, replans = self.replans, "arrived at goal");
            self.state = AgentState::Arrived;
        }
        self.state
    }
}
