//! Delivery agent state machine for the Courier simulator.
//!
//! A [`DeliveryAgent`] executes a committed path one step per tick
//! against the live environment, re-checking the next cell's dynamic
//! occupancy before every move and re-invoking its planner from the
//! current position and clock when the move is blocked. Replanning is
//! reactive, not precomputed: the one piece of real engineering subtlety
//! here is that occupancy must be judged against the simulated clock,
//! never against conditions at tick zero.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod agent;
mod report;

pub use agent::{AgentState, DeliveryAgent};
pub use report::RunReport;
