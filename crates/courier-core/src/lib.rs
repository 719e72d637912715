//! Core types and errors for the Courier delivery simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental vocabulary shared across the workspace: grid coordinates,
//! the simulation clock, committed paths, and the error types planners
//! report.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cell;
mod error;
mod path;
mod tick;

pub use cell::Cell;
pub use error::{CellError, Endpoint, PlanError};
pub use path::Path;
pub use tick::Tick;
