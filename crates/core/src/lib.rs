//! Core types for plotting an optimization trajectory over a test function.
//!
//! - [`TrajectoryLog`] — the steps read from an optimizer's text log
//! - [`Objective`] — the four supported test functions and their domains
//! - [`Grid`] — an objective sampled on an evenly spaced grid
//! - [`PlanarPath`] — the horizontal position of each trajectory step

mod grid;
pub mod log;
pub mod objective;
mod path;

pub use grid::{Grid, linspace};
pub use log::{LogError, Outcome, ParseError, ResolveError, TrajectoryLog};
pub use objective::{Bounds, Objective, ObjectiveFn, UnknownObjective};
pub use path::{PathError, PlanarPath};
