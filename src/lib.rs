//! gantt-charter: turn a YAML project schedule into an exported Gantt chart.
//!
//! The pipeline is a straight line: resolve the schedule document, parse it,
//! normalize the task table (defaults + derived durations), validate at the
//! rendering boundary, draw with plotters, and write one file in the
//! requested format. See [`app::run`] for the glue and [`io::document`] for
//! the loading contract.

pub mod app;
pub mod error;
pub mod io;
pub mod model;
pub mod render;

pub use error::ChartError;
