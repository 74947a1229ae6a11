//! mrmetrics reporter: projects registry metrics onto task counters.
//!
//! [`ReportDriver`] walks a registry and hands each metric to
//! [`MetricProjector`], which decides which counters to write and how to name
//! them. One failing metric never aborts a pass.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod obs;
pub mod projector;
pub mod report;

pub use projector::{coerce_gauge, MetricProjector};
pub use report::{MetricFilter, ReportDriver, ReportSummary};
