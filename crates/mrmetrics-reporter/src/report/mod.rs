//! Report passes over a registry.
//!
//! A pass reads a point-in-time list of metrics, projects each one into the
//! sink, and isolates failures per metric: a metric that fails is logged and
//! its counters are missing for that pass, every other metric still reports.

pub mod driver;
pub mod filter;

pub use driver::{ReportDriver, ReportSummary};
pub use filter::MetricFilter;
