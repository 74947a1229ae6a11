//! mrmetrics core: metric kinds, the registry, and the counter sink contract.
//!
//! This crate defines what the reporter reads (a [`MetricsRegistry`] of
//! [`Metric`] handles) and what it writes to (a [`CounterSink`] addressed by
//! [`CounterKey`]). It carries no reporting logic of its own.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `MetricsError`/`Result` so an instrumented process never goes
//! down because of its metrics.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metric;
pub mod name;
pub mod registry;
pub mod sink;

/// Shared result type.
pub use error::{ErrorKind, MetricsError, Result};
pub use metric::{
    Counter, Gauge, GaugeValue, Histogram, HistogramSnapshot, Meter, Metered, Metric,
    Summarizable, TimeUnit, Timer,
};
pub use name::MetricName;
pub use registry::{default_registry, MetricsRegistry};
pub use sink::{CounterKey, CounterSink, CounterSuffix, TaskCounters};
