//! Metric kinds and the closed [`Metric`] variant the reporter dispatches on.
//!
//! Every kind is updated through `&self` (atomics or a short mutex) so handles
//! can be shared between instrumented code and the registry.

mod counter;
mod gauge;
mod histogram;
mod meter;
mod timer;

use std::sync::Arc;

pub use counter::Counter;
pub use gauge::{Gauge, GaugeValue};
pub use histogram::{Histogram, HistogramSnapshot};
pub use meter::Meter;
pub use timer::{TimeUnit, Timer};

/// Metrics that count events.
pub trait Metered {
    fn count(&self) -> i64;
    /// Events per second since creation.
    fn mean_rate(&self) -> f64;
}

/// Metrics that summarize recorded values.
pub trait Summarizable {
    fn sum(&self) -> f64;
    fn snapshot(&self) -> HistogramSnapshot;
}

impl Metered for Meter {
    fn count(&self) -> i64 {
        Meter::count(self)
    }
    fn mean_rate(&self) -> f64 {
        Meter::mean_rate(self)
    }
}

impl Metered for Timer {
    fn count(&self) -> i64 {
        Timer::count(self)
    }
    fn mean_rate(&self) -> f64 {
        Timer::mean_rate(self)
    }
}

impl Summarizable for Histogram {
    fn sum(&self) -> f64 {
        Histogram::sum(self)
    }
    fn snapshot(&self) -> HistogramSnapshot {
        Histogram::snapshot(self)
    }
}

impl Summarizable for Timer {
    fn sum(&self) -> f64 {
        Timer::sum(self)
    }
    fn snapshot(&self) -> HistogramSnapshot {
        Timer::snapshot(self)
    }
}

/// A registered metric: a shared handle to one of the supported kinds.
///
/// Matching outside this crate needs a fallback arm.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Metric {
    Counter(Arc<Counter>),
    Meter(Arc<Meter>),
    Histogram(Arc<Histogram>),
    Timer(Arc<Timer>),
    Gauge(Arc<Gauge>),
}

impl Metric {
    /// Kind name used in logs and conflict errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Metric::Counter(_) => "counter",
            Metric::Meter(_) => "meter",
            Metric::Histogram(_) => "histogram",
            Metric::Timer(_) => "timer",
            Metric::Gauge(_) => "gauge",
        }
    }
}
