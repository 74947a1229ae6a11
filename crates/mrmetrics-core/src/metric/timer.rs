use std::time::{Duration, Instant};

use super::{Histogram, HistogramSnapshot, Meter};

/// Unit that timer durations are expressed in once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    #[default]
    Milliseconds,
    Seconds,
    Minutes,
}

impl TimeUnit {
    fn nanos(self) -> f64 {
        match self {
            TimeUnit::Nanoseconds => 1.0,
            TimeUnit::Microseconds => 1_000.0,
            TimeUnit::Milliseconds => 1_000_000.0,
            TimeUnit::Seconds => 1_000_000_000.0,
            TimeUnit::Minutes => 60_000_000_000.0,
        }
    }

    /// Express `d` in this unit.
    pub fn convert(self, d: Duration) -> f64 {
        d.as_nanos() as f64 / self.nanos()
    }
}

/// A meter of events plus a histogram of their durations.
#[derive(Debug, Default)]
pub struct Timer {
    meter: Meter,
    histogram: Histogram,
    duration_unit: TimeUnit,
}

impl Timer {
    pub fn new(duration_unit: TimeUnit) -> Self {
        Self {
            meter: Meter::new(),
            histogram: Histogram::new(),
            duration_unit,
        }
    }

    /// Record one event that took `d`.
    pub fn update(&self, d: Duration) {
        self.meter.mark();
        self.histogram.record(self.duration_unit.convert(d));
    }

    /// Run `f`, recording how long it took.
    pub fn time<T>(&self, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.update(start.elapsed());
        out
    }

    pub fn duration_unit(&self) -> TimeUnit {
        self.duration_unit
    }

    /// Number of recorded events.
    pub fn count(&self) -> i64 {
        self.meter.count()
    }

    pub fn mean_rate(&self) -> f64 {
        self.meter.mean_rate()
    }

    /// Sum of recorded durations, in [`Timer::duration_unit`].
    pub fn sum(&self) -> f64 {
        self.histogram.sum()
    }

    pub fn snapshot(&self) -> HistogramSnapshot {
        self.histogram.snapshot()
    }
}
