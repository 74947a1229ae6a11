use std::sync::{Mutex, MutexGuard};

/// Point-in-time statistics of a [`Histogram`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HistogramSnapshot {
    pub count: u64,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

#[derive(Debug, Default)]
struct RunningStats {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
    // Welford accumulators
    mean: f64,
    m2: f64,
}

impl RunningStats {
    fn push(&mut self, v: f64) {
        if self.count == 0 {
            self.min = v;
            self.max = v;
        } else {
            self.min = self.min.min(v);
            self.max = self.max.max(v);
        }
        self.count += 1;
        self.sum += v;
        let delta = v - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (v - self.mean);
    }

    fn snapshot(&self) -> HistogramSnapshot {
        let std_dev = if self.count > 1 {
            (self.m2 / (self.count - 1) as f64).sqrt()
        } else {
            0.0
        };
        HistogramSnapshot {
            count: self.count,
            sum: self.sum,
            min: self.min,
            max: self.max,
            mean: self.mean,
            std_dev,
        }
    }
}

/// Distribution of recorded values, summarized as running statistics.
#[derive(Debug, Default)]
pub struct Histogram {
    stats: Mutex<RunningStats>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&self, value: i64) {
        self.record(value as f64);
    }

    pub(crate) fn record(&self, value: f64) {
        self.lock().push(value);
    }

    pub fn count(&self) -> u64 {
        self.lock().count
    }

    /// Sum of every recorded value.
    pub fn sum(&self) -> f64 {
        self.lock().sum
    }

    pub fn snapshot(&self) -> HistogramSnapshot {
        self.lock().snapshot()
    }

    pub fn clear(&self) {
        *self.lock() = RunningStats::default();
    }

    // Stats stay consistent across a poisoned lock; recover the guard.
    fn lock(&self) -> MutexGuard<'_, RunningStats> {
        self.stats.lock().unwrap_or_else(|e| e.into_inner())
    }
}
