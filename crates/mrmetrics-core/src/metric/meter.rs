use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Instant;

/// Event counter that also tracks its mean throughput.
///
/// Only [`Meter::count`] has a counter representation; the rate is kept for
/// in-process consumers.
#[derive(Debug)]
pub struct Meter {
    count: AtomicI64,
    start: Instant,
}

impl Default for Meter {
    fn default() -> Self {
        Self {
            count: AtomicI64::new(0),
            start: Instant::now(),
        }
    }
}

impl Meter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one event.
    pub fn mark(&self) {
        self.mark_n(1);
    }

    /// Mark `n` events.
    pub fn mark_n(&self, n: i64) {
        self.count.fetch_add(n, Ordering::Relaxed);
    }

    pub fn count(&self) -> i64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Events per second since creation.
    pub fn mean_rate(&self) -> f64 {
        let count = self.count();
        if count == 0 {
            return 0.0;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        if elapsed <= 0.0 {
            return 0.0;
        }
        count as f64 / elapsed
    }
}
