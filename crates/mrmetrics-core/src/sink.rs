//! Counter store contract and an in-memory task counter set.
//!
//! The store only knows `(group, label) -> i64` accumulators. Key derivation
//! is a cross-system naming contract:
//! - `label = name` for gauges
//! - `label = name + "_" + suffix` otherwise (`count` or `total`)

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{MetricsError, Result};
use crate::name::MetricName;

/// Default cap on distinct counters per task.
pub const DEFAULT_MAX_COUNTERS: usize = 120;

/// Closed set of label suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterSuffix {
    /// Event counts.
    Count,
    /// Sums of recorded values.
    Total,
}

impl CounterSuffix {
    pub fn as_str(self) -> &'static str {
        match self {
            CounterSuffix::Count => "count",
            CounterSuffix::Total => "total",
        }
    }
}

/// Address of one counter in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CounterKey {
    pub group: String,
    pub label: String,
}

impl CounterKey {
    pub fn new(group: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            label: label.into(),
        }
    }

    /// Derive the key for `name` with an optional suffix.
    pub fn for_metric(name: &MetricName, suffix: Option<CounterSuffix>) -> Self {
        let label = match suffix {
            Some(s) => format!("{}_{}", name.name(), s.as_str()),
            None => name.name().to_string(),
        };
        Self::new(name.group(), label)
    }
}

impl fmt::Display for CounterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.label)
    }
}

/// Append-only counter store owned by the task context.
///
/// Lookup is get-or-create. `increment` accumulates, `set_value` overwrites.
pub trait CounterSink {
    fn increment(&mut self, key: &CounterKey, delta: i64) -> Result<()>;
    fn set_value(&mut self, key: &CounterKey, value: i64) -> Result<()>;
}

/// In-memory counters for one task, capped at `max_counters` distinct keys.
#[derive(Debug, Clone)]
pub struct TaskCounters {
    counters: BTreeMap<CounterKey, i64>,
    max_counters: usize,
}

impl Default for TaskCounters {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_COUNTERS)
    }
}

impl TaskCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(max_counters: usize) -> Self {
        Self {
            counters: BTreeMap::new(),
            max_counters,
        }
    }

    pub fn get(&self, group: &str, label: &str) -> Option<i64> {
        self.counters.get(&CounterKey::new(group, label)).copied()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn max_counters(&self) -> usize {
        self.max_counters
    }

    /// Counters in `(group, label)` order.
    pub fn iter(&self) -> impl Iterator<Item = (&CounterKey, i64)> {
        self.counters.iter().map(|(k, v)| (k, *v))
    }

    fn slot(&mut self, key: &CounterKey) -> Result<&mut i64> {
        if !self.counters.contains_key(key) && self.counters.len() >= self.max_counters {
            return Err(MetricsError::Sink(format!(
                "too many counters: {} (max={}), cannot create {key}",
                self.counters.len(),
                self.max_counters
            )));
        }
        Ok(self.counters.entry(key.clone()).or_insert(0))
    }
}

impl CounterSink for TaskCounters {
    fn increment(&mut self, key: &CounterKey, delta: i64) -> Result<()> {
        let c = self.slot(key)?;
        *c = c.wrapping_add(delta);
        Ok(())
    }

    fn set_value(&mut self, key: &CounterKey, value: i64) -> Result<()> {
        *self.slot(key)? = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn derives_labels() {
        let n = MetricName::new("tests", "test").unwrap();
        assert_eq!(CounterKey::for_metric(&n, None), CounterKey::new("tests", "test"));
        assert_eq!(
            CounterKey::for_metric(&n, Some(CounterSuffix::Count)).label,
            "test_count"
        );
        assert_eq!(
            CounterKey::for_metric(&n, Some(CounterSuffix::Total)).label,
            "test_total"
        );
    }

    #[test]
    fn increment_accumulates_set_overwrites() {
        let mut c = TaskCounters::new();
        let k = CounterKey::new("g", "l");
        c.increment(&k, 300).unwrap();
        c.increment(&k, 400).unwrap();
        assert_eq!(c.get("g", "l"), Some(700));
        c.set_value(&k, 5).unwrap();
        assert_eq!(c.get("g", "l"), Some(5));
    }

    #[test]
    fn limit_blocks_new_counters_only() {
        let mut c = TaskCounters::with_limit(1);
        assert_eq!(c.max_counters(), 1);
        assert_eq!(TaskCounters::new().max_counters(), DEFAULT_MAX_COUNTERS);
        let a = CounterKey::new("g", "a");
        c.increment(&a, 1).unwrap();
        let e = c.increment(&CounterKey::new("g", "b"), 1).expect_err("over limit");
        assert_eq!(e.kind().as_str(), "SINK");
        c.increment(&a, 1).unwrap();
        assert_eq!(c.get("g", "a"), Some(2));
        assert_eq!(c.len(), 1);
    }
}
