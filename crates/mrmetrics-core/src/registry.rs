//! Registry of named metrics.
//!
//! Backed by a sharded `DashMap` so instrumented code keeps updating while a
//! reporter iterates. [`MetricsRegistry::all_metrics`] is therefore weakly
//! consistent: each handle is read when the reporter reaches it.

use std::sync::{Arc, OnceLock};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{MetricsError, Result};
use crate::metric::{Counter, Gauge, GaugeValue, Histogram, Meter, Metric, TimeUnit, Timer};
use crate::name::MetricName;

static DEFAULT_REGISTRY: OnceLock<MetricsRegistry> = OnceLock::new();

/// Process-wide registry, created on first use.
///
/// Only outermost entry points should reach for this; everything else takes a
/// `&MetricsRegistry`.
pub fn default_registry() -> &'static MetricsRegistry {
    DEFAULT_REGISTRY.get_or_init(MetricsRegistry::new)
}

#[derive(Debug, Default)]
pub struct MetricsRegistry {
    metrics: DashMap<MetricName, Metric>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self {
            metrics: DashMap::new(),
        }
    }

    /// Get or create a counter.
    pub fn counter(&self, name: MetricName) -> Result<Arc<Counter>> {
        self.get_or_add(name, "counter", || Metric::Counter(Arc::default()), |m| match m {
            Metric::Counter(c) => Some(Arc::clone(c)),
            _ => None,
        })
    }

    pub fn meter(&self, name: MetricName) -> Result<Arc<Meter>> {
        self.get_or_add(name, "meter", || Metric::Meter(Arc::default()), |m| match m {
            Metric::Meter(c) => Some(Arc::clone(c)),
            _ => None,
        })
    }

    pub fn histogram(&self, name: MetricName) -> Result<Arc<Histogram>> {
        self.get_or_add(name, "histogram", || Metric::Histogram(Arc::default()), |m| match m {
            Metric::Histogram(c) => Some(Arc::clone(c)),
            _ => None,
        })
    }

    /// Get or create a timer. An existing timer keeps its original unit.
    pub fn timer(&self, name: MetricName, duration_unit: TimeUnit) -> Result<Arc<Timer>> {
        self.get_or_add(
            name,
            "timer",
            || Metric::Timer(Arc::new(Timer::new(duration_unit))),
            |m| match m {
                Metric::Timer(c) => Some(Arc::clone(c)),
                _ => None,
            },
        )
    }

    /// Register a gauge reading from `f`. An existing gauge is returned as is.
    pub fn gauge<F, V>(&self, name: MetricName, f: F) -> Result<Arc<Gauge>>
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<GaugeValue>,
    {
        self.get_or_add(name, "gauge", || Metric::Gauge(Arc::new(Gauge::new(f))), |m| match m {
            Metric::Gauge(c) => Some(Arc::clone(c)),
            _ => None,
        })
    }

    /// Register a gauge over a source that can fail to read.
    pub fn try_gauge<F, V>(&self, name: MetricName, f: F) -> Result<Arc<Gauge>>
    where
        F: Fn() -> Result<V> + Send + Sync + 'static,
        V: Into<GaugeValue>,
    {
        self.get_or_add(name, "gauge", || Metric::Gauge(Arc::new(Gauge::try_new(f))), |m| match m {
            Metric::Gauge(c) => Some(Arc::clone(c)),
            _ => None,
        })
    }

    pub fn remove(&self, name: &MetricName) -> Option<Metric> {
        self.metrics.remove(name).map(|(_, m)| m)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Point-in-time list of every registered metric.
    pub fn all_metrics(&self) -> Vec<(MetricName, Metric)> {
        self.metrics
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect()
    }

    fn get_or_add<T>(
        &self,
        name: MetricName,
        kind: &'static str,
        make: impl FnOnce() -> Metric,
        pick: impl Fn(&Metric) -> Option<Arc<T>>,
    ) -> Result<Arc<T>> {
        match self.metrics.entry(name) {
            Entry::Occupied(e) => pick(e.get()).ok_or_else(|| {
                MetricsError::BadRequest(format!(
                    "metric {} already registered as {}, not {kind}",
                    e.key(),
                    e.get().kind()
                ))
            }),
            Entry::Vacant(e) => {
                tracing::debug!(metric = %e.key(), kind, "registered metric");
                let metric = e.insert(make());
                pick(metric.value()).ok_or_else(|| {
                    MetricsError::Internal(format!("new metric is not a {kind}"))
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    fn name(n: &str) -> MetricName {
        MetricName::new("tests", n).unwrap()
    }

    #[test]
    fn returns_same_handle_for_same_name() {
        let r = MetricsRegistry::new();
        let a = r.counter(name("hits")).unwrap();
        let b = r.counter(name("hits")).unwrap();
        a.inc_by(3);
        assert_eq!(b.count(), 3);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn kind_conflict_is_bad_request() {
        let r = MetricsRegistry::new();
        r.counter(name("x")).unwrap();
        let e = r.meter(name("x")).expect_err("kind conflict");
        assert_eq!(e.kind().as_str(), "BAD_REQUEST");
        assert!(e.to_string().contains("counter"));
    }

    #[test]
    fn all_metrics_lists_every_kind() {
        let r = MetricsRegistry::new();
        r.counter(name("c")).unwrap();
        r.meter(name("m")).unwrap();
        r.histogram(name("h")).unwrap();
        r.timer(name("t"), TimeUnit::Seconds).unwrap();
        r.gauge(name("g"), || 1i64).unwrap();

        let mut kinds: Vec<&str> = r.all_metrics().iter().map(|(_, m)| m.kind()).collect();
        kinds.sort();
        assert_eq!(kinds, ["counter", "gauge", "histogram", "meter", "timer"]);
    }

    #[test]
    fn debug_format_does_not_read_gauges() {
        let r = MetricsRegistry::new();
        r.try_gauge(name("g"), || -> Result<i64> {
            Err(MetricsError::Internal("must not be read".into()))
        })
        .unwrap();
        assert!(format!("{r:?}").contains("Gauge { .. }"));
    }

    #[test]
    fn remove_drops_metric() {
        let r = MetricsRegistry::new();
        r.counter(name("c")).unwrap();
        assert!(r.remove(&name("c")).is_some());
        assert!(r.is_empty());
    }
}
