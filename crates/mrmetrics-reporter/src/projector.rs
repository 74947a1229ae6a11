//! Metric → counter projection.
//!
//! The counter store only has accumulators, so each kind keeps what an
//! accumulator can carry:
//! - counters and meters: event count as `<name>_count`
//! - histograms: sum of values as `<name>_total`
//! - timers: both of the above
//! - gauges: current value as `<name>`, written with `set_value`
//!
//! Rates, min/max/mean/stddev and percentiles are not exported.

use mrmetrics_core::{
    Counter, CounterKey, CounterSink, CounterSuffix, Gauge, GaugeValue, Histogram, Meter,
    Metered, MetricName, MetricsError, Result, Summarizable, Timer,
};

/// Coerce a gauge value to `i64`.
///
/// Attempts in order:
/// 1. integral values are widened as is
/// 2. floating values are truncated toward zero (saturating, NaN is 0)
/// 3. anything else is parsed as a base-10 integer from its string form
pub fn coerce_gauge(value: &GaugeValue) -> Result<i64> {
    match value {
        GaugeValue::Long(v) => Ok(*v),
        GaugeValue::Int(v) => Ok(i64::from(*v)),
        GaugeValue::Double(v) => Ok(*v as i64),
        GaugeValue::Float(v) => Ok(*v as i64),
        GaugeValue::Other(s) => s
            .parse::<i64>()
            .map_err(|e| MetricsError::Coercion(format!("{s:?}: {e}"))),
    }
}

/// Stateless projector; each method returns how many counter writes it issued.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetricProjector;

impl MetricProjector {
    pub fn new() -> Self {
        Self
    }

    pub fn project_counter(
        &self,
        name: &MetricName,
        counter: &Counter,
        sink: &mut dyn CounterSink,
    ) -> Result<usize> {
        sink.increment(&key(name, Some(CounterSuffix::Count)), counter.count())?;
        Ok(1)
    }

    pub fn project_meter(
        &self,
        name: &MetricName,
        meter: &Meter,
        sink: &mut dyn CounterSink,
    ) -> Result<usize> {
        self.metered(name, meter, sink)
    }

    pub fn project_histogram(
        &self,
        name: &MetricName,
        histogram: &Histogram,
        sink: &mut dyn CounterSink,
    ) -> Result<usize> {
        Ok(self.summarizable(name, histogram, sink)? + self.sampling(name, histogram, sink)?)
    }

    /// A timer is a meter of events plus a histogram of their durations.
    pub fn project_timer(
        &self,
        name: &MetricName,
        timer: &Timer,
        sink: &mut dyn CounterSink,
    ) -> Result<usize> {
        Ok(self.metered(name, timer, sink)?
            + self.summarizable(name, timer, sink)?
            + self.sampling(name, timer, sink)?)
    }

    /// Gauges are best effort: a value that cannot be coerced is logged and
    /// skipped, nothing is written and the call still succeeds. A failed read
    /// is an error for the caller.
    pub fn project_gauge(
        &self,
        name: &MetricName,
        gauge: &Gauge,
        sink: &mut dyn CounterSink,
    ) -> Result<usize> {
        let value = gauge.value()?;
        match coerce_gauge(&value) {
            Ok(v) => {
                // Current state, not an accumulation: overwrite.
                sink.set_value(&key(name, None), v)?;
                Ok(1)
            }
            Err(e) => {
                tracing::warn!(
                    metric = %name,
                    value = %value,
                    code = e.kind().as_str(),
                    error = %e,
                    "gauge cannot be interpreted as i64, skipped"
                );
                Ok(0)
            }
        }
    }

    // Rates have no counter representation.
    fn metered(
        &self,
        name: &MetricName,
        metered: &impl Metered,
        sink: &mut dyn CounterSink,
    ) -> Result<usize> {
        sink.increment(&key(name, Some(CounterSuffix::Count)), metered.count())?;
        Ok(1)
    }

    fn summarizable(
        &self,
        name: &MetricName,
        summarizable: &impl Summarizable,
        sink: &mut dyn CounterSink,
    ) -> Result<usize> {
        let total = summarizable.sum().round() as i64;
        sink.increment(&key(name, Some(CounterSuffix::Total)), total)?;
        Ok(1)
    }

    // Percentiles and the median have no counter representation yet.
    fn sampling(
        &self,
        _name: &MetricName,
        _sampled: &impl Summarizable,
        _sink: &mut dyn CounterSink,
    ) -> Result<usize> {
        Ok(0)
    }
}

fn key(name: &MetricName, suffix: Option<CounterSuffix>) -> CounterKey {
    CounterKey::for_metric(name, suffix)
}
