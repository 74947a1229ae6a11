use mrmetrics_core::{
    default_registry, CounterSink, Metric, MetricName, MetricsError, MetricsRegistry, Result,
};

use crate::config::ReporterConfig;
use crate::projector::MetricProjector;

use super::filter::MetricFilter;

/// Outcome of one report pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Metrics projected without error (skipped gauges included).
    pub reported: usize,
    /// Metrics left out by the filter.
    pub filtered: usize,
    /// Metrics whose projection failed.
    pub failed: usize,
    /// Counter writes issued to the sink.
    pub counters_written: usize,
}

/// Reports every metric of a registry into a counter sink.
///
/// Passes are stateless. Counters and meters are cumulative, so running two
/// passes against a cumulative sink counts their totals twice; gauges are
/// overwritten and stay correct.
#[derive(Debug)]
pub struct ReportDriver<'r> {
    registry: &'r MetricsRegistry,
    projector: MetricProjector,
    filter: MetricFilter,
}

impl<'r> ReportDriver<'r> {
    pub fn new(registry: &'r MetricsRegistry) -> Self {
        Self {
            registry,
            projector: MetricProjector::new(),
            filter: MetricFilter::all(),
        }
    }

    pub fn with_filter(mut self, filter: MetricFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn from_config(cfg: &ReporterConfig, registry: &'r MetricsRegistry) -> Self {
        Self::new(registry).with_filter(cfg.reporter.filter())
    }

    /// Report all metrics of the process-wide default registry.
    pub fn report_all(sink: &mut dyn CounterSink) -> ReportSummary {
        ReportDriver::new(default_registry()).report(sink)
    }

    /// Report every metric of this driver's registry; never fails as a whole.
    pub fn report(&self, sink: &mut dyn CounterSink) -> ReportSummary {
        let mut summary = ReportSummary::default();

        for (name, metric) in self.registry.all_metrics() {
            if !self.filter.matches(&name) {
                summary.filtered += 1;
                continue;
            }

            match self.project(&name, &metric, sink) {
                Ok(written) => {
                    summary.reported += 1;
                    summary.counters_written += written;
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(
                        metric = %name,
                        kind = metric.kind(),
                        code = e.kind().as_str(),
                        error = %e,
                        "error reporting metric"
                    );
                }
            }
        }

        tracing::debug!(
            reported = summary.reported,
            filtered = summary.filtered,
            failed = summary.failed,
            counters = summary.counters_written,
            "report pass finished"
        );
        summary
    }

    fn project(
        &self,
        name: &MetricName,
        metric: &Metric,
        sink: &mut dyn CounterSink,
    ) -> Result<usize> {
        match metric {
            Metric::Counter(c) => self.projector.project_counter(name, c, sink),
            Metric::Meter(m) => self.projector.project_meter(name, m, sink),
            Metric::Histogram(h) => self.projector.project_histogram(name, h, sink),
            Metric::Timer(t) => self.projector.project_timer(name, t, sink),
            Metric::Gauge(g) => self.projector.project_gauge(name, g, sink),
            other => Err(MetricsError::UnsupportedKind(other.kind().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use mrmetrics_core::TaskCounters;

    use super::*;

    fn name(group: &str, n: &str) -> MetricName {
        MetricName::new(group, n).unwrap()
    }

    #[test]
    fn reports_every_kind() {
        let r = MetricsRegistry::new();
        r.counter(name("tests", "c")).unwrap().inc_by(3);
        r.histogram(name("tests", "h")).unwrap().update(9);
        r.gauge(name("tests", "g"), || 4.9f64).unwrap();

        let mut out = TaskCounters::new();
        let s = ReportDriver::new(&r).report(&mut out);

        assert_eq!(s.reported, 3);
        assert_eq!(s.failed, 0);
        assert_eq!(s.counters_written, 3);
        assert_eq!(out.get("tests", "c_count"), Some(3));
        assert_eq!(out.get("tests", "h_total"), Some(9));
        assert_eq!(out.get("tests", "g"), Some(4));
    }

    #[test]
    fn filter_skips_groups() {
        let r = MetricsRegistry::new();
        r.counter(name("keep", "a")).unwrap().inc();
        r.counter(name("noisy", "b")).unwrap().inc();

        let mut out = TaskCounters::new();
        let s = ReportDriver::new(&r)
            .with_filter(MetricFilter::new(vec![], vec!["noisy".into()]))
            .report(&mut out);

        assert_eq!(s.filtered, 1);
        assert_eq!(out.get("keep", "a_count"), Some(1));
        assert_eq!(out.get("noisy", "b_count"), None);
    }

    #[test]
    fn empty_registry_is_a_no_op() {
        let r = MetricsRegistry::new();
        let mut out = TaskCounters::new();
        assert_eq!(ReportDriver::new(&r).report(&mut out), ReportSummary::default());
        assert!(out.is_empty());
    }
}
