use serde::Deserialize;

use mrmetrics_core::{MetricsError, Result, TaskCounters};

use crate::report::MetricFilter;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReporterConfig {
    pub version: u32,

    #[serde(default)]
    pub reporter: ReporterSection,

    #[serde(default)]
    pub sink: SinkSection,
}

impl ReporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::UnsupportedVersion);
        }
        self.reporter.validate()?;
        self.sink.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ReporterSection {
    /// Groups to report; empty means all.
    #[serde(default)]
    pub include_groups: Vec<String>,

    #[serde(default)]
    pub exclude_groups: Vec<String>,
}

impl ReporterSection {
    pub fn validate(&self) -> Result<()> {
        for g in self.include_groups.iter().chain(&self.exclude_groups) {
            if g.is_empty() {
                return Err(MetricsError::BadRequest(
                    "reporter group entries must not be empty".into(),
                ));
            }
        }
        if let Some(g) = self
            .include_groups
            .iter()
            .find(|g| self.exclude_groups.contains(*g))
        {
            return Err(MetricsError::BadRequest(format!(
                "reporter group {g} is both included and excluded"
            )));
        }
        Ok(())
    }

    pub fn filter(&self) -> MetricFilter {
        MetricFilter::new(self.include_groups.clone(), self.exclude_groups.clone())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SinkSection {
    #[serde(default = "default_max_counters")]
    pub max_counters: usize,
}

impl Default for SinkSection {
    fn default() -> Self {
        Self {
            max_counters: default_max_counters(),
        }
    }
}

impl SinkSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=10_000).contains(&self.max_counters) {
            return Err(MetricsError::BadRequest(
                "sink.max_counters must be between 1 and 10000".into(),
            ));
        }
        Ok(())
    }

    /// Empty task counters honoring this section's limit.
    pub fn task_counters(&self) -> TaskCounters {
        TaskCounters::with_limit(self.max_counters)
    }
}

fn default_max_counters() -> usize {
    mrmetrics_core::sink::DEFAULT_MAX_COUNTERS
}
