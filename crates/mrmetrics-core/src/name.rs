//! Metric identity.

use std::fmt;

use crate::error::{MetricsError, Result};

/// Identifies a metric by `group` (namespace) and `name` (label).
///
/// Used as the registry key and as the source of every counter key derived
/// from the metric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetricName {
    group: String,
    name: String,
}

impl MetricName {
    /// Build a name; both components must be non-empty.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let group = group.into();
        let name = name.into();
        if group.is_empty() {
            return Err(MetricsError::BadRequest("metric group must not be empty".into()));
        }
        if name.is_empty() {
            return Err(MetricsError::BadRequest(format!(
                "metric name must not be empty (group={group})"
            )));
        }
        Ok(Self { group, name })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.name)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn rejects_empty_components() {
        let e = MetricName::new("", "x").expect_err("empty group");
        assert_eq!(e.kind().as_str(), "BAD_REQUEST");
        let e = MetricName::new("tests", "").expect_err("empty name");
        assert_eq!(e.kind().as_str(), "BAD_REQUEST");
    }

    #[test]
    fn displays_dotted() {
        let n = MetricName::new("tests", "test").unwrap();
        assert_eq!(n.to_string(), "tests.test");
        assert_eq!(n.group(), "tests");
        assert_eq!(n.name(), "test");
    }
}
