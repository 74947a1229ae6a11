use mrmetrics_core::MetricName;

/// Group-based selection of which metrics a pass reports.
///
/// An empty include list selects every group; exclusion always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricFilter {
    include_groups: Vec<String>,
    exclude_groups: Vec<String>,
}

impl MetricFilter {
    /// Report everything.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(include_groups: Vec<String>, exclude_groups: Vec<String>) -> Self {
        Self {
            include_groups,
            exclude_groups,
        }
    }

    pub fn matches(&self, name: &MetricName) -> bool {
        let group = name.group();
        if self.exclude_groups.iter().any(|g| g == group) {
            return false;
        }
        self.include_groups.is_empty() || self.include_groups.iter().any(|g| g == group)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn n(group: &str) -> MetricName {
        MetricName::new(group, "x").unwrap()
    }

    #[test]
    fn default_matches_everything() {
        assert!(MetricFilter::all().matches(&n("a")));
    }

    #[test]
    fn exclusion_wins() {
        let f = MetricFilter::new(vec!["a".into(), "b".into()], vec!["b".into()]);
        assert!(f.matches(&n("a")));
        assert!(!f.matches(&n("b")));
        assert!(!f.matches(&n("c")));
    }
}
