//! Gauge coercion vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;

use mrmetrics_core::{CounterSink, Gauge, GaugeValue, MetricName, TaskCounters};
use mrmetrics_reporter::{coerce_gauge, MetricProjector};

#[derive(Debug, Deserialize)]
struct GaugeVector {
    description: String,
    value: VectorValue,
    #[serde(default)]
    expect: Option<i64>,
    #[serde(default)]
    expect_error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "v", rename_all = "lowercase")]
enum VectorValue {
    Long(i64),
    Int(i32),
    Double(f64),
    Float(f32),
    Other(String),
}

impl From<VectorValue> for GaugeValue {
    fn from(v: VectorValue) -> Self {
        match v {
            VectorValue::Long(v) => GaugeValue::Long(v),
            VectorValue::Int(v) => GaugeValue::Int(v),
            VectorValue::Double(v) => GaugeValue::Double(v),
            VectorValue::Float(v) => GaugeValue::Float(v),
            VectorValue::Other(v) => GaugeValue::Other(v),
        }
    }
}

fn load() -> Vec<GaugeVector> {
    let s = fs::read_to_string("tests/vectors/gauges.json").unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn coercion_vectors() {
    for v in load() {
        let res = coerce_gauge(&GaugeValue::from(v.value.clone()));

        if let Some(code) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.kind().as_str(), code, "vector={}", v.description);
            continue;
        }

        let expect = v.expect.expect("missing expect");
        assert_eq!(res.unwrap(), expect, "vector={}", v.description);
    }
}

#[test]
fn projected_gauge_vectors() {
    let name = MetricName::new("tests", "test").unwrap();

    for v in load() {
        let value = GaugeValue::from(v.value);
        let gauge = Gauge::new(move || value.clone());

        let mut out = TaskCounters::new();
        out.set_value(&mrmetrics_core::CounterKey::new("other", "marker"), 1)
            .unwrap();
        let written = MetricProjector::new()
            .project_gauge(&name, &gauge, &mut out)
            .expect("gauges never fail on coercion");

        match v.expect {
            Some(expect) => {
                assert_eq!(written, 1, "vector={}", v.description);
                assert_eq!(out.get("tests", "test"), Some(expect), "vector={}", v.description);
            }
            None => {
                assert_eq!(written, 0, "vector={}", v.description);
                assert_eq!(out.get("tests", "test"), None, "vector={}", v.description);
                assert_eq!(out.len(), 1, "vector={}", v.description);
            }
        }
    }
}
