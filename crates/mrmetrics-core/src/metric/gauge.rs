use std::fmt;

use crate::error::Result;

/// Dynamically typed value read from a [`Gauge`].
#[derive(Debug, Clone, PartialEq)]
pub enum GaugeValue {
    Long(i64),
    Int(i32),
    Double(f64),
    Float(f32),
    /// String representation of any other value.
    Other(String),
}

impl GaugeValue {
    /// Wrap any displayable value by its string representation.
    pub fn display(v: impl fmt::Display) -> Self {
        GaugeValue::Other(v.to_string())
    }
}

impl fmt::Display for GaugeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaugeValue::Long(v) => write!(f, "{v}"),
            GaugeValue::Int(v) => write!(f, "{v}"),
            GaugeValue::Double(v) => write!(f, "{v}"),
            GaugeValue::Float(v) => write!(f, "{v}"),
            GaugeValue::Other(s) => f.write_str(s),
        }
    }
}

impl From<i64> for GaugeValue {
    fn from(v: i64) -> Self {
        GaugeValue::Long(v)
    }
}

impl From<i32> for GaugeValue {
    fn from(v: i32) -> Self {
        GaugeValue::Int(v)
    }
}

macro_rules! widen_to_long {
    ($($t:ty),*) => {$(
        impl From<$t> for GaugeValue {
            fn from(v: $t) -> Self {
                GaugeValue::Long(i64::from(v))
            }
        }
    )*};
}

widen_to_long!(i8, i16, u8, u16, u32);

// Values above i64::MAX keep their text and fail coercion.
macro_rules! fit_to_long {
    ($($t:ty),*) => {$(
        impl From<$t> for GaugeValue {
            fn from(v: $t) -> Self {
                i64::try_from(v)
                    .map(GaugeValue::Long)
                    .unwrap_or_else(|_| GaugeValue::display(v))
            }
        }
    )*};
}

fit_to_long!(u64, usize);

impl From<f64> for GaugeValue {
    fn from(v: f64) -> Self {
        GaugeValue::Double(v)
    }
}

impl From<f32> for GaugeValue {
    fn from(v: f32) -> Self {
        GaugeValue::Float(v)
    }
}

impl From<String> for GaugeValue {
    fn from(v: String) -> Self {
        GaugeValue::Other(v)
    }
}

impl From<&str> for GaugeValue {
    fn from(v: &str) -> Self {
        GaugeValue::Other(v.to_string())
    }
}

impl From<bool> for GaugeValue {
    fn from(v: bool) -> Self {
        GaugeValue::display(v)
    }
}

type ReadFn = Box<dyn Fn() -> Result<GaugeValue> + Send + Sync>;

/// Instantaneous value computed on every read.
pub struct Gauge {
    read: ReadFn,
}

impl Gauge {
    pub fn new<F, V>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<GaugeValue>,
    {
        Self::try_new(move || Ok(f()))
    }

    /// Gauge over a source that can fail to read.
    pub fn try_new<F, V>(f: F) -> Self
    where
        F: Fn() -> Result<V> + Send + Sync + 'static,
        V: Into<GaugeValue>,
    {
        Self {
            read: Box::new(move || f().map(Into::into)),
        }
    }

    pub fn value(&self) -> Result<GaugeValue> {
        (self.read)()
    }
}

impl fmt::Debug for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gauge").finish_non_exhaustive()
    }
}
