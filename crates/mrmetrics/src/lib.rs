//! Top-level facade crate for mrmetrics.
//!
//! Re-exports the core types and the reporter so users can depend on a single crate.

pub mod core {
    pub use mrmetrics_core::*;
}

pub mod reporter {
    pub use mrmetrics_reporter::*;
}
