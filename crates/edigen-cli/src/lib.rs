//! CLI library components for the EDI test-artifact generator.

pub mod logging;
