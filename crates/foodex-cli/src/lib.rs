//! CLI library components for the classification code checker.

pub mod input;
pub mod logging;
