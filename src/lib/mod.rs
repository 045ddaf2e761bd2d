//! Shared helpers used across launcher modules.
pub mod errors;
pub mod paths;
pub mod telemetry;
