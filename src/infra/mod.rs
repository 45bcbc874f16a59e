//! Process-level plumbing: telemetry installation and its errors.

pub mod error;
pub mod telemetry;

pub use error::InfraError;
