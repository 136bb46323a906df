//! Common utilities and shared functionality for the GPA engine.
//!
//! This crate provides the ambient pieces used by every binary:
//! - Configuration management (academic policy limits, logging)
//! - Telemetry setup
//! - JSON serialization and student record files

pub mod config;
pub mod serialization;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AcademicPolicy, EngineConfig, TelemetryConfig};
pub use serialization::{load_student, read_student_record, save_student, write_student_record};
pub use telemetry::{init_from_config, init_tracing};

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
