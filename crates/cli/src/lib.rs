//! GPA engine CLI library
//!
//! This library provides the command implementations and output formatting
//! behind the `gpa` binary. Commands read and write student record files
//! through `gpa-engine-common` and delegate every rule to
//! `gpa-engine-application`.

pub mod commands;
pub mod output;

pub use commands::CommandContext;
pub use output::{JsonFormatter, OutputFormat, PlainFormatter, Render, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
