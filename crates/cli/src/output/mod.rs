//! Output formatting for CLI

use anyhow::Result;
use serde::{Deserialize, Serialize};

mod formatters;
mod table;

pub use formatters::{JsonFormatter, PlainFormatter};
pub use table::TableFormatter;

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// Values the CLI knows how to print in every format
pub trait Render: Serialize {
    /// Render as a set of tables
    fn render_table(&self) -> String;

    /// Render as line-oriented text
    fn render_plain(&self) -> String;

    /// Render using the specified format
    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => JsonFormatter::format(self),
            OutputFormat::Table => Ok(self.render_table()),
            OutputFormat::Plain => Ok(self.render_plain()),
        }
    }
}

/// Color helpers
pub mod colors {
    use colored::*;

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn info(s: &str) -> ColoredString {
        s.blue()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Paint text with a classification band's color tag
    pub fn band(s: &str, tag: &str) -> ColoredString {
        match tag {
            "green" => s.green().bold(),
            "blue" => s.blue().bold(),
            "yellow" => s.yellow().bold(),
            "magenta" => s.magenta().bold(),
            "red" => s.red().bold(),
            _ => s.normal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Plain.to_string(), "plain");
    }

    #[test]
    fn test_output_format_serialization() {
        let serialized = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(serialized, "\"json\"");

        let deserialized: OutputFormat = serde_json::from_str("\"plain\"").unwrap();
        assert_eq!(deserialized, OutputFormat::Plain);
    }

    #[test]
    fn test_unknown_band_tag_is_uncolored() {
        colored::control::set_override(false);
        assert_eq!(colors::band("First Class", "teal").to_string(), "First Class");
    }
}
