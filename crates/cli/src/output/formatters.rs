//! Output formatters

use anyhow::Result;
use gpa_engine_application::ValidationResult;
use serde::Serialize;

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a value as pretty JSON
    pub fn format<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Plain text formatter
pub struct PlainFormatter;

impl PlainFormatter {
    /// Aligned `key: value` lines
    pub fn key_value(items: &[(&str, String)]) -> String {
        let width = items.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        items
            .iter()
            .map(|(key, value)| format!("{:<width$}  {}", format!("{}:", key), value, width = width + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Errors first, then notes, one per line
    pub fn validation(result: &ValidationResult) -> String {
        let mut lines = Vec::new();
        lines.push(if result.successful {
            "Validation passed".to_string()
        } else {
            format!("Validation found {} problem(s)", result.error_count())
        });
        for error in result.all_errors() {
            lines.push(format!("  ✗ {}", error));
        }
        for note in &result.success_messages {
            lines.push(format!("  ✓ {}", note));
        }
        lines.join("\n")
    }
}
