//! Validation result accumulator.
//!
//! Rule checkers never fail for expected policy violations; they describe
//! them in a [`ValidationResult`] so a caller can show every problem at once.
//! Results from independent checkers are combined with [`ValidationResult::merge`].

use crate::errors::DomainError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Outcome of one or more validation checks
///
/// Starts out successful and flips to failed on the first error. Field
/// errors hold a single message per key; a later error for the same key
/// replaces the earlier one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether no errors have been recorded
    pub successful: bool,

    /// Errors keyed by field or rule category
    ///
    /// Examples: "Course Units", "Duplicate Course", "Total Semester Units"
    pub field_errors: IndexMap<String, String>,

    /// Errors not tied to a single field
    pub general_errors: Vec<String>,

    /// Informational notes from checks that passed
    pub success_messages: Vec<String>,
}

impl ValidationResult {
    /// Create a new, clean validation result
    pub fn success() -> Self {
        Self {
            successful: true,
            field_errors: IndexMap::new(),
            general_errors: Vec::new(),
            success_messages: Vec::new(),
        }
    }

    /// Create a failed validation result with a single field error
    pub fn field_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut result = Self::success();
        result.add_field_error(field, message);
        result
    }

    /// Record an informational note
    pub fn add_success(&mut self, message: impl Into<String>) {
        self.success_messages.push(message.into());
    }

    /// Record an error against a field, replacing any earlier one
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.successful = false;
        self.field_errors.insert(field.into(), message.into());
    }

    /// Record an error that is not tied to a field
    pub fn add_general_error(&mut self, message: impl Into<String>) {
        self.successful = false;
        self.general_errors.push(message.into());
    }

    /// Merge another validation result into this one
    ///
    /// Field errors from `other` overwrite matching keys. Messages already
    /// present are not repeated, so merging an equivalent result is a no-op.
    pub fn merge(&mut self, other: ValidationResult) {
        self.successful = self.successful && other.successful;

        for (field, message) in other.field_errors {
            self.field_errors.insert(field, message);
        }

        for message in other.general_errors {
            if !self.general_errors.contains(&message) {
                self.general_errors.push(message);
            }
        }

        for message in other.success_messages {
            if !self.success_messages.contains(&message) {
                self.success_messages.push(message);
            }
        }
    }

    /// Consume both results and return the merged one
    pub fn merged(mut self, other: ValidationResult) -> Self {
        self.merge(other);
        self
    }

    /// Reset to the clean state
    pub fn clear(&mut self) {
        *self = Self::success();
    }

    /// Message recorded for a field, if any
    pub fn get_field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// Whether a field has an error recorded
    pub fn has_field_error(&self, field: &str) -> bool {
        self.field_errors.contains_key(field)
    }

    /// Total number of recorded errors
    pub fn error_count(&self) -> usize {
        self.field_errors.len() + self.general_errors.len()
    }

    /// Every error as display text, field errors first
    pub fn all_errors(&self) -> Vec<String> {
        self.field_errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .chain(self.general_errors.iter().cloned())
            .collect()
    }

    /// Ensure validation passed, returning error if not
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        if self.successful {
            Ok(())
        } else {
            Err(DomainError::Validation(self.all_errors()))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        iter.into_iter().fold(Self::success(), Self::merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result_success() {
        let result = ValidationResult::success();
        assert!(result.successful);
        assert!(result.field_errors.is_empty());
        assert!(result.general_errors.is_empty());
        assert!(result.success_messages.is_empty());
        assert!(result.ensure_valid().is_ok());
    }

    #[test]
    fn test_success_note_keeps_result_successful() {
        let mut result = ValidationResult::success();
        result.add_success("Looks good");
        assert!(result.successful);
        assert_eq!(result.success_messages, vec!["Looks good".to_string()]);
    }

    #[test]
    fn test_field_error_flips_state_and_last_write_wins() {
        let mut result = ValidationResult::success();
        result.add_field_error("Course Units", "first");
        result.add_field_error("Course Units", "second");

        assert!(!result.successful);
        assert_eq!(result.field_errors.len(), 1);
        assert_eq!(result.get_field_error("Course Units"), Some("second"));
    }

    #[test]
    fn test_general_error_flips_state() {
        let mut result = ValidationResult::success();
        result.add_general_error("Something is off");
        assert!(!result.successful);
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_merge_ands_success_and_overwrites_keys() {
        let mut first = ValidationResult::success();
        first.add_field_error("Course Name", "too long");
        first.add_success("units ok");

        let mut second = ValidationResult::success();
        second.add_field_error("Course Name", "empty");
        second.add_general_error("shortfall");

        first.merge(second);

        assert!(!first.successful);
        assert_eq!(first.get_field_error("Course Name"), Some("empty"));
        assert_eq!(first.general_errors, vec!["shortfall".to_string()]);
        assert_eq!(first.success_messages, vec!["units ok".to_string()]);
    }

    #[test]
    fn test_merge_clean_into_failed_stays_failed() {
        let mut failed = ValidationResult::field_error("Letter Grade", "bad");
        failed.merge(ValidationResult::success());
        assert!(!failed.successful);
    }

    #[test]
    fn test_merge_empty_is_identity() {
        let mut result = ValidationResult::success();
        result.add_field_error("Course Units", "bad");
        result.add_general_error("general");
        result.add_success("note");
        let before = result.clone();

        result.merge(ValidationResult::success());
        assert_eq!(result, before);
    }

    #[test]
    fn test_merge_equivalent_clone_does_not_grow() {
        let mut result = ValidationResult::success();
        result.add_field_error("Duplicate Course", "dup");
        result.add_general_error("general");
        result.add_success("note");
        let before = result.clone();

        result.merge(before.clone());
        assert_eq!(result, before);
        assert_eq!(result.error_count(), 2);
    }

    #[test]
    fn test_clear_resets_to_clean() {
        let mut result = ValidationResult::field_error("Current CGPA", "bad");
        result.add_success("note");
        result.clear();
        assert_eq!(result, ValidationResult::success());
    }

    #[test]
    fn test_all_errors_and_ensure_valid() {
        let mut result = ValidationResult::success();
        result.add_general_error("needs more units");
        result.add_field_error("Course Units", "must be 1-6");

        assert_eq!(
            result.all_errors(),
            vec![
                "Course Units: must be 1-6".to_string(),
                "needs more units".to_string()
            ]
        );
        assert!(matches!(
            result.ensure_valid(),
            Err(DomainError::Validation(messages)) if messages.len() == 2
        ));
    }

    #[test]
    fn test_collect_merges_all() {
        let results = vec![
            ValidationResult::success(),
            ValidationResult::field_error("A", "a"),
            ValidationResult::field_error("B", "b"),
        ];
        let merged: ValidationResult = results.into_iter().collect();
        assert!(!merged.successful);
        assert_eq!(merged.field_errors.len(), 2);
    }

    #[test]
    fn test_serialization() {
        let mut result = ValidationResult::success();
        result.add_field_error("field", "error message");
        result.add_success("note");

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"fieldErrors\""));
        let deserialized: ValidationResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result, deserialized);
    }
}
