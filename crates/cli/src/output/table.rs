//! Table formatting utilities

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, *};
use gpa_engine_application::ValidationResult;
use gpa_engine_domain::Course;

/// Table formatter
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new table with default styling
    pub fn new() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    /// Create a key-value table
    pub fn key_value(items: Vec<(&str, String)>) -> String {
        let mut table = Self::new();

        for (key, value) in items {
            table.add_row(vec![Cell::new(key).add_attribute(Attribute::Bold), Cell::new(value)]);
        }

        table.to_string()
    }

    /// One row per course with its credit points
    pub fn courses(courses: &[Course]) -> String {
        let mut table = Self::new();
        table.set_header(vec!["#", "Course", "Units", "Grade", "Points"]);

        for (index, course) in courses.iter().enumerate() {
            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(course.name()),
                Cell::new(course.units()).set_alignment(CellAlignment::Right),
                Cell::new(course.letter_grade()),
                Cell::new(format!("{:.2}", course.credit_points())).set_alignment(CellAlignment::Right),
            ]);
        }

        table.to_string()
    }

    /// Field errors, general errors and notes in one table
    pub fn validation(result: &ValidationResult) -> String {
        let mut table = Self::new();
        table.set_header(vec!["", "Check", "Message"]);

        for (field, message) in &result.field_errors {
            table.add_row(vec![
                Cell::new("✗").fg(Color::Red),
                Cell::new(field),
                Cell::new(message),
            ]);
        }
        for message in &result.general_errors {
            table.add_row(vec![Cell::new("✗").fg(Color::Red), Cell::new("-"), Cell::new(message)]);
        }
        for message in &result.success_messages {
            table.add_row(vec![Cell::new("✓").fg(Color::Green), Cell::new("-"), Cell::new(message)]);
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpa_engine_testing::fixtures::create_mixed_grade_courses;

    #[test]
    fn test_course_table() {
        let output = TableFormatter::courses(&create_mixed_grade_courses());
        assert!(output.contains("Course 1"));
        assert!(output.contains("15.00"));
        assert!(output.contains("Points"));
    }

    #[test]
    fn test_validation_table() {
        let mut result = ValidationResult::field_error("Duplicate Course", "Calculus twice");
        result.add_success("Load within range");

        let output = TableFormatter::validation(&result);
        assert!(output.contains("Duplicate Course"));
        assert!(output.contains("Load within range"));
    }

    #[test]
    fn test_key_value_table() {
        let output = TableFormatter::key_value(vec![("CGPA", "4.08".to_string())]);
        assert!(output.contains("CGPA"));
        assert!(output.contains("4.08"));
    }
}
