//! Validation Framework
//!
//! Independent rule checkers for courses, students and academic-policy
//! constraints. Each checker returns an owned [`ValidationResult`]; callers
//! combine the ones they need with [`ValidationResult::merge`].

mod constraints;
mod course;
mod student;

pub use constraints::*;
pub use course::*;
pub use student::*;

pub use gpa_engine_domain::ValidationResult;

use gpa_engine_domain::{LetterGrade, StudentRecord};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Field keys used in validation results
pub mod fields {
    /// Course name length
    pub const COURSE_NAME: &str = "Course Name";
    /// Course unit range
    pub const COURSE_UNITS: &str = "Course Units";
    /// Letter grade membership
    pub const LETTER_GRADE: &str = "Letter Grade";
    /// Prior CGPA range
    pub const CURRENT_CGPA: &str = "Current CGPA";
    /// Prior unit count
    pub const CUMULATIVE_UNITS: &str = "Cumulative Units";
    /// CGPA recorded without units behind it
    pub const ACADEMIC_CONSISTENCY: &str = "Academic Data Consistency";
    /// Semester load outside the allowed range
    pub const TOTAL_SEMESTER_UNITS: &str = "Total Semester Units";
    /// Two courses share a normalized name
    pub const DUPLICATE_COURSE: &str = "Duplicate Course";
    /// Adding a course would overload the semester
    pub const COURSE_LOAD_WARNING: &str = "Course Load Warning";
    /// Too few cumulative units for a precise CGPA
    pub const CGPA_CALCULATION_WARNING: &str = "CGPA Calculation Warning";
}

/// Trait for validatable types
pub trait Validatable {
    /// Validate the type and return a result
    fn validate_all(&self) -> ValidationResult;
}

/// Extension to convert validator errors to our format
pub trait ValidatorExt {
    /// Run derive-based rules and collect their messages
    fn to_validation_result(&self) -> ValidationResult;
}

impl<T: Validate> ValidatorExt for T {
    fn to_validation_result(&self) -> ValidationResult {
        let mut result = ValidationResult::success();
        if let Err(errors) = self.validate() {
            collect_validator_errors(&errors, "", &mut result);
        }
        result
    }
}

fn collect_validator_errors(errors: &ValidationErrors, prefix: &str, result: &mut ValidationResult) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    result.add_field_error(path.clone(), message);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validator_errors(nested, &path, result);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_validator_errors(nested, &format!("{}[{}]", path, index), result);
                }
            }
        }
    }
}

/// Check a persisted record before it is turned into a student
///
/// Reports every problem in the file at once: derive-based field rules,
/// unknown letter grades, and duplicate course names.
pub fn validate_student_record_file(record: &StudentRecord) -> ValidationResult {
    let mut result = record.to_validation_result();

    for (index, course) in record.courses.iter().enumerate() {
        if LetterGrade::parse(&course.letter_grade).is_err() {
            result.add_field_error(
                format!("courses[{}].letter_grade", index),
                format!(
                    "Invalid letter grade '{}': must be one of A, B, C, D, E, F",
                    course.letter_grade
                ),
            );
        }
    }

    result.merge(check_duplicate_names(
        record.courses.iter().map(|course| course.course_name.as_str()),
    ));
    result
}
