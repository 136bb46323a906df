//! Student-level validators

use super::{fields, Validatable, ValidationResult};
use gpa_engine_domain::Student;

/// Prior CGPA must be on the five-point scale
pub fn validate_current_cgpa(cgpa: f64) -> ValidationResult {
    let mut result = ValidationResult::success();
    if !cgpa.is_finite() || !(Student::MIN_CGPA..=Student::MAX_CGPA).contains(&cgpa) {
        result.add_field_error(
            fields::CURRENT_CGPA,
            format!("CGPA must be between 0.00 and 5.00 (got {})", cgpa),
        );
    }
    result
}

/// Prior unit count cannot be negative
pub fn validate_cumulative_units(units: i64) -> ValidationResult {
    let mut result = ValidationResult::success();
    if units < 0 {
        result.add_field_error(
            fields::CUMULATIVE_UNITS,
            format!("Cumulative units cannot be negative (got {})", units),
        );
    }
    result
}

/// A recorded CGPA needs cumulative units behind it
pub fn validate_academic_consistency(cgpa: f64, cumulative_units: i64) -> ValidationResult {
    let mut result = ValidationResult::success();
    if cgpa > 0.0 && cumulative_units <= 0 {
        result.add_field_error(
            fields::ACADEMIC_CONSISTENCY,
            format!(
                "A CGPA of {:.2} requires cumulative units greater than zero",
                cgpa
            ),
        );
    }
    result
}

/// Run every student-level check on raw values
pub fn validate_student_fields(cgpa: f64, cumulative_units: i64) -> ValidationResult {
    validate_current_cgpa(cgpa)
        .merged(validate_cumulative_units(cumulative_units))
        .merged(validate_academic_consistency(cgpa, cumulative_units))
}

/// Run every student-level check
pub fn validate_student_record(student: &Student) -> ValidationResult {
    validate_student_fields(
        student.current_cgpa(),
        i64::from(student.cumulative_units()),
    )
}

impl Validatable for Student {
    fn validate_all(&self) -> ValidationResult {
        validate_student_record(self)
    }
}
