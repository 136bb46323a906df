//! Course-level validators

use super::{fields, Validatable, ValidationResult};
use gpa_engine_domain::{Course, LetterGrade};

/// Course name must be 1-50 characters after trimming
pub fn validate_course_name(name: &str) -> ValidationResult {
    let mut result = ValidationResult::success();
    if let Some(problem) = Course::name_problem(name) {
        result.add_field_error(fields::COURSE_NAME, problem);
    }
    result
}

/// Units must be within the per-course range
pub fn validate_course_units(units: i64) -> ValidationResult {
    let mut result = ValidationResult::success();
    if units < i64::from(Course::MIN_UNITS) || units > i64::from(Course::MAX_UNITS) {
        result.add_field_error(
            fields::COURSE_UNITS,
            format!(
                "Units must be between {} and {} (got {})",
                Course::MIN_UNITS,
                Course::MAX_UNITS,
                units
            ),
        );
    }
    result
}

/// Grade must be one of A-F, any case
pub fn validate_letter_grade(grade: &str) -> ValidationResult {
    let mut result = ValidationResult::success();
    if LetterGrade::parse(grade).is_err() {
        result.add_field_error(
            fields::LETTER_GRADE,
            format!("Invalid grade '{}': must be one of A, B, C, D, E, F", grade.trim()),
        );
    }
    result
}

/// Check raw course input before a [`Course`] is built
pub fn validate_course_fields(name: &str, units: i64, grade: &str) -> ValidationResult {
    validate_course_name(name)
        .merged(validate_course_units(units))
        .merged(validate_letter_grade(grade))
}

/// Check an existing course
pub fn validate_course(course: &Course) -> ValidationResult {
    validate_course_fields(
        course.name(),
        i64::from(course.units()),
        course.letter_grade().as_str(),
    )
}

impl Validatable for Course {
    fn validate_all(&self) -> ValidationResult {
        validate_course(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_name_rules() {
        assert!(validate_course_name("CS101").successful);
        assert!(validate_course_name(&"n".repeat(50)).successful);
        assert!(!validate_course_name("").successful);
        assert!(!validate_course_name("   ").successful);

        let result = validate_course_name(&"n".repeat(51));
        assert!(result.has_field_error(fields::COURSE_NAME));
    }

    #[test]
    fn test_course_unit_rules() {
        assert!(validate_course_units(1).successful);
        assert!(validate_course_units(6).successful);
        assert!(!validate_course_units(0).successful);
        assert!(!validate_course_units(7).successful);
        assert!(!validate_course_units(-3).successful);
    }

    #[test]
    fn test_letter_grade_rules() {
        for grade in ["A", "b", " c ", "D", "e", "F"] {
            assert!(validate_letter_grade(grade).successful, "{}", grade);
        }
        assert!(!validate_letter_grade("G").successful);
        assert!(!validate_letter_grade("").successful);
    }

    #[test]
    fn test_course_fields_collects_all_errors() {
        let result = validate_course_fields("", 10, "Z");
        assert!(!result.successful);
        assert_eq!(result.error_count(), 3);
        assert!(result.has_field_error(fields::COURSE_NAME));
        assert!(result.has_field_error(fields::COURSE_UNITS));
        assert!(result.has_field_error(fields::LETTER_GRADE));
    }

    #[test]
    fn test_constructed_course_validates() {
        let course = Course::new("CS101", 3, "A").unwrap();
        assert!(course.validate_all().successful);
    }

    #[test]
    fn test_unchecked_course_reports_units() {
        let course = Course::from_raw_unchecked("CS101", 8, LetterGrade::A);
        let result = course.validate_all();
        assert!(result.has_field_error(fields::COURSE_UNITS));
    }
}
