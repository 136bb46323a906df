//! Tests for validation and academic-policy constraints
//!
//! Tests semester bounds, duplicate detection, the consistency rule and
//! the merge behavior of validation results.

use gpa_engine_application::validation::*;
use gpa_engine_common::AcademicPolicy;
use gpa_engine_domain::{Course, LetterGrade};
use gpa_engine_testing::builders::*;
use gpa_engine_testing::fixtures::*;

fn semester(units: &[u32]) -> gpa_engine_domain::Student {
    units
        .iter()
        .enumerate()
        .fold(StudentBuilder::new(), |builder, (i, &u)| {
            builder.with(&format!("Course {}", i), u, LetterGrade::C)
        })
        .build()
}

// ============================================================================
// Semester Bounds Tests
// ============================================================================

#[test]
fn test_semester_bounds() {
    let validator = ConstraintValidator::new(AcademicPolicy::default());

    let under = validator.validate_semester_units(&semester(&[6, 6, 5]));
    assert!(under.has_field_error(fields::TOTAL_SEMESTER_UNITS));

    for units in [&[6, 6, 6][..], &[6, 6, 6, 6][..]] {
        let result = validator.validate_semester_units(&semester(units));
        assert!(result.successful);
        assert!(!result.success_messages.is_empty());
    }

    let over = validator.validate_semester_units(&semester(&[6, 6, 6, 6, 1]));
    assert!(over.has_field_error(fields::TOTAL_SEMESTER_UNITS));
}

// ============================================================================
// Duplicate Detection Tests
// ============================================================================

#[test]
fn test_duplicate_candidate_name() {
    let student = StudentBuilder::new()
        .with("calculus ", 3, LetterGrade::A)
        .build();
    let validator = ConstraintValidator::default();

    let result = validator.check_duplicate_name("Calculus", &student);
    assert!(result.has_field_error(fields::DUPLICATE_COURSE));

    let addition = validator.evaluate_course_addition(&student, &create_test_course_with("Calculus", 3, LetterGrade::B));
    assert!(!is_addition_allowed(&addition));
}

// ============================================================================
// Consistency Tests
// ============================================================================

#[test]
fn test_consistency_rule() {
    assert!(!validate_academic_consistency(3.0, 0).successful);
    assert!(validate_academic_consistency(0.0, 0).successful);
    assert!(create_inconsistent_student().validate_all().has_field_error(fields::ACADEMIC_CONSISTENCY));
}

#[test]
fn test_aggregate_blocking_rules() {
    let validator = ConstraintValidator::default();

    let light = validator.validate_all_constraints(&semester(&[3]));
    assert!(!light.successful);
    assert!(is_calculation_allowed(&light));

    let bad_units = StudentBuilder::new()
        .with_courses(create_mixed_grade_courses())
        .with_course(CourseBuilder::new().with_name("Lab").with_units(7).build_unchecked())
        .build();
    let result = validator.validate_all_constraints(&bad_units);
    assert!(!is_calculation_allowed(&result));
}

// ============================================================================
// Merge Tests
// ============================================================================

#[test]
fn test_merge_empty_is_identity() {
    let result = validate_course_fields("", 9, "Q");
    let before = result.clone();

    assert_eq!(result.merged(ValidationResult::success()), before);
}

#[test]
fn test_merge_equivalent_clone_does_not_double() {
    let result = ConstraintValidator::default().validate_all_constraints(&semester(&[3, 3]));
    let count = result.error_count();

    let merged = result.clone().merged(result.clone());
    assert_eq!(merged.error_count(), count);
    assert_eq!(merged, result);
}

#[test]
fn test_merge_overwrites_field_message() {
    let first = ValidationResult::field_error(fields::COURSE_UNITS, "first");
    let second = ValidationResult::field_error(fields::COURSE_UNITS, "second");

    let merged = first.merged(second);
    assert_eq!(merged.get_field_error(fields::COURSE_UNITS), Some("second"));
    assert_eq!(merged.error_count(), 1);
}

#[test]
fn test_course_validation_reports_all_fields() {
    let course = Course::from_raw_unchecked("", 0, LetterGrade::F);
    let result = course.validate_all();
    assert!(result.has_field_error(fields::COURSE_NAME));
    assert!(result.has_field_error(fields::COURSE_UNITS));
    assert!(!result.has_field_error(fields::LETTER_GRADE));
}
