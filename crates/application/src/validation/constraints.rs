//! Academic-policy constraint checks over a student's full course set.
//!
//! Load and cumulative-unit warnings are advisory. Only invalid course
//! units and duplicate course names block calculation; see
//! [`is_calculation_allowed`].

use super::{fields, validate_course, validate_course_units, ValidationResult};
use gpa_engine_common::AcademicPolicy;
use gpa_engine_domain::{normalize_course_name, Course, Student};
use tracing::{debug, instrument};

/// Policy-driven constraint checker
#[derive(Debug, Clone, Default)]
pub struct ConstraintValidator {
    policy: AcademicPolicy,
}

impl ConstraintValidator {
    /// Create a checker for the given policy
    pub fn new(policy: AcademicPolicy) -> Self {
        Self { policy }
    }

    /// Policy in use
    pub fn policy(&self) -> &AcademicPolicy {
        &self.policy
    }

    /// Semester load must fall within the policy's unit range
    pub fn validate_semester_units(&self, student: &Student) -> ValidationResult {
        let mut result = ValidationResult::success();
        let total = student.total_units();
        let min = self.policy.min_semester_units;
        let max = self.policy.max_semester_units;

        if self.policy.is_within_semester_bounds(total) {
            result.add_success(format!(
                "Total units ({}) is within the allowed range of {}-{}.",
                total, min, max
            ));
        } else if total < min {
            result.add_field_error(
                fields::TOTAL_SEMESTER_UNITS,
                format!(
                    "Total units ({}) is below the minimum of {}. Add {} more unit(s).",
                    total,
                    min,
                    min - total
                ),
            );
        } else {
            result.add_field_error(
                fields::TOTAL_SEMESTER_UNITS,
                format!(
                    "Total units ({}) exceeds the maximum of {} by {} unit(s).",
                    total,
                    max,
                    total - max
                ),
            );
        }

        result
    }

    /// No two courses may share a trimmed, case-insensitive name
    pub fn check_duplicate_courses(&self, student: &Student) -> ValidationResult {
        check_duplicate_names(student.courses().iter().map(Course::name))
    }

    /// A candidate name must not match an existing course
    pub fn check_duplicate_name(&self, candidate: &str, student: &Student) -> ValidationResult {
        let mut result = ValidationResult::success();
        let wanted = normalize_course_name(candidate);

        if let Some(existing) = student
            .courses()
            .iter()
            .find(|course| course.normalized_name() == wanted)
        {
            result.add_field_error(
                fields::DUPLICATE_COURSE,
                format!(
                    "A course named '{}' already exists as '{}'",
                    candidate.trim(),
                    existing.name()
                ),
            );
        }

        result
    }

    /// Project the semester load after adding one course
    ///
    /// Exceeding the maximum produces an advisory field error; the addition
    /// may still go ahead. Staying below the minimum is reported as a
    /// general error describing the remaining shortfall.
    pub fn validate_course_addition(&self, student: &Student, course: &Course) -> ValidationResult {
        let mut result = ValidationResult::success();
        let projected = student.total_units() + course.units();
        let min = self.policy.min_semester_units;
        let max = self.policy.max_semester_units;

        if projected > max {
            result.add_field_error(
                fields::COURSE_LOAD_WARNING,
                format!(
                    "Adding '{}' brings the total to {} units, {} over the maximum of {}.",
                    course.name(),
                    projected,
                    projected - max,
                    max
                ),
            );
        } else if projected < min {
            result.add_general_error(format!(
                "After adding '{}' the total is {} units; {} more unit(s) needed to reach the minimum of {}.",
                course.name(),
                projected,
                min - projected,
                min
            ));
        } else {
            result.add_success(format!(
                "Adding '{}' brings the total to {} units, within the allowed range.",
                course.name(),
                projected
            ));
        }

        result
    }

    /// Everything checked when a single course is added
    ///
    /// Combines the course's own field checks, the duplicate-name check and
    /// the load projection. Use [`is_addition_allowed`] to decide whether to
    /// proceed.
    pub fn evaluate_course_addition(&self, student: &Student, course: &Course) -> ValidationResult {
        validate_course(course)
            .merged(self.check_duplicate_name(course.name(), student))
            .merged(self.validate_course_addition(student, course))
    }

    /// A carried-over CGPA needs enough cumulative units to be meaningful
    pub fn validate_cumulative_units_sufficiency(&self, student: &Student) -> ValidationResult {
        let mut result = ValidationResult::success();
        if !student.has_previous_record() {
            return result;
        }

        let units = student.cumulative_units();
        let threshold = self.policy.min_cumulative_units;
        if units < threshold {
            result.add_field_error(
                fields::CGPA_CALCULATION_WARNING,
                format!(
                    "Only {} cumulative unit(s) recorded; at least {} are recommended. CGPA results may be imprecise.",
                    units, threshold
                ),
            );
        } else {
            result.add_success(format!(
                "Cumulative record of {} units is sufficient for CGPA calculation.",
                units
            ));
        }

        result
    }

    /// Per-course unit range, reported under a single key
    pub fn validate_course_units(&self, student: &Student) -> ValidationResult {
        let mut result = ValidationResult::success();
        for course in student.courses() {
            if !validate_course_units(i64::from(course.units())).successful {
                result.add_field_error(
                    fields::COURSE_UNITS,
                    format!(
                        "Course '{}' has {} units; units must be between {} and {}",
                        course.name(),
                        course.units(),
                        Course::MIN_UNITS,
                        Course::MAX_UNITS
                    ),
                );
            }
        }
        result
    }

    /// Run every constraint check over a student
    #[instrument(skip_all, fields(courses = student.course_count()))]
    pub fn validate_all_constraints(&self, student: &Student) -> ValidationResult {
        let result = self
            .validate_semester_units(student)
            .merged(self.validate_course_units(student))
            .merged(self.check_duplicate_courses(student))
            .merged(self.validate_cumulative_units_sufficiency(student));

        debug!(
            successful = result.successful,
            errors = result.error_count(),
            "Constraint validation finished"
        );
        result
    }
}

/// Report every name that repeats an earlier one, trimmed and case-insensitive
pub fn check_duplicate_names<'a, I>(names: I) -> ValidationResult
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result = ValidationResult::success();
    let names: Vec<&str> = names.into_iter().collect();

    for (i, first) in names.iter().enumerate() {
        let normalized = normalize_course_name(first);
        for second in &names[i + 1..] {
            if normalize_course_name(second) == normalized {
                debug!(course = first.trim(), "Duplicate course detected");
                result.add_field_error(
                    fields::DUPLICATE_COURSE,
                    format!("Course '{}' appears more than once", second.trim()),
                );
            }
        }
    }

    result
}

/// Whether GPA calculation may proceed given a validation result
///
/// Load and cumulative-unit warnings do not block; invalid units and
/// duplicate names do.
pub fn is_calculation_allowed(result: &ValidationResult) -> bool {
    !result.has_field_error(fields::COURSE_UNITS) && !result.has_field_error(fields::DUPLICATE_COURSE)
}

/// Whether a course addition may proceed given its evaluation
///
/// The load warning is advisory; duplicates and invalid fields are not.
pub fn is_addition_allowed(result: &ValidationResult) -> bool {
    [
        fields::COURSE_NAME,
        fields::COURSE_UNITS,
        fields::LETTER_GRADE,
        fields::DUPLICATE_COURSE,
    ]
    .iter()
    .all(|field| !result.has_field_error(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpa_engine_domain::LetterGrade;

    fn student_with_units(units: &[u32]) -> Student {
        let mut student = Student::new();
        for (i, &u) in units.iter().enumerate() {
            student
                .add_course(Course::new(format!("Course {}", i), u, "B").unwrap())
                .unwrap();
        }
        student
    }

    fn validator() -> ConstraintValidator {
        ConstraintValidator::default()
    }

    #[test]
    fn test_semester_units_below_minimum() {
        let result = validator().validate_semester_units(&student_with_units(&[6, 6, 5]));
        assert!(!result.successful);
        let message = result.get_field_error(fields::TOTAL_SEMESTER_UNITS).unwrap();
        assert!(message.contains("(17)"));
        assert!(message.contains("Add 1 more"));
    }

    #[test]
    fn test_semester_units_at_bounds() {
        for units in [&[6, 6, 6][..], &[6, 6, 6, 6][..]] {
            let result = validator().validate_semester_units(&student_with_units(units));
            assert!(result.successful);
            assert_eq!(result.success_messages.len(), 1);
        }
    }

    #[test]
    fn test_semester_units_above_maximum() {
        let result = validator().validate_semester_units(&student_with_units(&[6, 6, 6, 6, 1]));
        let message = result.get_field_error(fields::TOTAL_SEMESTER_UNITS).unwrap();
        assert!(message.contains("(25)"));
        assert!(message.contains("by 1 unit"));
    }

    #[test]
    fn test_custom_policy_bounds() {
        let validator = ConstraintValidator::new(AcademicPolicy {
            min_semester_units: 10,
            max_semester_units: 12,
            min_cumulative_units: 24,
        });
        assert!(validator.validate_semester_units(&student_with_units(&[6, 5])).successful);
        assert!(!validator.validate_semester_units(&student_with_units(&[6, 6, 1])).successful);
    }

    #[test]
    fn test_duplicate_name_is_trimmed_and_case_insensitive() {
        let mut student = Student::new();
        student.add_course(Course::new("calculus ", 3, "A").unwrap()).unwrap();

        let result = validator().check_duplicate_name("Calculus", &student);
        assert!(result.has_field_error(fields::DUPLICATE_COURSE));

        assert!(validator().check_duplicate_name("Physics", &student).successful);
    }

    #[test]
    fn test_distinct_courses_pass_duplicate_check() {
        let student = student_with_units(&[3, 3]);
        assert!(validator().check_duplicate_courses(&student).successful);
    }

    #[test]
    fn test_duplicate_names_are_trimmed_and_case_insensitive() {
        let result = check_duplicate_names(["Calculus", "Physics", "calculus "]);
        assert!(!result.successful);
        assert_eq!(
            result.get_field_error(fields::DUPLICATE_COURSE),
            Some("Course 'calculus' appears more than once")
        );
        assert!(!is_calculation_allowed(&result));

        assert!(check_duplicate_names(["Calculus", "Physics"]).successful);
        assert!(check_duplicate_names(std::iter::empty()).successful);
    }

    #[test]
    fn test_course_addition_projection() {
        let student = student_with_units(&[6, 6, 6, 4]);

        let over = Course::new("Extra", 3, "A").unwrap();
        let result = validator().validate_course_addition(&student, &over);
        assert!(result.has_field_error(fields::COURSE_LOAD_WARNING));
        assert!(result.general_errors.is_empty());

        let fits = Course::new("Extra", 2, "A").unwrap();
        let result = validator().validate_course_addition(&student, &fits);
        assert!(result.successful);
        assert_eq!(result.success_messages.len(), 1);

        let small = student_with_units(&[3]);
        let result = validator().validate_course_addition(&small, &fits);
        assert!(result.field_errors.is_empty());
        assert_eq!(result.general_errors.len(), 1);
        assert!(result.general_errors[0].contains("13 more unit(s)"));
    }

    #[test]
    fn test_addition_warning_is_advisory() {
        let student = student_with_units(&[6, 6, 6, 6]);
        let course = Course::new("Extra", 2, "A").unwrap();
        let result = validator().evaluate_course_addition(&student, &course);
        assert!(!result.successful);
        assert!(is_addition_allowed(&result));
    }

    #[test]
    fn test_addition_duplicate_blocks() {
        let student = student_with_units(&[6, 6]);
        let course = Course::new(" course 0", 2, "A").unwrap();
        let result = validator().evaluate_course_addition(&student, &course);
        assert!(!is_addition_allowed(&result));
    }

    #[test]
    fn test_cumulative_units_sufficiency() {
        let thin = Student::with_record(4.0, 12).unwrap();
        let result = validator().validate_cumulative_units_sufficiency(&thin);
        assert!(result.has_field_error(fields::CGPA_CALCULATION_WARNING));

        let enough = Student::with_record(4.0, 24).unwrap();
        let result = validator().validate_cumulative_units_sufficiency(&enough);
        assert!(result.successful);
        assert_eq!(result.success_messages.len(), 1);

        let fresh = Student::new();
        let result = validator().validate_cumulative_units_sufficiency(&fresh);
        assert!(result.successful);
        assert!(result.success_messages.is_empty());
    }

    #[test]
    fn test_aggregate_warnings_do_not_block() {
        let mut student = student_with_units(&[3, 3]);
        student.set_current_cgpa(3.5).unwrap();
        student.set_cumulative_units(10);

        let result = validator().validate_all_constraints(&student);
        assert!(!result.successful);
        assert!(result.has_field_error(fields::TOTAL_SEMESTER_UNITS));
        assert!(result.has_field_error(fields::CGPA_CALCULATION_WARNING));
        assert!(is_calculation_allowed(&result));
    }

    #[test]
    fn test_aggregate_invalid_units_block() {
        let mut student = student_with_units(&[6, 6, 6]);
        student
            .add_course(Course::from_raw_unchecked("Lab", 9, LetterGrade::A))
            .unwrap();

        let result = validator().validate_all_constraints(&student);
        assert!(result.has_field_error(fields::COURSE_UNITS));
        assert!(!is_calculation_allowed(&result));
    }

    #[test]
    fn test_calculation_blocked_by_duplicate_key() {
        let result = ValidationResult::field_error(fields::DUPLICATE_COURSE, "dup");
        assert!(!is_calculation_allowed(&result));
    }

    #[test]
    fn test_clean_aggregate() {
        let mut student = student_with_units(&[6, 6, 6]);
        student.set_current_cgpa(4.2).unwrap();
        student.set_cumulative_units(60);

        let result = validator().validate_all_constraints(&student);
        assert!(result.successful);
        assert_eq!(result.success_messages.len(), 2);
        assert!(is_calculation_allowed(&result));
    }
}
