//! Semester report - one pass over a student's data
//!
//! Runs the student and constraint validators, then calculates and
//! classifies only when nothing blocking was found.

use crate::calculation::{student_cgpa, total_credit_points, CgpaBreakdown};
use crate::classification::{summarize, ClassificationSummary};
use crate::validation::{
    is_calculation_allowed, validate_student_record, ConstraintValidator, ValidationResult,
};
use crate::ApplicationResult;
use gpa_engine_common::AcademicPolicy;
use gpa_engine_domain::Student;
use rand::Rng;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Validation, calculation and classification for one semester
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterReport {
    /// Student-level and constraint findings combined
    pub validation: ValidationResult,
    /// Whether the calculation fields below were filled in
    pub calculation_allowed: bool,
    /// Units taken this semester
    pub total_units: u32,
    /// Number of courses this semester
    pub course_count: usize,
    /// Credit points earned this semester
    pub total_credit_points: Option<f64>,
    /// GPA for this semester alone
    pub semester_gpa: Option<f64>,
    /// Cumulative GPA with its intermediate totals
    pub cgpa: Option<CgpaBreakdown>,
    /// Standing of the resulting CGPA
    pub classification: Option<ClassificationSummary>,
}

impl SemesterReport {
    /// Resulting CGPA, if it was calculated
    pub fn cgpa_value(&self) -> Option<f64> {
        self.cgpa.map(|breakdown| breakdown.cgpa)
    }
}

/// Validate a student and, when allowed, calculate and classify
///
/// Advisory findings such as a light semester load are reported but do not
/// stop the calculation. A student with an inconsistent prior record or no
/// courses gets a report without calculation fields.
#[instrument(skip_all, fields(courses = student.course_count()))]
pub fn build_semester_report<R: Rng + ?Sized>(
    student: &Student,
    policy: &AcademicPolicy,
    rng: &mut R,
) -> ApplicationResult<SemesterReport> {
    let student_checks = validate_student_record(student);
    let constraints = ConstraintValidator::new(policy.clone()).validate_all_constraints(student);

    let calculation_allowed = student_checks.successful
        && is_calculation_allowed(&constraints)
        && student.course_count() > 0;
    let validation = student_checks.merged(constraints);

    let mut report = SemesterReport {
        validation,
        calculation_allowed,
        total_units: student.total_units(),
        course_count: student.course_count(),
        total_credit_points: None,
        semester_gpa: None,
        cgpa: None,
        classification: None,
    };

    if !calculation_allowed {
        warn!(
            errors = report.validation.error_count(),
            "Calculation skipped for semester report"
        );
        return Ok(report);
    }

    let breakdown = student_cgpa(student)?;
    report.total_credit_points = Some(total_credit_points(student.courses())?);
    report.semester_gpa = Some(crate::calculation::current_semester_gpa(student.courses())?);
    report.classification = Some(summarize(breakdown.cgpa, rng)?);
    report.cgpa = Some(breakdown);

    info!(cgpa = breakdown.cgpa, "Semester report built");
    Ok(report)
}
