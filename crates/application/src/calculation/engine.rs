//! GPA and CGPA arithmetic.
//!
//! Every function here is pure. Inputs are checked up front; any course that
//! fails its own field checks rejects the whole call.

use super::rounding::round2;
use super::{CalculationError, CalculationResult};
use gpa_engine_domain::{Course, Student};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a cumulative GPA was put together
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CgpaBreakdown {
    /// Previous CGPA × previous units
    pub previous_points: f64,
    /// Units carried in from earlier semesters
    pub previous_units: u32,
    /// Credit points earned this semester
    pub new_points: f64,
    /// Units taken this semester
    pub new_units: u32,
    /// Previous and new points combined
    pub total_points: f64,
    /// Previous and new units combined
    pub total_units: u64,
    /// Resulting cumulative GPA
    pub cgpa: f64,
}

/// GPA for one semester's courses
pub fn current_semester_gpa(courses: &[Course]) -> CalculationResult<f64> {
    let (points, units) = sum_courses(courses, true)?;
    if units == 0 {
        return Err(CalculationError::ZeroUnits);
    }
    let gpa = round2(points / f64::from(units));
    debug!(courses = courses.len(), units, gpa, "Computed semester GPA");
    Ok(gpa)
}

/// CGPA for a student with no prior record
pub fn initial_cgpa(courses: &[Course]) -> CalculationResult<f64> {
    current_semester_gpa(courses)
}

/// CGPA after adding a semester to an existing record
pub fn updated_cgpa(
    previous_cgpa: f64,
    previous_units: u32,
    new_courses: &[Course],
) -> CalculationResult<f64> {
    cgpa_breakdown(previous_cgpa, previous_units, new_courses).map(|breakdown| breakdown.cgpa)
}

/// CGPA after adding a semester, with the intermediate totals
pub fn cgpa_breakdown(
    previous_cgpa: f64,
    previous_units: u32,
    new_courses: &[Course],
) -> CalculationResult<CgpaBreakdown> {
    if !previous_cgpa.is_finite()
        || !(Student::MIN_CGPA..=Student::MAX_CGPA).contains(&previous_cgpa)
    {
        return Err(CalculationError::PreviousCgpaOutOfRange(previous_cgpa));
    }

    let (new_points, new_units) = sum_courses(new_courses, true)?;
    let previous_points = previous_cgpa * f64::from(previous_units);
    let total_points = previous_points + new_points;
    let total_units = u64::from(previous_units) + u64::from(new_units);

    if total_units == 0 {
        return Err(CalculationError::ZeroUnits);
    }

    let cgpa = round2(total_points / total_units as f64);
    debug!(
        previous_cgpa,
        previous_units, new_units, total_units, cgpa, "Computed cumulative GPA"
    );

    Ok(CgpaBreakdown {
        previous_points: round2(previous_points),
        previous_units,
        new_points: round2(new_points),
        new_units,
        total_points: round2(total_points),
        total_units,
        cgpa,
    })
}

/// CGPA for a student's current courses, continuing the prior record if there is one
pub fn student_cgpa(student: &Student) -> CalculationResult<CgpaBreakdown> {
    if student.has_previous_record() && student.cumulative_units() > 0 {
        cgpa_breakdown(
            student.current_cgpa(),
            student.cumulative_units(),
            student.courses(),
        )
    } else {
        let (new_points, new_units) = sum_courses(student.courses(), true)?;
        let cgpa = initial_cgpa(student.courses())?;
        Ok(CgpaBreakdown {
            previous_points: 0.0,
            previous_units: 0,
            new_points: round2(new_points),
            new_units,
            total_points: round2(new_points),
            total_units: u64::from(new_units),
            cgpa,
        })
    }
}

/// Sum of credit points, rounded to two decimals
pub fn total_credit_points(courses: &[Course]) -> CalculationResult<f64> {
    sum_courses(courses, false).map(|(points, _)| round2(points))
}

/// Sum of units
pub fn total_credit_units(courses: &[Course]) -> CalculationResult<u32> {
    sum_courses(courses, false).map(|(_, units)| units)
}

fn sum_courses(courses: &[Course], require_courses: bool) -> CalculationResult<(f64, u32)> {
    if require_courses && courses.is_empty() {
        return Err(CalculationError::EmptyCourses);
    }

    let mut points = 0.0;
    let mut units = 0u32;
    for (index, course) in courses.iter().enumerate() {
        if !course.is_valid() {
            return Err(CalculationError::InvalidCourse {
                index,
                name: course.name().to_string(),
            });
        }
        points += course.credit_points();
        units += course.units();
    }

    Ok((points, units))
}
