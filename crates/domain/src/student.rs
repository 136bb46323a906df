//! Student aggregate: prior academic record plus the current semester's courses.

use crate::course::{normalize_course_name, Course};
use crate::errors::{DomainError, DomainResult};
use serde::Serialize;

/// A student's academic data
///
/// `current_cgpa` of `0.0` means there is no prior record. Course names are
/// unique under case-insensitive, whitespace-trimmed comparison.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Student {
    current_cgpa: f64,
    cumulative_units: u32,
    courses: Vec<Course>,
}

impl Student {
    /// Lowest CGPA on the five-point scale
    pub const MIN_CGPA: f64 = 0.0;
    /// Highest CGPA on the five-point scale
    pub const MAX_CGPA: f64 = 5.0;

    /// Student with no prior record and no courses
    pub fn new() -> Self {
        Self::default()
    }

    /// Student carrying a prior CGPA and unit count
    pub fn with_record(current_cgpa: f64, cumulative_units: u32) -> DomainResult<Self> {
        let mut student = Self::new();
        student.set_current_cgpa(current_cgpa)?;
        student.set_cumulative_units(cumulative_units);
        Ok(student)
    }

    /// Prior CGPA
    pub fn current_cgpa(&self) -> f64 {
        self.current_cgpa
    }

    /// Units completed before this semester
    pub fn cumulative_units(&self) -> u32 {
        self.cumulative_units
    }

    /// Replace the prior CGPA
    pub fn set_current_cgpa(&mut self, cgpa: f64) -> DomainResult<()> {
        if !cgpa.is_finite() || !(Self::MIN_CGPA..=Self::MAX_CGPA).contains(&cgpa) {
            return Err(DomainError::InvalidCgpa(cgpa));
        }
        self.current_cgpa = cgpa;
        Ok(())
    }

    /// Replace the prior unit count
    pub fn set_cumulative_units(&mut self, units: u32) {
        self.cumulative_units = units;
    }

    /// Whether a prior CGPA has been recorded
    pub fn has_previous_record(&self) -> bool {
        self.current_cgpa > 0.0
    }

    /// A recorded CGPA needs a positive unit count behind it
    pub fn is_consistent(&self) -> bool {
        !self.has_previous_record() || self.cumulative_units > 0
    }

    /// Courses in insertion order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses this semester
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Sum of units across this semester's courses
    pub fn total_units(&self) -> u32 {
        self.courses.iter().map(Course::units).sum()
    }

    /// Whether a course with a matching normalized name exists
    pub fn has_course(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// Look up a course by normalized name
    pub fn find_course(&self, name: &str) -> Option<&Course> {
        self.position_of(name).map(|index| &self.courses[index])
    }

    /// Append a course, rejecting duplicate names
    pub fn add_course(&mut self, course: Course) -> DomainResult<()> {
        if self.has_course(course.name()) {
            return Err(DomainError::DuplicateCourse(course.name().to_string()));
        }
        self.courses.push(course);
        Ok(())
    }

    /// Remove a course by normalized name, returning it
    pub fn remove_course(&mut self, name: &str) -> DomainResult<Course> {
        match self.position_of(name) {
            Some(index) => Ok(self.courses.remove(index)),
            None => Err(DomainError::CourseNotFound(name.trim().to_string())),
        }
    }

    /// Drop every course, keeping the prior record
    pub fn clear_courses(&mut self) {
        self.courses.clear();
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        let wanted = normalize_course_name(name);
        self.courses
            .iter()
            .position(|course| course.normalized_name() == wanted)
    }
}
