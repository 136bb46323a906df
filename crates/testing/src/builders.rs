//! Fluent builder pattern for constructing test data.
//!
//! Builders skip the fail-fast setters where a test needs an invalid value,
//! so validators can be exercised against data the domain would normally
//! refuse.

use gpa_engine_domain::{Course, LetterGrade, Student};

/// Builder for creating Course test instances
#[derive(Clone)]
pub struct CourseBuilder {
    name: String,
    units: u32,
    letter_grade: LetterGrade,
}

impl CourseBuilder {
    pub fn new() -> Self {
        Self {
            name: "Introduction to Computing".to_string(),
            units: 3,
            letter_grade: LetterGrade::B,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_units(mut self, units: u32) -> Self {
        self.units = units;
        self
    }

    pub fn with_grade(mut self, letter_grade: LetterGrade) -> Self {
        self.letter_grade = letter_grade;
        self
    }

    /// Build through the checked constructor
    ///
    /// Panics if the configured fields are invalid; use
    /// [`CourseBuilder::build_unchecked`] for deliberately bad data.
    pub fn build(self) -> Course {
        Course::with_grade(self.name, self.units, self.letter_grade)
            .expect("CourseBuilder fields should be valid")
    }

    pub fn build_unchecked(self) -> Course {
        Course::from_raw_unchecked(self.name, self.units, self.letter_grade)
    }
}

impl Default for CourseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating Student test instances
#[derive(Clone, Default)]
pub struct StudentBuilder {
    current_cgpa: f64,
    cumulative_units: u32,
    courses: Vec<Course>,
}

impl StudentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, current_cgpa: f64, cumulative_units: u32) -> Self {
        self.current_cgpa = current_cgpa;
        self.cumulative_units = cumulative_units;
        self
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Add a course from raw parts
    pub fn with(self, name: &str, units: u32, grade: LetterGrade) -> Self {
        self.with_course(
            CourseBuilder::new()
                .with_name(name)
                .with_units(units)
                .with_grade(grade)
                .build_unchecked(),
        )
    }

    pub fn with_courses(mut self, courses: impl IntoIterator<Item = Course>) -> Self {
        self.courses.extend(courses);
        self
    }

    /// Build a student, panicking on a duplicate name or out-of-range CGPA
    pub fn build(self) -> Student {
        let mut student = Student::with_record(self.current_cgpa, self.cumulative_units)
            .expect("StudentBuilder record should be valid");
        for course in self.courses {
            student
                .add_course(course)
                .expect("StudentBuilder course names should be unique");
        }
        student
    }
}
