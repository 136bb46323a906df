//! Course value type.
//!
//! A course carries a name, a unit weight and a letter grade. Every setter
//! checks its own field and fails immediately on bad input, so a `Course`
//! built through [`Course::new`] is always valid.

use crate::errors::{DomainError, DomainResult};
use crate::grade::LetterGrade;
use serde::Serialize;

/// A single course taken in a semester
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    name: String,
    units: u32,
    letter_grade: LetterGrade,
}

impl Course {
    /// Minimum unit weight of a course
    pub const MIN_UNITS: u32 = 1;
    /// Maximum unit weight of a course
    pub const MAX_UNITS: u32 = 6;
    /// Maximum course name length, counted after trimming
    pub const MAX_NAME_LENGTH: usize = 50;

    /// Create a course from raw field values
    ///
    /// The grade is parsed case-insensitively.
    pub fn new(name: impl Into<String>, units: u32, letter_grade: &str) -> DomainResult<Self> {
        Self::with_grade(name, units, LetterGrade::parse(letter_grade)?)
    }

    /// Create a course from an already parsed grade
    pub fn with_grade(
        name: impl Into<String>,
        units: u32,
        letter_grade: LetterGrade,
    ) -> DomainResult<Self> {
        let name = Self::check_name(name.into())?;
        Self::check_units(units)?;
        Ok(Self {
            name,
            units,
            letter_grade,
        })
    }

    /// Build a course without running any field checks.
    ///
    /// Callers must consult [`Course::is_valid`] before relying on the value.
    pub fn from_raw_unchecked(name: impl Into<String>, units: u32, letter_grade: LetterGrade) -> Self {
        Self {
            name: name.into(),
            units,
            letter_grade,
        }
    }

    /// Course name (trimmed)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit weight
    pub fn units(&self) -> u32 {
        self.units
    }

    /// Letter grade
    pub fn letter_grade(&self) -> LetterGrade {
        self.letter_grade
    }

    /// Grade points derived from the letter grade
    pub fn grade_points(&self) -> f64 {
        self.letter_grade.grade_points()
    }

    /// Units multiplied by grade points
    pub fn credit_points(&self) -> f64 {
        f64::from(self.units) * self.grade_points()
    }

    /// Replace the name
    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = Self::check_name(name.into())?;
        Ok(())
    }

    /// Replace the unit weight
    pub fn set_units(&mut self, units: u32) -> DomainResult<()> {
        Self::check_units(units)?;
        self.units = units;
        Ok(())
    }

    /// Replace the grade from its letter, any case
    pub fn set_letter_grade(&mut self, letter_grade: &str) -> DomainResult<()> {
        self.letter_grade = LetterGrade::parse(letter_grade)?;
        Ok(())
    }

    /// Whether every field is within its allowed range
    pub fn is_valid(&self) -> bool {
        Self::name_problem(&self.name).is_none() && Self::check_units(self.units).is_ok()
    }

    /// Name normalized for duplicate detection: trimmed and lowercased
    pub fn normalized_name(&self) -> String {
        normalize_course_name(&self.name)
    }

    /// Describe what is wrong with a name, if anything
    pub fn name_problem(name: &str) -> Option<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Some("Course name cannot be empty".to_string());
        }
        let length = trimmed.chars().count();
        if length > Self::MAX_NAME_LENGTH {
            return Some(format!(
                "Course name must be {} characters or less (got {})",
                Self::MAX_NAME_LENGTH,
                length
            ));
        }
        None
    }

    fn check_name(name: String) -> DomainResult<String> {
        match Self::name_problem(&name) {
            Some(reason) => Err(DomainError::InvalidCourseName {
                value: name,
                reason,
            }),
            None => Ok(name.trim().to_string()),
        }
    }

    fn check_units(units: u32) -> DomainResult<()> {
        if (Self::MIN_UNITS..=Self::MAX_UNITS).contains(&units) {
            Ok(())
        } else {
            Err(DomainError::InvalidUnits {
                units: i64::from(units),
                min: Self::MIN_UNITS,
                max: Self::MAX_UNITS,
            })
        }
    }
}

/// Two courses are the same entity when their names match exactly.
impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Course {}

impl std::hash::Hash for Course {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Trim and lowercase a course name for duplicate comparison
pub fn normalize_course_name(name: &str) -> String {
    name.trim().to_lowercase()
}
