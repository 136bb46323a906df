//! Letter grades and their grade-point values.

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade awarded for a course
///
/// Parsing is case-insensitive and ignores surrounding whitespace; the
/// canonical form is always uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LetterGrade {
    /// Excellent (5.0)
    A,
    /// Very good (4.0)
    B,
    /// Good (3.0)
    C,
    /// Fair (2.0)
    D,
    /// Pass (1.0)
    E,
    /// Fail (0.0)
    F,
}

impl LetterGrade {
    /// All grades, best first
    pub const ALL: [LetterGrade; 6] = [
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::E,
        LetterGrade::F,
    ];

    /// Grade points on the five-point scale
    pub fn grade_points(&self) -> f64 {
        match self {
            Self::A => 5.0,
            Self::B => 4.0,
            Self::C => 3.0,
            Self::D => 2.0,
            Self::E => 1.0,
            Self::F => 0.0,
        }
    }

    /// Canonical uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }

    /// Parse a grade, accepting any case
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            _ => Err(DomainError::InvalidLetterGrade(value.to_string())),
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterGrade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LetterGrade {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LetterGrade> for String {
    fn from(grade: LetterGrade) -> Self {
        grade.as_str().to_string()
    }
}
