//! Error types for the GPA engine domain.
//!
//! Domain errors are the fail-fast half of the engine's error reporting:
//! constructors and setters on [`Course`](crate::course::Course) and
//! [`Student`](crate::student::Student) return them as soon as a field is
//! given an out-of-range value. Academic-policy problems are never reported
//! this way; those are collected in a
//! [`ValidationResult`](crate::validation::ValidationResult).

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Course name empty or too long after trimming
    #[error("Invalid course name '{value}': {reason}")]
    InvalidCourseName { value: String, reason: String },

    /// Course units outside the allowed range
    #[error("Invalid course units {units}: must be between {min} and {max}")]
    InvalidUnits { units: i64, min: u32, max: u32 },

    /// Unknown letter grade
    #[error("Invalid letter grade '{0}': must be one of A, B, C, D, E, F")]
    InvalidLetterGrade(String),

    /// CGPA outside the five-point scale
    #[error("Invalid current CGPA {0}: must be between 0.00 and 5.00")]
    InvalidCgpa(f64),

    /// Course with the same normalized name already present
    #[error("Duplicate course: '{0}' already exists")]
    DuplicateCourse(String),

    /// No course with the given name
    #[error("Course not found: '{0}'")]
    CourseNotFound(String),

    /// A collected validation result was turned into a hard failure
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl DomainError {
    /// Name of the field this error refers to, when there is one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidCourseName { .. } => Some("Course Name"),
            Self::InvalidUnits { .. } => Some("Course Units"),
            Self::InvalidLetterGrade(_) => Some("Letter Grade"),
            Self::InvalidCgpa(_) => Some("Current CGPA"),
            Self::DuplicateCourse(_) => Some("Duplicate Course"),
            Self::CourseNotFound(_) | Self::Validation(_) => None,
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_field_and_value() {
        let err = DomainError::InvalidUnits { units: 9, min: 1, max: 6 };
        assert_eq!(
            err.to_string(),
            "Invalid course units 9: must be between 1 and 6"
        );

        let err = DomainError::InvalidCgpa(5.5);
        assert!(err.to_string().contains("5.5"));
    }

    #[test]
    fn test_validation_error_joins_messages() {
        let err = DomainError::Validation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Validation failed: a; b");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(
            DomainError::InvalidLetterGrade("Z".to_string()).field(),
            Some("Letter Grade")
        );
        assert_eq!(DomainError::CourseNotFound("X".to_string()).field(), None);
    }
}
