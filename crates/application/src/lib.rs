//! Application layer for the GPA engine
//!
//! This crate holds the academic rules that sit on top of the domain types.
//!
//! ## Modules
//!
//! - `calculation` - Semester GPA, CGPA and credit totals
//! - `classification` - Degree bands, pass floor and motivational messages
//! - `validation` - Collect-and-report rule checks and policy constraints
//! - `report` - One-call semester report combining the three

pub mod calculation;
pub mod classification;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use calculation::{
    cgpa_breakdown, current_semester_gpa, initial_cgpa, round2, student_cgpa, total_credit_points,
    total_credit_units, updated_cgpa, CalculationError, CgpaBreakdown,
};
pub use classification::{
    classify, is_passing_grade, motivational_message, points_to_next_level, summarize, ClassBand,
    ClassificationError, ClassificationSummary, DegreeClass, MessageSelector, PerformanceTier,
    CLASS_BANDS,
};
pub use report::{build_semester_report, SemesterReport};
pub use validation::{
    is_addition_allowed, is_calculation_allowed, ConstraintValidator, Validatable,
    ValidationResult,
};

use gpa_engine_domain::DomainError;
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// A calculation precondition failed
    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculationError),

    /// A CGPA could not be classified
    #[error("Classification failed: {0}")]
    Classification(#[from] ClassificationError),

    /// A domain setter rejected a value
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Collected validation errors
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Build a validation failure from a result's collected errors
    pub fn from_validation(result: &ValidationResult) -> Self {
        ApplicationError::ValidationFailed(result.all_errors().join("; "))
    }

    /// Get error code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::Calculation(_) => "CALCULATION_FAILED",
            ApplicationError::Classification(_) => "CLASSIFICATION_FAILED",
            ApplicationError::Domain(_) => "INVALID_INPUT",
            ApplicationError::ValidationFailed(_) => "VALIDATION_FAILED",
        }
    }

    /// Process exit code for command-line callers
    pub fn exit_code(&self) -> i32 {
        match self {
            ApplicationError::Domain(_) | ApplicationError::ValidationFailed(_) => 2,
            ApplicationError::Calculation(_) | ApplicationError::Classification(_) => 3,
        }
    }
}

/// Application result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;
