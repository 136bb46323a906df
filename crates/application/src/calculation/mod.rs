//! Calculation module - GPA, CGPA and credit totals
//!
//! All results are rounded to two decimals with [`round2`].

mod engine;
mod rounding;

pub use engine::*;
pub use rounding::{round2, round_half_up};

use thiserror::Error;

/// Precondition failures for the calculation functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// No courses were given
    #[error("At least one course is required")]
    EmptyCourses,

    /// A course failed its own field checks
    #[error("Course #{index} ('{name}') is not valid")]
    InvalidCourse { index: usize, name: String },

    /// The carried-in CGPA is off the five-point scale
    #[error("Previous CGPA {0} must be between 0.00 and 5.00")]
    PreviousCgpaOutOfRange(f64),

    /// Total units came to zero
    #[error("Total units must be greater than zero")]
    ZeroUnits,
}

/// Calculation result type
pub type CalculationResult<T> = Result<T, CalculationError>;
