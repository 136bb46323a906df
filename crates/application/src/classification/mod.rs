//! Classification module - degree bands and motivational messages
//!
//! Maps a CGPA to its degree classification, display color, and a
//! message drawn from an injected random source.

mod bands;
mod messages;

pub use bands::*;
pub use messages::*;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

/// Classification failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassificationError {
    /// CGPA off the five-point scale
    #[error("CGPA {0} must be between 0.00 and 5.00")]
    OutOfRange(f64),
}

/// Classification result type
pub type ClassificationResult<T> = Result<T, ClassificationError>;

/// Everything a caller needs to display a CGPA's standing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationSummary {
    /// CGPA that was classified
    pub cgpa: f64,
    /// Matching band
    pub band: ClassBand,
    /// Performance tier used for the message
    pub tier: PerformanceTier,
    /// Motivational message
    pub message: &'static str,
    /// Whether the CGPA clears the Third Class floor
    pub passing: bool,
    /// Gap to the next band up
    pub points_to_next_level: f64,
}

/// Classify a CGPA and pick its message
pub fn summarize<R: Rng + ?Sized>(cgpa: f64, rng: &mut R) -> ClassificationResult<ClassificationSummary> {
    let band = *classify(cgpa)?;
    Ok(ClassificationSummary {
        cgpa,
        band,
        tier: PerformanceTier::from_cgpa(cgpa),
        message: motivational_message(cgpa, rng),
        passing: is_passing_grade(cgpa),
        points_to_next_level: points_to_next_level(cgpa)?,
    })
}
