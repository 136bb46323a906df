//! Testing utilities for the GPA engine
//!
//! This crate provides shared test data for every crate in the workspace:
//! - Fixtures with hand-checked totals
//! - Builder patterns for courses and students, including invalid ones
//! - Proptest strategies for valid courses and CGPAs
//!
//! # Examples
//!
//! ```
//! use gpa_engine_testing::{builders::*, fixtures::*};
//! use gpa_engine_domain::LetterGrade;
//!
//! // An 18-unit semester with one course of each grade
//! let student = create_full_load_student();
//! assert_eq!(student.total_units(), 18);
//!
//! // Build a custom student
//! let student = StudentBuilder::new()
//!     .with_record(3.5, 30)
//!     .with("Calculus", 4, LetterGrade::A)
//!     .build();
//! assert_eq!(student.course_count(), 1);
//! ```

pub mod builders;
pub mod fixtures;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
