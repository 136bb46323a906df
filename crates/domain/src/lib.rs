//! GPA Engine Domain Types
//!
//! This crate provides the core domain model for the GPA engine: courses,
//! students, letter grades, the persisted record shape, and the validation
//! result accumulator shared by every rule checker.
//!
//! ## Architecture
//!
//! - **grade**: Letter grades and their grade-point values
//! - **course**: Course value type with fail-fast setters
//! - **student**: Student aggregate with duplicate-free course list
//! - **record**: Persisted JSON shape and conversions
//! - **errors**: Fail-fast domain errors
//! - **validation**: Collect-and-report validation results
//!
//! ## Usage
//!
//! ```rust
//! use gpa_engine_domain::{Course, LetterGrade, Student};
//!
//! let mut student = Student::new();
//! student.add_course(Course::new("CS101", 3, "a").unwrap()).unwrap();
//!
//! assert_eq!(student.courses()[0].letter_grade(), LetterGrade::A);
//! assert_eq!(student.courses()[0].credit_points(), 15.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod course;
pub mod errors;
pub mod grade;
pub mod record;
pub mod student;
pub mod validation;

// Re-export commonly used types
pub use course::{normalize_course_name, Course};
pub use errors::{DomainError, DomainResult};
pub use grade::LetterGrade;
pub use record::{CourseRecord, StudentData, StudentRecord};
pub use student::Student;
pub use validation::ValidationResult;
