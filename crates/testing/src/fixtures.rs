//! Test fixtures for generating domain entities with realistic data.
//!
//! Fixed fixtures carry hand-checked totals; the `random_*` helpers and the
//! proptest strategies produce valid data with varied names and grades.

use fake::{faker::lorem::en::Word, Fake};
use gpa_engine_domain::{Course, LetterGrade, Student};
use proptest::prelude::*;

use crate::builders::StudentBuilder;

/// Create a three-unit B course
pub fn create_test_course() -> Course {
    create_test_course_with("Introduction to Computing", 3, LetterGrade::B)
}

/// Create a course from parts, panicking on invalid values
pub fn create_test_course_with(name: &str, units: u32, grade: LetterGrade) -> Course {
    Course::with_grade(name, units, grade).expect("fixture course should be valid")
}

/// A valid course with a random name and grade
pub fn random_course() -> Course {
    let word: String = Word().fake();
    let units = (Course::MIN_UNITS..=Course::MAX_UNITS).fake::<u32>();
    let grade = LetterGrade::ALL[(0..LetterGrade::ALL.len()).fake::<usize>()];
    create_test_course_with(&format!("{} {}", word, (100..999).fake::<u32>()), units, grade)
}

/// Six three-unit courses with grades A, B, C, D, E, F
///
/// 18 units and 45 credit points, for a GPA of exactly 2.50.
pub fn create_mixed_grade_courses() -> Vec<Course> {
    LetterGrade::ALL
        .iter()
        .enumerate()
        .map(|(i, grade)| create_test_course_with(&format!("Course {}", i + 1), 3, *grade))
        .collect()
}

/// First-semester student with an 18-unit load and no prior record
pub fn create_full_load_student() -> Student {
    StudentBuilder::new()
        .with_courses(create_mixed_grade_courses())
        .build()
}

/// Returning student with 3.50 over 30 units and an 18-unit semester
pub fn create_returning_student() -> Student {
    StudentBuilder::new()
        .with_record(3.5, 30)
        .with_courses(create_mixed_grade_courses())
        .build()
}

/// Student whose CGPA has no cumulative units behind it
pub fn create_inconsistent_student() -> Student {
    let mut student = create_full_load_student();
    student
        .set_current_cgpa(3.0)
        .expect("3.0 is on the five-point scale");
    student
}

/// Any letter grade
pub fn arb_letter_grade() -> impl Strategy<Value = LetterGrade> {
    prop::sample::select(LetterGrade::ALL.to_vec())
}

/// Any valid course
pub fn arb_course() -> impl Strategy<Value = Course> {
    ("[A-Za-z][A-Za-z0-9 ]{0,20}", Course::MIN_UNITS..=Course::MAX_UNITS, arb_letter_grade())
        .prop_map(|(name, units, grade)| create_test_course_with(&name, units, grade))
}

/// A non-empty list of valid courses with unique names
pub fn arb_courses(max: usize) -> impl Strategy<Value = Vec<Course>> {
    prop::collection::vec(
        (Course::MIN_UNITS..=Course::MAX_UNITS, arb_letter_grade()),
        1..=max.max(1),
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .enumerate()
            .map(|(i, (units, grade))| create_test_course_with(&format!("Course {}", i), units, grade))
            .collect()
    })
}

/// Any CGPA on the five-point scale, in hundredths
pub fn arb_cgpa() -> impl Strategy<Value = f64> {
    (0u32..=500).prop_map(|hundredths| f64::from(hundredths) / 100.0)
}
