//! Persisted form of a student's data.
//!
//! The JSON layout is shared with the storage layer:
//!
//! ```json
//! {
//!   "studentData": { "currentCGPA": 4.0, "cumulativeUnits": 30 },
//!   "courses": [
//!     { "courseName": "CS101", "units": 3, "letterGrade": "A", "gradePoints": 5.0 }
//!   ]
//! }
//! ```
//!
//! `gradePoints` is written for readers of the file but ignored on load;
//! it is always derived from the letter grade.

use crate::course::Course;
use crate::errors::DomainResult;
use crate::student::Student;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Top-level persisted record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// Prior academic record
    #[validate]
    pub student_data: StudentData,

    /// Courses in display order
    #[serde(default)]
    #[validate]
    pub courses: Vec<CourseRecord>,
}

/// Prior CGPA and unit count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentData {
    /// CGPA before this semester
    #[serde(rename = "currentCGPA", default)]
    #[validate(range(min = 0.0, max = 5.0, message = "CGPA must be between 0.00 and 5.00"))]
    pub current_cgpa: f64,

    /// Units completed before this semester
    #[serde(default)]
    pub cumulative_units: u32,
}

/// One persisted course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Course name as entered
    #[validate(length(min = 1, max = 50, message = "Course name must be 1-50 characters"))]
    pub course_name: String,

    /// Unit weight
    #[validate(range(min = 1, max = 6, message = "Units must be between 1 and 6"))]
    pub units: u32,

    /// Letter grade, any case; checked when the course is rebuilt
    pub letter_grade: String,

    /// Grade points, informational only
    #[serde(default)]
    pub grade_points: f64,
}

impl StudentRecord {
    /// Snapshot a student into its persisted form
    pub fn from_student(student: &Student) -> Self {
        Self {
            student_data: StudentData {
                current_cgpa: student.current_cgpa(),
                cumulative_units: student.cumulative_units(),
            },
            courses: student.courses().iter().map(CourseRecord::from).collect(),
        }
    }

    /// Rebuild a student, running every domain check
    pub fn into_student(self) -> DomainResult<Student> {
        let mut student = Student::with_record(
            self.student_data.current_cgpa,
            self.student_data.cumulative_units,
        )?;
        for record in self.courses {
            student.add_course(Course::try_from(record)?)?;
        }
        Ok(student)
    }
}

impl From<&Course> for CourseRecord {
    fn from(course: &Course) -> Self {
        Self {
            course_name: course.name().to_string(),
            units: course.units(),
            letter_grade: course.letter_grade().to_string(),
            grade_points: course.grade_points(),
        }
    }
}

impl TryFrom<CourseRecord> for Course {
    type Error = crate::errors::DomainError;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        Course::new(record.course_name, record.units, &record.letter_grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    fn sample_student() -> Student {
        let mut student = Student::with_record(4.0, 30).unwrap();
        student.add_course(Course::new("CS101", 3, "A").unwrap()).unwrap();
        student.add_course(Course::new("MA101", 3, "b").unwrap()).unwrap();
        student
    }

    #[test]
    fn test_json_shape() {
        let record = StudentRecord::from_student(&sample_student());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["studentData"]["currentCGPA"], 4.0);
        assert_eq!(json["studentData"]["cumulativeUnits"], 30);
        assert_eq!(json["courses"][0]["courseName"], "CS101");
        assert_eq!(json["courses"][1]["letterGrade"], "B");
        assert_eq!(json["courses"][1]["gradePoints"], 4.0);
    }

    #[test]
    fn test_round_trip_preserves_owned_fields() {
        let student = sample_student();
        let json = serde_json::to_string(&StudentRecord::from_student(&student)).unwrap();

        let record: StudentRecord = serde_json::from_str(&json).unwrap();
        let restored = record.into_student().unwrap();

        assert_eq!(restored.current_cgpa(), student.current_cgpa());
        assert_eq!(restored.cumulative_units(), student.cumulative_units());
        assert_eq!(restored.course_count(), student.course_count());
        for (left, right) in restored.courses().iter().zip(student.courses()) {
            assert_eq!(left.name(), right.name());
            assert_eq!(left.units(), right.units());
            assert_eq!(left.letter_grade(), right.letter_grade());
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let record: StudentRecord =
            serde_json::from_str(r#"{ "studentData": {} }"#).unwrap();
        let student = record.into_student().unwrap();
        assert_eq!(student.current_cgpa(), 0.0);
        assert!(student.courses().is_empty());
    }

    #[test]
    fn test_grade_points_are_rederived_on_load() {
        let json = r#"{
            "studentData": { "currentCGPA": 0.0, "cumulativeUnits": 0 },
            "courses": [{ "courseName": "CS101", "units": 3, "letterGrade": "a", "gradePoints": 1.0 }]
        }"#;
        let student = serde_json::from_str::<StudentRecord>(json)
            .unwrap()
            .into_student()
            .unwrap();
        assert_eq!(student.courses()[0].grade_points(), 5.0);
    }

    #[test]
    fn test_into_student_rejects_duplicates() {
        let mut record = StudentRecord::from_student(&sample_student());
        let mut duplicate = record.courses[0].clone();
        duplicate.course_name = "cs101 ".to_string();
        record.courses.push(duplicate);

        assert!(matches!(
            record.into_student(),
            Err(DomainError::DuplicateCourse(_))
        ));
    }

    #[test]
    fn test_validator_rules() {
        let mut record = StudentRecord::from_student(&sample_student());
        assert!(record.validate().is_ok());

        record.courses[0].units = 9;
        record.student_data.current_cgpa = 6.0;
        assert!(record.validate().is_err());
    }
}
