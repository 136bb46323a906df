//! Add or remove a course in a student record file

use super::CommandContext;
use crate::output::{colors, Render};
use anyhow::{Context, Result};
use gpa_engine_application::validation::{is_addition_allowed, validate_course_fields};
use gpa_engine_application::{ApplicationError, ValidationResult};
use gpa_engine_common::{load_student, save_student};
use gpa_engine_domain::{Course, Student};
use std::path::Path;
use tracing::{debug, info};

/// Raw course input as typed on the command line
#[derive(Debug, Clone)]
pub struct CourseInput {
    pub name: String,
    pub units: i64,
    pub grade: String,
}

/// Check a new course against a student, returning the updated student
///
/// Field problems and duplicates are hard failures. A load warning is
/// printed with the rest of the evaluation but does not stop the addition.
pub fn plan_addition(
    ctx: &CommandContext,
    mut student: Student,
    input: &CourseInput,
) -> Result<(Student, ValidationResult)> {
    let field_checks = validate_course_fields(&input.name, input.units, &input.grade);
    if !field_checks.successful {
        return Err(ApplicationError::from_validation(&field_checks).into());
    }

    let units = u32::try_from(input.units).context("Units out of range")?;
    let course = Course::new(input.name.as_str(), units, &input.grade).map_err(ApplicationError::from)?;

    let evaluation = ctx.constraints().evaluate_course_addition(&student, &course);
    if !is_addition_allowed(&evaluation) {
        debug!(course = course.name(), "Course addition rejected");
        return Err(ApplicationError::from_validation(&evaluation).into());
    }

    student.add_course(course).map_err(ApplicationError::from)?;
    Ok((student, evaluation))
}

/// Add a course to the record in `file`
pub fn add(ctx: &CommandContext, file: &Path, input: CourseInput, write: bool) -> Result<()> {
    let student = load_student(file)?;
    let (student, evaluation) = plan_addition(ctx, student, &input)?;

    println!("{}", evaluation.render(ctx.format)?);
    finish(file, &student, write, &format!("Added '{}'", input.name.trim()))
}

/// Remove a course from the record in `file`
pub fn remove(ctx: &CommandContext, file: &Path, name: &str, write: bool) -> Result<()> {
    let mut student = load_student(file)?;
    let removed = student.remove_course(name).map_err(ApplicationError::from)?;

    let load = ctx.constraints().validate_semester_units(&student);
    println!("{}", load.render(ctx.format)?);
    finish(file, &student, write, &format!("Removed '{}'", removed.name()))
}

fn finish(file: &Path, student: &Student, write: bool, action: &str) -> Result<()> {
    if write {
        save_student(file, student)?;
        info!(file = %file.display(), courses = student.course_count(), "Record updated");
        println!(
            "{} ({} courses, {} units)",
            colors::success(action),
            student.course_count(),
            student.total_units()
        );
    } else {
        println!(
            "{} {}",
            colors::info(action),
            colors::dim("(dry run; pass --write to save)")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use gpa_engine_application::validation::fields;
    use gpa_engine_common::EngineConfig;
    use gpa_engine_testing::fixtures::create_full_load_student;

    fn ctx() -> CommandContext {
        CommandContext::new(EngineConfig::default(), OutputFormat::Plain, None)
    }

    fn input(name: &str, units: i64, grade: &str) -> CourseInput {
        CourseInput {
            name: name.to_string(),
            units,
            grade: grade.to_string(),
        }
    }

    #[test]
    fn test_addition_within_load() {
        let (student, evaluation) =
            plan_addition(&ctx(), create_full_load_student(), &input("Statistics", 3, "b")).unwrap();
        assert_eq!(student.total_units(), 21);
        assert!(evaluation.successful);
    }

    #[test]
    fn test_overload_warning_still_adds() {
        let mut student = create_full_load_student();
        student.add_course(Course::new("Ethics", 6, "A").unwrap()).unwrap();

        let (student, evaluation) = plan_addition(&ctx(), student, &input("Statistics", 3, "B")).unwrap();
        assert_eq!(student.total_units(), 27);
        assert!(evaluation.has_field_error(fields::COURSE_LOAD_WARNING));
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let err = plan_addition(&ctx(), create_full_load_student(), &input(" course 1 ", 3, "A"))
            .unwrap_err();
        assert!(err.to_string().contains("Duplicate Course"));
    }

    #[test]
    fn test_bad_fields_are_all_reported() {
        let err = plan_addition(&ctx(), Student::new(), &input("", -2, "Z")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Course Name"));
        assert!(message.contains("Course Units"));
        assert!(message.contains("Letter Grade"));
    }

    #[test]
    fn test_add_and_remove_write_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("student.json");
        save_student(&path, &create_full_load_student()).unwrap();

        add(&ctx(), &path, input("Statistics", 2, "C"), true).unwrap();
        assert!(load_student(&path).unwrap().has_course("statistics"));

        remove(&ctx(), &path, "STATISTICS", true).unwrap();
        assert!(!load_student(&path).unwrap().has_course("Statistics"));

        add(&ctx(), &path, input("Statistics", 2, "C"), false).unwrap();
        assert!(!load_student(&path).unwrap().has_course("Statistics"));
    }
}
