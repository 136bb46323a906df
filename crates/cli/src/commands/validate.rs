//! Validate a student record file without calculating

use super::CommandContext;
use crate::output::{colors, PlainFormatter, Render, TableFormatter};
use anyhow::Result;
use gpa_engine_application::validation::{
    fields, is_calculation_allowed, validate_student_record, validate_student_record_file,
};
use gpa_engine_application::{ApplicationError, ValidationResult};
use gpa_engine_common::read_student_record;
use std::path::Path;

impl Render for ValidationResult {
    fn render_table(&self) -> String {
        TableFormatter::validation(self)
    }

    fn render_plain(&self) -> String {
        PlainFormatter::validation(self)
    }
}

/// Run every check on a record file and report all problems at once
///
/// File-level problems (bad grades, out-of-range fields) stop before the
/// policy checks, which need a well-formed student.
pub fn run_checks(ctx: &CommandContext, file: &Path) -> Result<ValidationResult> {
    let record = read_student_record(file)?;

    let file_checks = validate_student_record_file(&record);
    if !file_checks.successful {
        return Ok(file_checks);
    }

    let student = record.into_student()?;
    Ok(validate_student_record(&student).merged(ctx.constraints().validate_all_constraints(&student)))
}

/// Print the validation result; fail if anything blocks calculation
pub fn validate(ctx: &CommandContext, file: &Path) -> Result<()> {
    let result = run_checks(ctx, file)?;
    println!("{}", result.render(ctx.format)?);

    let blocking = !is_calculation_allowed(&result)
        || result.has_field_error(fields::ACADEMIC_CONSISTENCY)
        || result.field_errors.keys().any(|field| field.contains('.'));

    if blocking {
        return Err(ApplicationError::from_validation(&result).into());
    }

    if !result.successful {
        eprintln!("{}", colors::warning("Advisory warnings only; calculation can proceed"));
    }
    Ok(())
}
