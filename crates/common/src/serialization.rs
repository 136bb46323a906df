//! Serialization utilities.
//!
//! JSON helpers and the file boundary for persisted student records. Only
//! plain read/write lives here; backups and auto-save belong to the caller.

use anyhow::{Context, Result};
use gpa_engine_domain::{Student, StudentRecord};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serialize a value as pretty-printed JSON
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize value to JSON")
}

/// Deserialize a value from JSON text
pub fn from_json<T: DeserializeOwned>(contents: &str) -> Result<T> {
    serde_json::from_str(contents).context("Failed to parse JSON")
}

/// Read a persisted student record from disk
pub fn read_student_record(path: &Path) -> Result<StudentRecord> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read student record {}", path.display()))?;
    let record: StudentRecord = from_json(&contents)
        .with_context(|| format!("Invalid student record {}", path.display()))?;
    debug!(
        path = %path.display(),
        courses = record.courses.len(),
        "Loaded student record"
    );
    Ok(record)
}

/// Write a student record to disk as pretty JSON
pub fn write_student_record(path: &Path, record: &StudentRecord) -> Result<()> {
    let contents = to_json_pretty(record)?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write student record {}", path.display()))?;
    debug!(path = %path.display(), courses = record.courses.len(), "Saved student record");
    Ok(())
}

/// Read a record and rebuild the student, running every domain check
pub fn load_student(path: &Path) -> Result<Student> {
    read_student_record(path)?
        .into_student()
        .with_context(|| format!("Student record {} failed domain checks", path.display()))
}

/// Persist a student
pub fn save_student(path: &Path, student: &Student) -> Result<()> {
    write_student_record(path, &StudentRecord::from_student(student))
}
