//! Semester report for a student record file

use super::classify::summary_rows;
use super::CommandContext;
use crate::output::{colors, PlainFormatter, Render, TableFormatter};
use anyhow::Result;
use gpa_engine_application::{build_semester_report, SemesterReport};
use gpa_engine_common::load_student;
use gpa_engine_domain::{Course, CourseRecord};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// A report together with the courses it was built from
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView<'a> {
    pub courses: Vec<CourseRecord>,
    #[serde(skip)]
    source: &'a [Course],
    #[serde(flatten)]
    pub report: &'a SemesterReport,
}

impl<'a> ReportView<'a> {
    pub fn new(courses: &'a [Course], report: &'a SemesterReport) -> Self {
        Self {
            courses: courses.iter().map(CourseRecord::from).collect(),
            source: courses,
            report,
        }
    }

    fn totals(&self) -> Vec<(&'static str, String)> {
        let report = self.report;
        let mut rows = vec![
            ("Courses", report.course_count.to_string()),
            ("Total units", report.total_units.to_string()),
        ];
        if let Some(points) = report.total_credit_points {
            rows.push(("Credit points", format!("{:.2}", points)));
        }
        if let Some(gpa) = report.semester_gpa {
            rows.push(("Semester GPA", format!("{:.2}", gpa)));
        }
        if let Some(cgpa) = &report.cgpa {
            if cgpa.previous_units > 0 {
                rows.push((
                    "Carried in",
                    format!("{:.2} points over {} units", cgpa.previous_points, cgpa.previous_units),
                ));
            }
            rows.push((
                "Cumulative",
                format!("{:.2} points over {} units", cgpa.total_points, cgpa.total_units),
            ));
        }
        rows
    }

    fn status_line(&self) -> String {
        if self.report.calculation_allowed {
            colors::success("Calculation complete").to_string()
        } else {
            colors::error("Calculation skipped: fix the problems above first").to_string()
        }
    }
}

impl Render for ReportView<'_> {
    fn render_table(&self) -> String {
        let mut sections = Vec::new();
        if !self.source.is_empty() {
            sections.push(TableFormatter::courses(self.source));
        }
        sections.push(TableFormatter::validation(&self.report.validation));
        sections.push(TableFormatter::key_value(self.totals()));
        if let Some(summary) = &self.report.classification {
            sections.push(TableFormatter::key_value(summary_rows(summary)));
        }
        sections.push(self.status_line());
        sections.join("\n")
    }

    fn render_plain(&self) -> String {
        let mut sections = vec![PlainFormatter::validation(&self.report.validation)];
        sections.push(PlainFormatter::key_value(&self.totals()));
        if let Some(summary) = &self.report.classification {
            sections.push(PlainFormatter::key_value(&summary_rows(summary)));
        }
        sections.push(self.status_line());
        sections.join("\n\n")
    }
}

/// Validate, calculate and classify the student in `file`
pub fn report(ctx: &CommandContext, file: &Path) -> Result<()> {
    let student = load_student(file)?;
    let mut selector = ctx.selector();
    let report = build_semester_report(&student, &ctx.config.policy, selector.rng())?;

    info!(
        file = %file.display(),
        allowed = report.calculation_allowed,
        "Report generated"
    );
    println!("{}", ReportView::new(student.courses(), &report).render(ctx.format)?);
    Ok(())
}
