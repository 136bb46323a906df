//! Classify a CGPA

use super::CommandContext;
use crate::output::{colors, PlainFormatter, Render, TableFormatter};
use anyhow::Result;
use gpa_engine_application::{summarize, ClassificationSummary};

impl Render for ClassificationSummary {
    fn render_table(&self) -> String {
        TableFormatter::key_value(summary_rows(self))
    }

    fn render_plain(&self) -> String {
        PlainFormatter::key_value(&summary_rows(self))
    }
}

pub(crate) fn summary_rows(summary: &ClassificationSummary) -> Vec<(&'static str, String)> {
    vec![
        ("CGPA", format!("{:.2}", summary.cgpa)),
        (
            "Class",
            colors::band(summary.band.label, summary.band.color).to_string(),
        ),
        (
            "Range",
            format!("{:.2} - {:.2}", summary.band.lower_bound(), summary.band.upper_bound()),
        ),
        ("Passing", if summary.passing { "yes" } else { "no" }.to_string()),
        ("To next level", format!("{:.2}", summary.points_to_next_level)),
        ("Message", summary.message.to_string()),
    ]
}

/// Print the band, pass status and a message for a CGPA
pub fn classify(ctx: &CommandContext, cgpa: f64) -> Result<()> {
    let mut selector = ctx.selector();
    let summary = summarize(cgpa, selector.rng())?;
    println!("{}", summary.render(ctx.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_summary_rows() {
        colored::control::set_override(false);
        let mut rng = StdRng::seed_from_u64(3);
        let summary = summarize(3.2, &mut rng).unwrap();
        let rows = summary_rows(&summary);

        assert_eq!(rows[1], ("Class", "Second Class Lower".to_string()));
        assert_eq!(rows[2].1, "2.50 - 3.49");
        assert_eq!(rows[4].1, "0.30");
    }

    #[test]
    fn test_render_json() {
        let mut rng = StdRng::seed_from_u64(3);
        let summary = summarize(4.6, &mut rng).unwrap();
        let json = summary.render(crate::output::OutputFormat::Json).unwrap();
        assert!(json.contains("\"pointsToNextLevel\": 0.0"));
    }
}
