//! @ai:module:intent Plain-text rendering of an analysis report
//! @ai:module:layer infrastructure
//! @ai:module:public_api SummaryReporter
//! @ai:module:stateless true

use crate::report::AnalysisReport;
use std::fmt::{self, Write as FmtWrite};

/// @ai:intent Trait for text summaries of ROC analyses
pub trait SummaryReporterTrait: Send + Sync {
    /// @ai:intent Render a report as a printable summary
    fn render(&self, report: &AnalysisReport) -> String;
}

/// @ai:intent Renders per-condition metrics, sorted points and AUC as text
pub struct SummaryReporter;

impl SummaryReporter {
    /// @ai:intent Create a new summary reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Display name of a condition
    /// @ai:effects pure
    fn condition_name(label: Option<&str>, index: usize) -> String {
        match label {
            Some(label) => label.to_string(),
            None => format!("#{}", index + 1),
        }
    }

    fn write_conditions(output: &mut String, report: &AnalysisReport) -> fmt::Result {
        writeln!(
            output,
            "{:<20} {:>7} {:>7} {:>7} {:>7} {:>9} {:>9} {:>8} {:>8}",
            "Condition", "Hits", "Misses", "FA", "CR", "Hit rate", "FA rate", "d'", "c"
        )?;
        writeln!(output, "{}", "-".repeat(91))?;

        for (i, row) in report.conditions.iter().enumerate() {
            writeln!(
                output,
                "{:<20} {:>7} {:>7} {:>7} {:>7} {:>9.4} {:>9.4} {:>8.4} {:>8.4}",
                Self::condition_name(row.label.as_deref(), i),
                row.hits,
                row.misses,
                row.false_alarms,
                row.correct_rejections,
                row.hit_rate,
                row.false_alarm_rate,
                row.d_prime,
                row.criterion
            )?;
        }

        writeln!(output)
    }

    fn write_curve(output: &mut String, report: &AnalysisReport) -> fmt::Result {
        if let Some(ref points) = report.points {
            writeln!(output, "Sorted ROC points (false alarm rate, hit rate):")?;
            for (fa, hit) in points.iter() {
                writeln!(output, "  ({:.4}, {:.4})", fa, hit)?;
            }
            writeln!(output)?;
        }

        match (report.auc, report.auc_unavailable.as_deref()) {
            (Some(auc), _) => writeln!(output, "AUC: {:.4}", auc),
            (None, Some(reason)) => writeln!(output, "AUC: n/a ({})", reason),
            (None, None) => writeln!(output, "AUC: n/a"),
        }
    }

    fn write_report(output: &mut String, report: &AnalysisReport) -> fmt::Result {
        writeln!(output, "ROC Analysis")?;
        writeln!(output, "============")?;
        writeln!(output)?;

        Self::write_conditions(output, report)?;
        Self::write_curve(output, report)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryReporterTrait for SummaryReporter {
    /// @ai:intent Render the full summary
    /// @ai:effects pure
    fn render(&self, report: &AnalysisReport) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::write_report(&mut output, report);
        output
    }
}
