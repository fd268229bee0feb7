//! Output formatting for CLI

use std::path::Path;

use crate::generator::GenerationReport;
use crate::validation::RowValidationReport;

/// Format validation findings, errors first
pub fn format_validation(report: &RowValidationReport) -> String {
    let mut output = String::new();

    let errors: Vec<_> = report.errors().collect();
    if !errors.is_empty() {
        output.push_str(&format!("\n❌ {} error(s):\n", errors.len()));
        for issue in errors {
            output.push_str(&format!("  - {}\n", issue));
        }
    }

    let warnings: Vec<_> = report.warnings().collect();
    if !warnings.is_empty() {
        output.push_str(&format!("\n⚠️  {} warning(s):\n", warnings.len()));
        for issue in warnings {
            output.push_str(&format!("  - {}\n", issue));
        }
    }

    if report.is_clean() {
        output.push_str(&format!("\n✅ {} row(s) checked, no issues\n", report.rows_checked));
    }

    output
}

/// Format the outcome of a generation run
pub fn format_summary(report: &GenerationReport, output_path: Option<&Path>) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n✅ Placed {} of {} field(s)\n",
        report.fields_placed, report.rows_seen
    ));

    if !report.panels_created.is_empty() {
        output.push_str(&format!(
            "  Panels created: {}\n",
            report.panels_created.join(", ")
        ));
    }

    let problems: Vec<_> = report.problems().collect();
    if !problems.is_empty() {
        output.push_str("\n⚠️  Skipped rows:\n");
        for skipped in problems {
            output.push_str(&format!(
                "  - row {} '{}': {}\n",
                skipped.row, skipped.name, skipped.reason
            ));
        }
    }

    let ignored = report.skipped_count() - report.problems().count();
    if ignored > 0 {
        output.push_str(&format!(
            "  {} structural or unsupported row(s) ignored\n",
            ignored
        ));
    }

    if let Some(path) = output_path {
        output.push_str(&format!("\nGenerated class file at {}\n", path.display()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{SkipReason, SkippedRow};
    use crate::validation::{RowIssue, Severity};

    #[test]
    fn test_format_summary() {
        let report = GenerationReport {
            rows_seen: 4,
            fields_placed: 2,
            panels_created: vec!["dati_tecnici".into()],
            skipped: vec![
                SkippedRow {
                    row: 3,
                    name: "lost".into(),
                    reason: SkipReason::UnmappedScreen("Altro".into()),
                },
                SkippedRow {
                    row: 4,
                    name: "group".into(),
                    reason: SkipReason::Structural,
                },
            ],
        };
        let text = format_summary(&report, Some(Path::new("GeneratedClass.json")));
        assert!(text.contains("Placed 2 of 4 field(s)"));
        assert!(text.contains("Panels created: dati_tecnici"));
        assert!(text.contains("row 3 'lost': no panel for screen 'Altro'"));
        assert!(text.contains("1 structural or unsupported row(s) ignored"));
        assert!(text.ends_with("Generated class file at GeneratedClass.json\n"));
    }

    #[test]
    fn test_format_validation() {
        let clean = RowValidationReport {
            rows_checked: 3,
            issues: Vec::new(),
        };
        assert!(format_validation(&clean).contains("3 row(s) checked, no issues"));

        let report = RowValidationReport {
            rows_checked: 1,
            issues: vec![RowIssue {
                row: Some(1),
                severity: Severity::Error,
                message: "missing 'Bundle'".into(),
            }],
        };
        let text = format_validation(&report);
        assert!(text.contains("1 error(s)"));
        assert!(text.contains("row 1: error: missing 'Bundle'"));
    }
}
