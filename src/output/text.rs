use std::fmt::Write;

use crate::error::Result;
use crate::inspector::FileRecord;

use super::{InspectionReport, ReportFormatter};

const UNKNOWN_LANGUAGE: &str = "-";

pub struct TextFormatter;

impl TextFormatter {
    fn format_record(output: &mut String, record: &FileRecord, name_width: usize) {
        let language = if record.language.is_empty() {
            UNKNOWN_LANGUAGE
        } else {
            record.language.as_str()
        };
        let _ = writeln!(
            output,
            "{:<name_width$}  {:<10}  {:>8} B  total={} code={} comment={}",
            record.name,
            language,
            record.size_bytes,
            record.lines.total,
            record.lines.code,
            record.lines.comment,
        );
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &InspectionReport) -> Result<String> {
        let mut output = String::new();
        let name_width = report
            .records
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0);

        for record in &report.records {
            Self::format_record(&mut output, record, name_width);
        }

        if report.has_failures() {
            if !report.records.is_empty() {
                output.push('\n');
            }
            output.push_str("Errors:\n");
            for failure in &report.failures {
                let _ = writeln!(output, "  ✗ {} ({})", failure.message, failure.error_type);
            }
        }

        let summary = report.summary();
        if !output.is_empty() {
            output.push('\n');
        }
        let _ = writeln!(
            output,
            "Summary: {} file(s), {} failed, {} lines ({} code), {} bytes",
            summary.files, summary.failed, summary.total_lines, summary.code_lines, summary.bytes,
        );

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
