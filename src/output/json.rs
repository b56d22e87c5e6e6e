use serde::Serialize;

use crate::error::Result;
use crate::inspector::FileRecord;

use super::{InspectionFailure, InspectionReport, ReportFormatter, Summary};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    files: &'a [FileRecord],
    errors: &'a [InspectionFailure],
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &InspectionReport) -> Result<String> {
        let output = JsonOutput {
            summary: report.summary(),
            files: &report.records,
            errors: &report.failures,
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
