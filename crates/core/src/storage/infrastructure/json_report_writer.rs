use std::path::Path;

use crate::analysis::domain::analysis_result::AnalysisResult;
use crate::storage::domain::report_writer::ReportWriter;

/// Writes analysis reports as JSON files using `serde_json`.
pub struct JsonReportWriter {
    pretty: bool,
}

impl JsonReportWriter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonReportWriter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ReportWriter for JsonReportWriter {
    fn write_report(
        &self,
        path: &Path,
        report: &AnalysisResult,
    ) -> Result<(), Box<dyn std::error::Error>> {
        // Ensure parent directory exists (infrastructure concern)
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        std::fs::write(path, json)?;

        log::debug!("Wrote analysis report to {}", path.display());
        Ok(())
    }
}
