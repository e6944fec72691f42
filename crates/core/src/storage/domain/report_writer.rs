use std::path::Path;

use crate::analysis::domain::analysis_result::AnalysisResult;

/// Persists a finished analysis report.
pub trait ReportWriter: Send {
    /// Writes the report to the given path.
    fn write_report(
        &self,
        path: &Path,
        report: &AnalysisResult,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
