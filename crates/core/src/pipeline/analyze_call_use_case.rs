use std::path::Path;

use crate::analysis::domain::analysis_result::AnalysisResult;
use crate::analysis::domain::transcript_analyzer::TranscriptAnalyzer;
use crate::storage::domain::report_writer::ReportWriter;
use crate::transcript::domain::transcript_source::TranscriptSource;

pub struct AnalyzeCallUseCase {
    source: Box<dyn TranscriptSource>,
    writer: Box<dyn ReportWriter>,
}

impl AnalyzeCallUseCase {
    pub fn new(source: Box<dyn TranscriptSource>, writer: Box<dyn ReportWriter>) -> Self {
        Self { source, writer }
    }

    pub fn run(
        &self,
        output_path: Option<&Path>,
    ) -> Result<AnalysisResult, Box<dyn std::error::Error>> {
        // 1. Fetch segments from the source
        let segments = self.source.fetch_transcript()?;
        log::info!("Fetched transcript with {} segments", segments.len());

        // 2. Run the analysis
        let result = TranscriptAnalyzer::analyze(&segments)?;
        log::info!(
            "Call scored {:.2}: {} words, sentiment {}",
            result.overall_score,
            result.total_words,
            result.overall_sentiment
        );

        // 3. Persist the report if a destination was given
        if let Some(path) = output_path {
            self.writer.write_report(path, &result)?;
        }

        Ok(result)
    }
}
