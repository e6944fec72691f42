use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::transcript::domain::speech_segment::SpeechSegment;
use crate::transcript::domain::transcript_source::TranscriptSource;

/// Reads a call transcript from a JSON file.
///
/// Accepts either a top-level segment array or the `{"segments": [...]}`
/// envelope stored by the recording service.
pub struct JsonTranscriptReader {
    path: PathBuf,
}

#[derive(Deserialize)]
struct TranscriptEnvelope {
    segments: Vec<SpeechSegment>,
}

impl JsonTranscriptReader {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl TranscriptSource for JsonTranscriptReader {
    fn fetch_transcript(&self) -> Result<Vec<SpeechSegment>, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(&self.path)?;
        let document: serde_json::Value = serde_json::from_str(&raw)?;
        let segments = if document.is_array() {
            serde_json::from_value::<Vec<SpeechSegment>>(document)?
        } else {
            serde_json::from_value::<TranscriptEnvelope>(document)?.segments
        };
        log::debug!(
            "loaded {} transcript segments from {}",
            segments.len(),
            self.path.display()
        );
        Ok(segments)
    }
}
