use serde::{Deserialize, Serialize};

/// One transcribed utterance of a recorded call.
///
/// Timestamps are expected to be non-decreasing across a recording, but the
/// engine never enforces that; out-of-order input degrades only the pace
/// estimate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeechSegment {
    pub text: String,
    /// Milliseconds since the start of the recording (or any fixed epoch).
    #[serde(default)]
    pub timestamp: i64,
    /// Transcription confidence in [0, 1]; carried through, never consumed.
    #[serde(default = "default_confidence")]
    pub confidence: f32,
    /// Speaker label as reported upstream. Not used for the talk ratio.
    #[serde(default = "default_speaker")]
    pub speaker: String,
}

fn default_confidence() -> f32 {
    0.95
}

fn default_speaker() -> String {
    "unknown".to_string()
}
