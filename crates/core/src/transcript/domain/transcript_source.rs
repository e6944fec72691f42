use crate::transcript::domain::speech_segment::SpeechSegment;

/// Domain interface for obtaining a call transcript.
///
/// Implementations may read stored recordings, call a speech-to-text
/// service, or replay scripted fixtures; the engine only cares about the
/// ordered segment sequence.
pub trait TranscriptSource: Send {
    fn fetch_transcript(&self) -> Result<Vec<SpeechSegment>, Box<dyn std::error::Error>>;
}
