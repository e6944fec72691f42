use crate::transcript::domain::speech_segment::SpeechSegment;
use crate::transcript::domain::transcript_source::TranscriptSource;

/// In-memory transcript source replaying scripted segments.
///
/// Stands in for live speech-to-text where no recording exists, and doubles
/// as a fixture source for demos and tests.
pub struct ScriptedTranscriptSource {
    segments: Vec<SpeechSegment>,
}

impl ScriptedTranscriptSource {
    pub fn new(segments: Vec<SpeechSegment>) -> Self {
        Self { segments }
    }

    /// The built-in demo call: five rep segments pitching a coaching
    /// dashboard over 24 seconds.
    pub fn demo_pitch() -> Self {
        let script = [
            (
                "Hey everyone, I'm sharing my screen now showing our sales coaching dashboard.",
                0,
            ),
            (
                "This platform automatically analyzes all your team's sales calls without you \
                 having to shadow anyone or listen to hours of recordings.",
                4000,
            ),
            (
                "You can see key metrics like talk ratio, sentiment analysis, objection \
                 handling, and even get AI-powered coaching suggestions.",
                11000,
            ),
            (
                "Everything shows up on this one dashboard so you can coach your entire team \
                 more effectively.",
                18000,
            ),
            (
                "I'll send everyone the trial link right after this demo. Thanks for watching!",
                24000,
            ),
        ];

        Self::new(
            script
                .into_iter()
                .map(|(text, timestamp)| SpeechSegment {
                    text: text.to_string(),
                    timestamp,
                    confidence: 0.95,
                    speaker: "rep".to_string(),
                })
                .collect(),
        )
    }
}

impl TranscriptSource for ScriptedTranscriptSource {
    fn fetch_transcript(&self) -> Result<Vec<SpeechSegment>, Box<dyn std::error::Error>> {
        Ok(self.segments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_returns_scripted_segments() {
        let seg = SpeechSegment {
            text: "Hello".to_string(),
            timestamp: 0,
            confidence: 1.0,
            speaker: "rep".to_string(),
        };
        let source = ScriptedTranscriptSource::new(vec![seg.clone()]);
        assert_eq!(source.fetch_transcript().unwrap(), vec![seg]);
    }

    #[test]
    fn test_demo_pitch_shape() {
        let segments = ScriptedTranscriptSource::demo_pitch()
            .fetch_transcript()
            .unwrap();
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0].timestamp, 0);
        assert_eq!(segments[4].timestamp, 24000);
        assert!(segments.iter().all(|s| s.speaker == "rep"));
        assert!(segments.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }
}
