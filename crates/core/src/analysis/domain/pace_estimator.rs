use crate::shared::math::round2;
use crate::transcript::domain::speech_segment::SpeechSegment;

/// Estimates speaking pace from segment timestamps.
pub struct PaceEstimator;

impl PaceEstimator {
    /// Words per minute over the recording span, rounded to two decimals.
    /// An empty span (zero or one segment, or a last timestamp at or before
    /// the first) reports 0 rather than dividing by zero.
    pub fn words_per_minute(segments: &[SpeechSegment], total_words: usize) -> f64 {
        let secs = Self::duration_secs(segments);
        if secs <= 0.0 {
            return 0.0;
        }
        round2(total_words as f64 / secs * 60.0)
    }

    /// Elapsed seconds between the first and last segment timestamps.
    pub fn duration_secs(segments: &[SpeechSegment]) -> f64 {
        let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
            return 0.0;
        };
        if last.timestamp <= first.timestamp {
            return 0.0;
        }
        // Spans wider than i64::MAX milliseconds saturate instead of overflowing.
        last.timestamp.saturating_sub(first.timestamp) as f64 / 1000.0
    }
}
