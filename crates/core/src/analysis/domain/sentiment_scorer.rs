use crate::analysis::domain::analysis_result::SentimentLabel;
use crate::lexicon::Lexicon;

/// Divisor mapping raw polarity sums onto [-1, 1] before clamping.
pub const SENTIMENT_NORMALIZER: f64 = 10.0;

/// Lexicon-based polarity scoring over the word tokens.
pub struct SentimentScorer;

impl SentimentScorer {
    /// Sum of per-word polarity weights; unknown words weigh 0.
    pub fn raw_score(lexicon: &Lexicon, words: &[String]) -> i64 {
        words.iter().map(|w| lexicon.sentiment_weight(w)).sum()
    }

    /// Bucket a raw sum into the reported label.
    pub fn label(raw_score: i64) -> SentimentLabel {
        if raw_score > 2 {
            SentimentLabel::VeryPositive
        } else if raw_score > 0 {
            SentimentLabel::Positive
        } else if raw_score == 0 {
            SentimentLabel::Neutral
        } else if raw_score > -2 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::VeryNegative
        }
    }

    /// Normalize a raw sum to [-1, 1].
    pub fn normalize(raw_score: i64) -> f64 {
        (raw_score as f64 / SENTIMENT_NORMALIZER).clamp(-1.0, 1.0)
    }
}
