use serde::{Deserialize, Serialize};

/// Sentiment bucket reported for the whole call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "very negative")]
    VeryNegative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SentimentLabel::VeryPositive => "very positive",
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
            SentimentLabel::VeryNegative => "very negative",
        };
        write!(f, "{label}")
    }
}

/// Classification of a detected objection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectionKind {
    Price,
    Competition,
    General,
}

/// A frequently used non-trivial word and how often it occurred.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub word: String,
    pub count: usize,
}

/// A sentence voicing an objection, with the cue that flagged it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objection {
    pub text: String,
    pub keyword: String,
    #[serde(rename = "type")]
    pub kind: ObjectionKind,
}

/// A sentence committing to a follow-up action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStep {
    pub text: String,
    pub keyword: String,
}

/// Full assessment of one call transcript.
///
/// Serializes with the exact field names the reporting surface stores, so a
/// record can be marshaled with no further mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub total_words: usize,
    /// Fixed 40% share of `total_words`.
    pub rep_words: usize,
    /// Remainder of the fixed split; the two shares always sum to
    /// `total_words`.
    pub prospect_words: usize,
    /// Constant 40.0; the `speaker` labels on segments are not consulted.
    pub talk_ratio: f64,
    pub questions_asked: usize,
    pub filler_words_count: usize,
    /// Words per minute across the recording span, 0 when the span is empty.
    pub average_speaking_pace: f64,
    pub overall_sentiment: SentimentLabel,
    /// Normalized polarity in [-1, 1].
    pub sentiment_score: f64,
    pub topics: Vec<Topic>,
    pub objections: Vec<Objection>,
    pub next_steps: Vec<NextStep>,
    /// Composite call quality in [0, 100].
    pub overall_score: f64,
}
