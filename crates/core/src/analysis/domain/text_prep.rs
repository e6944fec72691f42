use crate::lexicon::Lexicon;
use crate::transcript::domain::speech_segment::SpeechSegment;

/// One sentence of the flattened transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct Sentence {
    raw: String,
    lower: String,
}

impl Sentence {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            lower: raw.to_lowercase(),
        }
    }

    /// Original-cased text as split, terminators included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lower-cased twin used for matching.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Original-cased text without surrounding whitespace; the form recorded
    /// in objection and next-step entries.
    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }
}

/// Normalized view of a segment sequence that every sub-metric scans.
///
/// Segment texts are joined with single spaces. Sentences are runs up to a
/// terminator (`.`, `!`, `?`); a trailing run with no terminator still forms
/// a sentence, so an untranscribed-punctuation call is not silently empty.
/// Words are alphanumeric runs over the lower-cased text.
pub struct PreparedTranscript {
    lower_text: String,
    sentences: Vec<Sentence>,
    words: Vec<String>,
}

impl PreparedTranscript {
    pub fn from_segments(lexicon: &Lexicon, segments: &[SpeechSegment]) -> Self {
        let full_text = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let lower_text = full_text.to_lowercase();

        let sentences = lexicon
            .sentence_matcher()
            .find_iter(&full_text)
            .map(|m| m.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(Sentence::new)
            .collect();

        let words = lexicon
            .word_matcher()
            .find_iter(&lower_text)
            .map(|m| m.as_str().to_string())
            .collect();

        Self {
            lower_text,
            sentences,
            words,
        }
    }

    /// Lower-cased flattened transcript.
    pub fn lower_text(&self) -> &str {
        &self.lower_text
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Word tokens in spoken order, lower-cased.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }
}
