use crate::analysis::domain::text_prep::Sentence;
use crate::lexicon::QUESTION_WORDS;

/// Counts questions asked across the call, at most one per sentence.
pub struct QuestionCounter;

impl QuestionCounter {
    pub fn count(sentences: &[Sentence]) -> usize {
        sentences.iter().filter(|s| Self::is_question(s)).count()
    }

    /// A sentence asks a question if it carries a `?` anywhere, or opens
    /// with a question word followed by a space.
    fn is_question(sentence: &Sentence) -> bool {
        if sentence.lower().contains('?') {
            return true;
        }
        let trimmed = sentence.lower().trim();
        QUESTION_WORDS.iter().any(|word| {
            trimmed
                .strip_prefix(word)
                .is_some_and(|rest| rest.starts_with(' '))
        })
    }
}
