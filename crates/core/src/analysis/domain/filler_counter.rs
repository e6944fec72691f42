use crate::lexicon::Lexicon;

/// Counts filler terms over the flattened transcript.
pub struct FillerCounter;

impl FillerCounter {
    /// Sum of non-overlapping whole-word matches per lexicon entry.
    /// Entries are counted independently of each other.
    pub fn count(lexicon: &Lexicon, lower_text: &str) -> usize {
        lexicon
            .filler_matchers()
            .iter()
            .map(|matcher| matcher.find_iter(lower_text).count())
            .sum()
    }
}
