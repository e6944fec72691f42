use std::collections::HashMap;

use crate::analysis::domain::analysis_result::Topic;
use crate::lexicon::Lexicon;

/// Most topics reported per call.
pub const MAX_TOPICS: usize = 10;
/// Words shorter than this are never topics.
pub const MIN_TOPIC_LEN: usize = 5;

/// Plain frequency count over non-trivial words.
pub struct TopicExtractor;

impl TopicExtractor {
    /// Top words by occurrence, skipping stop words and short words.
    /// Equal counts keep first-appearance order.
    pub fn extract(lexicon: &Lexicon, words: &[String]) -> Vec<Topic> {
        let mut topics: Vec<Topic> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for word in words {
            if word.len() < MIN_TOPIC_LEN || lexicon.is_stop_word(word) {
                continue;
            }
            match index.get(word.as_str()) {
                Some(&i) => topics[i].count += 1,
                None => {
                    index.insert(word, topics.len());
                    topics.push(Topic {
                        word: word.clone(),
                        count: 1,
                    });
                }
            }
        }

        // Stable sort: ties keep first-appearance order.
        topics.sort_by(|a, b| b.count.cmp(&a.count));
        topics.truncate(MAX_TOPICS);
        topics
    }
}
