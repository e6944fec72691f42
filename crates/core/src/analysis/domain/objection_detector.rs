use std::collections::HashSet;

use crate::analysis::domain::analysis_result::{Objection, ObjectionKind};
use crate::analysis::domain::text_prep::Sentence;
use crate::lexicon::OBJECTION_KEYWORDS;

/// Most objections reported per call.
pub const MAX_OBJECTIONS: usize = 5;

const PRICE_KEYWORDS: &[&str] = &["expensive", "cost", "price", "budget", "afford"];
const COMPETITION_KEYWORDS: &[&str] = &["competitor", "already have"];

/// Flags sentences that push back on the pitch.
pub struct ObjectionDetector;

impl ObjectionDetector {
    /// One objection per distinct sentence, keyed by the first cue found in
    /// table order. Cues match by substring, so "costs" triggers "cost".
    /// Duplicate sentence texts keep only their first record.
    pub fn detect(sentences: &[Sentence]) -> Vec<Objection> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut objections = Vec::new();

        for sentence in sentences {
            let Some(keyword) = OBJECTION_KEYWORDS
                .iter()
                .find(|k| sentence.lower().contains(*k))
            else {
                continue;
            };
            if !seen.insert(sentence.trimmed()) {
                continue;
            }
            objections.push(Objection {
                text: sentence.trimmed().to_string(),
                keyword: keyword.to_string(),
                kind: kind_for(keyword),
            });
        }

        objections.truncate(MAX_OBJECTIONS);
        objections
    }
}

fn kind_for(keyword: &str) -> ObjectionKind {
    if PRICE_KEYWORDS.contains(&keyword) {
        ObjectionKind::Price
    } else if COMPETITION_KEYWORDS.contains(&keyword) {
        ObjectionKind::Competition
    } else {
        ObjectionKind::General
    }
}
