use std::collections::HashSet;

use crate::analysis::domain::analysis_result::NextStep;
use crate::analysis::domain::text_prep::Sentence;
use crate::lexicon::NEXT_STEP_KEYWORDS;

/// Most next steps reported per call.
pub const MAX_NEXT_STEPS: usize = 3;

/// Flags sentences that commit to a follow-up action.
pub struct NextStepDetector;

impl NextStepDetector {
    /// One next step per distinct sentence, keyed by the first cue found in
    /// table order; cues match by substring. Duplicate sentence texts keep
    /// only their first record.
    pub fn detect(sentences: &[Sentence]) -> Vec<NextStep> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut steps = Vec::new();

        for sentence in sentences {
            let Some(keyword) = NEXT_STEP_KEYWORDS
                .iter()
                .find(|k| sentence.lower().contains(*k))
            else {
                continue;
            };
            if !seen.insert(sentence.trimmed()) {
                continue;
            }
            steps.push(NextStep {
                text: sentence.trimmed().to_string(),
                keyword: keyword.to_string(),
            });
        }

        steps.truncate(MAX_NEXT_STEPS);
        steps
    }
}
