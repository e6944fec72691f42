use thiserror::Error;

use crate::analysis::domain::analysis_result::AnalysisResult;
use crate::analysis::domain::call_scorer::{CallScorer, ScoreInputs};
use crate::analysis::domain::filler_counter::FillerCounter;
use crate::analysis::domain::next_step_detector::NextStepDetector;
use crate::analysis::domain::objection_detector::ObjectionDetector;
use crate::analysis::domain::pace_estimator::PaceEstimator;
use crate::analysis::domain::question_counter::QuestionCounter;
use crate::analysis::domain::sentiment_scorer::SentimentScorer;
use crate::analysis::domain::text_prep::PreparedTranscript;
use crate::analysis::domain::topic_extractor::TopicExtractor;
use crate::lexicon::{Lexicon, LexiconError};
use crate::transcript::domain::speech_segment::SpeechSegment;

/// Reported rep share of the conversation; real diarization is out of scope.
pub const ASSUMED_TALK_RATIO: f64 = 40.0;

#[derive(Error, Debug, Clone)]
pub enum AnalysisError {
    #[error("lexicon resources unavailable: {0}")]
    Lexicon(#[from] LexiconError),
}

/// The deterministic transcript-to-assessment pipeline.
///
/// Synchronous and free of I/O. Empty or oddly shaped input yields a
/// defined zero/neutral result, never an error; the only failure source is
/// the embedded lexicon.
pub struct TranscriptAnalyzer;

impl TranscriptAnalyzer {
    pub fn analyze(segments: &[SpeechSegment]) -> Result<AnalysisResult, AnalysisError> {
        let lexicon = Lexicon::shared()?;
        let prepared = PreparedTranscript::from_segments(lexicon, segments);

        let total_words = prepared.total_words();
        let filler_words_count = FillerCounter::count(lexicon, prepared.lower_text());
        let questions_asked = QuestionCounter::count(prepared.sentences());

        let raw_sentiment = SentimentScorer::raw_score(lexicon, prepared.words());
        let overall_sentiment = SentimentScorer::label(raw_sentiment);
        let sentiment_score = SentimentScorer::normalize(raw_sentiment);

        let topics = TopicExtractor::extract(lexicon, prepared.words());
        let objections = ObjectionDetector::detect(prepared.sentences());
        let next_steps = NextStepDetector::detect(prepared.sentences());
        let average_speaking_pace = PaceEstimator::words_per_minute(segments, total_words);

        let overall_score = CallScorer::composite(&ScoreInputs {
            total_words,
            filler_words: filler_words_count,
            questions_asked,
            sentiment_score,
            has_next_steps: !next_steps.is_empty(),
        });

        // Fixed 40/60 split; the prospect side takes the remainder so the
        // shares always sum to the total.
        let rep_words = total_words * 2 / 5;

        Ok(AnalysisResult {
            total_words,
            rep_words,
            prospect_words: total_words - rep_words,
            talk_ratio: ASSUMED_TALK_RATIO,
            questions_asked,
            filler_words_count,
            average_speaking_pace,
            overall_sentiment,
            sentiment_score,
            topics,
            objections,
            next_steps,
            overall_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::analysis_result::{ObjectionKind, SentimentLabel};
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn seg(text: &str, timestamp: i64) -> SpeechSegment {
        SpeechSegment {
            text: text.to_string(),
            timestamp,
            confidence: 0.9,
            speaker: "rep".to_string(),
        }
    }

    // ─── Degenerate input ───

    #[test]
    fn test_empty_input_yields_neutral_baseline() {
        let result = TranscriptAnalyzer::analyze(&[]).unwrap();
        assert_eq!(result.total_words, 0);
        assert_eq!(result.rep_words, 0);
        assert_eq!(result.prospect_words, 0);
        assert_relative_eq!(result.talk_ratio, 40.0);
        assert_eq!(result.questions_asked, 0);
        assert_eq!(result.filler_words_count, 0);
        assert_relative_eq!(result.average_speaking_pace, 0.0);
        assert_eq!(result.overall_sentiment, SentimentLabel::Neutral);
        assert_relative_eq!(result.sentiment_score, 0.0);
        assert!(result.topics.is_empty());
        assert!(result.objections.is_empty());
        assert!(result.next_steps.is_empty());
        assert_relative_eq!(result.overall_score, 70.0);
    }

    #[test]
    fn test_punctuation_only_input_never_errors() {
        let result = TranscriptAnalyzer::analyze(&[seg("?!...", 0), seg("---", 100)]).unwrap();
        assert_eq!(result.total_words, 0);
        assert_relative_eq!(result.overall_score, 70.0);
    }

    // ─── Counting scenarios ───

    #[test]
    fn test_filler_heavy_sentence_counts_five() {
        let segments = [seg(
            "Um, so basically this is, like, you know, a great product",
            0,
        )];
        let result = TranscriptAnalyzer::analyze(&segments).unwrap();
        assert_eq!(result.filler_words_count, 5);
    }

    #[test]
    fn test_questions_counted_including_trailing_fragment() {
        let segments = [
            seg("What is your budget?", 0),
            seg("This costs a lot.", 2_000),
            seg("How do you currently handle this", 4_000),
        ];
        let result = TranscriptAnalyzer::analyze(&segments).unwrap();
        assert_eq!(result.questions_asked, 2);
    }

    #[test]
    fn test_duplicate_objection_sentences_record_once() {
        let segments = [
            seg("The price is too high and the cost is a concern.", 0),
            seg("The price is too high and the cost is a concern.", 3_000),
        ];
        let result = TranscriptAnalyzer::analyze(&segments).unwrap();
        assert_eq!(result.objections.len(), 1);
        assert_eq!(result.objections[0].keyword, "cost");
        assert_eq!(result.objections[0].kind, ObjectionKind::Price);
    }

    #[test]
    fn test_pace_150_words_over_one_minute() {
        let half = "word ".repeat(75);
        let segments = [seg(half.trim(), 0), seg(half.trim(), 60_000)];
        let result = TranscriptAnalyzer::analyze(&segments).unwrap();
        assert_eq!(result.total_words, 150);
        assert_relative_eq!(result.average_speaking_pace, 150.0);
    }

    // ─── Word split invariant ───

    #[rstest]
    #[case::zero(0)]
    #[case::three(3)]
    #[case::seven(7)]
    #[case::forty(40)]
    #[case::eighty_one(81)]
    fn test_rep_and_prospect_words_sum_to_total(#[case] n: usize) {
        let text = vec!["token"; n].join(" ");
        let result = TranscriptAnalyzer::analyze(&[seg(&text, 0)]).unwrap();
        assert_eq!(result.total_words, n);
        assert_eq!(result.rep_words, n * 2 / 5);
        assert_eq!(result.rep_words + result.prospect_words, n);
    }

    // ─── Sentiment flow ───

    #[test]
    fn test_positive_sentiment_labels_and_score() {
        let result =
            TranscriptAnalyzer::analyze(&[seg("This is great. Absolutely amazing work!", 0)])
                .unwrap();
        // great(+3) + amazing(+4)
        assert_eq!(result.overall_sentiment, SentimentLabel::VeryPositive);
        assert_relative_eq!(result.sentiment_score, 0.7);
    }

    #[test]
    fn test_negative_sentiment_labels_and_score() {
        let result =
            TranscriptAnalyzer::analyze(&[seg("This is terrible. I hate the interface.", 0)])
                .unwrap();
        // terrible(-3) + hate(-3)
        assert_eq!(result.overall_sentiment, SentimentLabel::VeryNegative);
        assert_relative_eq!(result.sentiment_score, -0.6);
    }

    // ─── Composite score ───

    #[test]
    fn test_extreme_filler_ratio_clamps_score_to_zero() {
        let text = format!("{}{}", "um ".repeat(50), "data ".repeat(50));
        let result = TranscriptAnalyzer::analyze(&[seg(text.trim(), 0)]).unwrap();
        assert_eq!(result.total_words, 100);
        assert_eq!(result.filler_words_count, 50);
        assert_relative_eq!(result.overall_score, 0.0);
    }

    #[test]
    fn test_next_step_raises_score_by_ten() {
        let segments = [seg(
            "The integration timeline spans quarters. We will schedule the kickoff.",
            0,
        )];
        let result = TranscriptAnalyzer::analyze(&segments).unwrap();
        assert_eq!(result.next_steps.len(), 1);
        assert_eq!(result.next_steps[0].keyword, "schedule");
        assert_relative_eq!(result.overall_score, 80.0);
    }

    // ─── Global properties ───

    #[test]
    fn test_analysis_is_deterministic() {
        let segments = [
            seg("Um, what would the price be for fifty seats?", 0),
            seg("We already have a competitor's tool, but let's schedule a demo.", 9_000),
            seg("Great, I will follow up with the contract", 21_000),
        ];
        let first = TranscriptAnalyzer::analyze(&segments).unwrap();
        let second = TranscriptAnalyzer::analyze(&segments).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bounds_hold_for_messy_input() {
        let segments = [
            seg("terrible terrible terrible awful awful broken!!!", 5_000),
            seg("um uh um uh like like so so right okay", 1_000),
            seg("Why? How? What? Which one?? you know...", 90_000),
            seg("Café costs £500 – not interested at all", 10_000),
        ];
        let result = TranscriptAnalyzer::analyze(&segments).unwrap();
        assert!((-1.0..=1.0).contains(&result.sentiment_score));
        assert!((0.0..=100.0).contains(&result.overall_score));
        assert!(result.topics.len() <= 10);
        assert!(result.objections.len() <= 5);
        assert!(result.next_steps.len() <= 3);
        assert!(result.average_speaking_pace >= 0.0);
        assert_eq!(
            result.rep_words + result.prospect_words,
            result.total_words
        );
    }

    #[test]
    fn test_non_ascii_text_tokenizes_on_ascii_runs() {
        let result = TranscriptAnalyzer::analyze(&[seg("Café costs £500 – très expensive!", 0)])
            .unwrap();
        // caf / costs / 500 / tr / s / expensive
        assert_eq!(result.total_words, 6);
        assert_eq!(result.objections.len(), 1);
        assert_eq!(result.objections[0].keyword, "expensive");
    }
}
