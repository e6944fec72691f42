pub mod analysis_result;
pub mod call_scorer;
pub mod filler_counter;
pub mod next_step_detector;
pub mod objection_detector;
pub mod pace_estimator;
pub mod question_counter;
pub mod sentiment_scorer;
pub mod text_prep;
pub mod topic_extractor;
pub mod transcript_analyzer;
