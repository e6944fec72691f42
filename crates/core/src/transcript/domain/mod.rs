pub mod speech_segment;
pub mod transcript_source;
