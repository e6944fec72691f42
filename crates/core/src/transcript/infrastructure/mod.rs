pub mod json_transcript_reader;
pub mod scripted_transcript_source;
