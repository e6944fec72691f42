//! Core library for analyzing sales call transcripts.
//!
//! Takes timestamped speech segments and produces a deterministic report:
//! talk metrics, filler and question counts, sentiment, discussion topics,
//! objections, next steps, and a composite call score.

pub mod analysis;
pub mod lexicon;
pub mod pipeline;
pub mod shared;
pub mod storage;
pub mod transcript;
