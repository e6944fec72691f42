//! Fixed term tables and compiled matchers behind the analysis engine.
//!
//! Keyword tables are `const` slices in scan order. The stop-word list and
//! the sentiment polarity weights are embedded text resources parsed once
//! into a process-wide read-only [`Lexicon`]. Analysis never performs I/O;
//! a malformed embedded resource is the engine's only internal fault.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Filler terms counted over the flattened transcript, whole-word matches.
pub const FILLER_TERMS: &[&str] = &[
    "um",
    "uh",
    "like",
    "you know",
    "sort of",
    "kind of",
    "i mean",
    "basically",
    "actually",
    "literally",
    "right",
    "okay",
    "so",
];

/// Words that open a question when the sentence carries no `?`.
pub const QUESTION_WORDS: &[&str] = &[
    "what", "when", "where", "who", "why", "how", "which", "can", "could", "would", "should",
];

/// Objection cues in scan order; the first cue found in a sentence wins.
pub const OBJECTION_KEYWORDS: &[&str] = &[
    "expensive",
    "cost",
    "price",
    "budget",
    "afford",
    "think about it",
    "not sure",
    "concern",
    "worried",
    "competitor",
    "already have",
    "not interested",
];

/// Next-step cues in scan order.
pub const NEXT_STEP_KEYWORDS: &[&str] = &[
    "next step",
    "follow up",
    "schedule",
    "meeting",
    "call",
    "demo",
    "trial",
    "contract",
    "proposal",
    "sign",
];

const STOP_WORDS: &str = include_str!("stop_words.txt");
const SENTIMENT_WEIGHTS: &str = include_str!("sentiment_lexicon.txt");

#[derive(Error, Debug, Clone)]
pub enum LexiconError {
    #[error("failed to compile matcher '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("malformed sentiment entry at line {line}: '{entry}'")]
    SentimentEntry { line: usize, entry: String },
}

/// Immutable lexicon shared by every analysis run.
///
/// Holds the stop-word set, the sentiment weight map, and the compiled
/// matchers (per-filler whole-word patterns, sentence splitter, word
/// tokenizer). Built once behind a `Lazy`; read-only afterwards, so
/// concurrent analyses share it freely.
pub struct Lexicon {
    stop_words: HashSet<&'static str>,
    sentiment_weights: HashMap<&'static str, i64>,
    filler_matchers: Vec<Regex>,
    sentence_matcher: Regex,
    word_matcher: Regex,
}

static SHARED: Lazy<Result<Lexicon, LexiconError>> = Lazy::new(Lexicon::load);

impl Lexicon {
    /// The process-wide lexicon, parsed and compiled on first use.
    pub fn shared() -> Result<&'static Lexicon, LexiconError> {
        SHARED.as_ref().map_err(Clone::clone)
    }

    fn load() -> Result<Self, LexiconError> {
        let stop_words = STOP_WORDS
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut sentiment_weights = HashMap::new();
        for (idx, line) in SENTIMENT_WEIGHTS.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let entry = || LexiconError::SentimentEntry {
                line: idx + 1,
                entry: line.to_string(),
            };
            let (word, weight) = line.split_once('\t').ok_or_else(entry)?;
            let weight: i64 = weight.trim().parse().map_err(|_| entry())?;
            sentiment_weights.insert(word.trim(), weight);
        }

        let mut filler_matchers = Vec::with_capacity(FILLER_TERMS.len());
        for term in FILLER_TERMS {
            filler_matchers.push(compile(&format!(r"\b{term}\b"))?);
        }

        // A sentence is a run of non-terminators plus any attached
        // terminators; a trailing unterminated run still counts.
        let sentence_matcher = compile(r"[^.!?]+[.!?]*")?;
        // Word tokens are alphanumeric runs over lower-cased text.
        let word_matcher = compile(r"[a-z0-9]+")?;

        Ok(Self {
            stop_words,
            sentiment_weights,
            filler_matchers,
            sentence_matcher,
            word_matcher,
        })
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Polarity weight of a word; unknown words weigh 0.
    pub fn sentiment_weight(&self, word: &str) -> i64 {
        self.sentiment_weights.get(word).copied().unwrap_or(0)
    }

    /// Compiled whole-word matchers, one per [`FILLER_TERMS`] entry, in
    /// table order.
    pub fn filler_matchers(&self) -> &[Regex] {
        &self.filler_matchers
    }

    pub fn sentence_matcher(&self) -> &Regex {
        &self.sentence_matcher
    }

    pub fn word_matcher(&self) -> &Regex {
        &self.word_matcher
    }
}

fn compile(pattern: &str) -> Result<Regex, LexiconError> {
    Regex::new(pattern).map_err(|e| LexiconError::Pattern {
        pattern: pattern.to_string(),
        source: e,
    })
}
