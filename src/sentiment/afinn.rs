//! AFINN lexicon scorer
//!
//! Sums the AFINN score (-5..+5) of every known word in a message. A word
//! directly preceded by a negator ("not", "don't", ...) counts with its sign
//! flipped, so "not sure" scores -1 instead of +1.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

use super::SentimentScorer;
use crate::Result;

// Load AFINN sentiment lexicon at compile time
const AFINN_LEXICON: &str = include_str!("../../data/afinn.txt");

const NEGATORS: &[&str] = &[
    "ain't", "aint", "aren't", "arent", "cannot", "can't", "cant", "couldn't", "couldnt",
    "didn't", "didnt", "doesn't", "doesnt", "don't", "dont", "hadn't", "hadnt", "hasn't",
    "hasnt", "haven't", "havent", "isn't", "isnt", "mightn't", "mustn't", "needn't", "neither",
    "never", "no", "none", "nope", "nor", "not", "nothing", "nowhere", "shouldn't", "shouldnt",
    "wasn't", "wasnt", "weren't", "werent", "without", "won't", "wont", "wouldn't", "wouldnt",
    "rarely", "seldom", "despite",
];

lazy_static! {
    /// AFINN sentiment scores (-5 to +5)
    static ref AFINN_SCORES: HashMap<String, i8> = {
        let mut map = HashMap::new();
        for line in AFINN_LEXICON.lines() {
            if let Some((word, score_str)) = line.split_once('\t') {
                if let Ok(score) = score_str.trim().parse::<i8>() {
                    map.insert(word.to_lowercase(), score);
                }
            }
        }
        map
    };
}

/// Per-text scoring details
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentBreakdown {
    /// Sum of all token scores
    pub score: i32,
    /// Score divided by the number of tokens
    pub comparative: f64,
    pub tokens: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Lexicon scorer with optional per-word overrides
#[derive(Debug, Clone, Default)]
pub struct AfinnScorer {
    overrides: HashMap<String, i8>,
}

impl AfinnScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores in `overrides` take precedence over the built-in lexicon
    pub fn with_overrides(overrides: HashMap<String, i8>) -> Self {
        let overrides = overrides
            .into_iter()
            .map(|(word, score)| (word.to_lowercase(), score))
            .collect();
        Self { overrides }
    }

    /// Number of words in the built-in lexicon
    pub fn lexicon_size() -> usize {
        AFINN_SCORES.len()
    }

    fn word_score(&self, word: &str) -> Option<i8> {
        self.overrides
            .get(word)
            .or_else(|| AFINN_SCORES.get(word))
            .copied()
    }

    /// Score `text` and report which words contributed
    pub fn analyze(&self, text: &str) -> SentimentBreakdown {
        let tokens = tokenize(text);
        let mut breakdown = SentimentBreakdown::default();

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut score) = self.word_score(token) else {
                continue;
            };
            if i > 0 && NEGATORS.contains(&tokens[i - 1].as_str()) {
                score = -score;
            }

            breakdown.score += i32::from(score);
            if score > 0 {
                breakdown.positive.push(token.clone());
            } else if score < 0 {
                breakdown.negative.push(token.clone());
            }
        }

        if !tokens.is_empty() {
            breakdown.comparative = f64::from(breakdown.score) / tokens.len() as f64;
        }
        breakdown.tokens = tokens;
        breakdown
    }
}

impl SentimentScorer for AfinnScorer {
    fn score(&self, text: &str) -> Result<f64> {
        Ok(f64::from(self.analyze(text).score))
    }

    fn name(&self) -> &'static str {
        "afinn"
    }
}

/// Lowercase, blank out punctuation (apostrophes and hyphens survive), split
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2019}' => '\'',
            c if c.is_alphanumeric() || c.is_whitespace() || c == '\'' || c == '-' => c,
            _ => ' ',
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
