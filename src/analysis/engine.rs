//! Single pass over a message batch: counts, running sentiment, extremes

use serde::Serialize;
use tracing::warn;

use super::ScoreFailurePolicy;
use crate::models::AuthorCounts;
use crate::models::Message;
use crate::sentiment::SentimentScorer;
use crate::Result;
use crate::TeamPulseError;

/// The most positive or most negative message of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extreme {
    pub user: String,
    pub text: String,
    pub score: f64,
}

impl Extreme {
    fn from_message(message: &Message, score: f64) -> Self {
        Self {
            user: message.user.clone(),
            text: message.text.clone(),
            score,
        }
    }
}

/// Author with the most messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopSpeaker {
    pub user: String,
    pub count: usize,
}

impl TopSpeaker {
    /// Fraction of the batch written by this author
    pub fn share_of(&self, message_count: usize) -> f64 {
        if message_count == 0 {
            0.0
        } else {
            self.count as f64 / message_count as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineOutput {
    pub counts: AuthorCounts,
    pub avg_sentiment: f64,
    pub most_positive: Option<Extreme>,
    pub most_negative: Option<Extreme>,
    pub top_speaker: Option<TopSpeaker>,
    pub message_count: usize,
}

/// Analyze `messages` in input order with the given scorer
///
/// Extremes only move on a strictly better score, so the earliest message
/// wins a tie.
pub fn analyze(
    messages: &[Message],
    scorer: &dyn SentimentScorer,
    policy: ScoreFailurePolicy,
) -> Result<EngineOutput> {
    let mut counts = AuthorCounts::new();
    let mut total = 0.0;
    let mut most_positive: Option<Extreme> = None;
    let mut most_negative: Option<Extreme> = None;

    for (index, message) in messages.iter().enumerate() {
        *counts.entry(message.user.clone()).or_insert(0) += 1;

        let scored = scorer.score(&message.text).and_then(|score| {
            if score.is_finite() {
                Ok(score)
            } else {
                Err(TeamPulseError::Custom(format!("non-finite score {score}")))
            }
        });
        let score = match scored {
            Ok(score) => score,
            Err(e) => match policy {
                ScoreFailurePolicy::Abort => {
                    return Err(TeamPulseError::Scoring {
                        index,
                        reason: e.to_string(),
                    });
                }
                ScoreFailurePolicy::Neutral => {
                    warn!(
                        "Scorer '{}' failed on message {}, counting it as neutral: {}",
                        scorer.name(),
                        index,
                        e
                    );
                    0.0
                }
            },
        };
        total += score;

        if most_negative.as_ref().map_or(true, |m| score < m.score) {
            most_negative = Some(Extreme::from_message(message, score));
        }
        if most_positive.as_ref().map_or(true, |m| score > m.score) {
            most_positive = Some(Extreme::from_message(message, score));
        }
    }

    let message_count = messages.len();
    let avg_sentiment = if message_count > 0 {
        total / message_count as f64
    } else {
        0.0
    };

    Ok(EngineOutput {
        top_speaker: top_speaker(&counts),
        counts,
        avg_sentiment,
        most_positive,
        most_negative,
        message_count,
    })
}

/// Highest count wins; among equals the author seen first
pub fn top_speaker(counts: &AuthorCounts) -> Option<TopSpeaker> {
    let mut best: Option<(&String, usize)> = None;
    for (user, &count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((user, count));
        }
    }
    best.map(|(user, count)| TopSpeaker {
        user: user.clone(),
        count,
    })
}
