//! Conversation analysis
//!
//! [`Analyzer`] ties the pieces together:
//! - `engine`: per-author counts, average sentiment and extremes in one pass
//! - `nudges`: ordered threshold rules over the aggregates
//! - `notable`: labels for the most positive and most negative message
//!
//! Every call is self-contained. An `Analyzer` holds only immutable settings
//! and a shared scorer, so one instance can serve concurrent requests.

pub mod engine;
pub mod notable;
pub mod nudges;

use std::sync::Arc;

pub use engine::EngineOutput;
pub use engine::Extreme;
pub use engine::TopSpeaker;
pub use nudges::NudgeThresholds;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::config::AppConfig;
use crate::models::AnalysisResult;
use crate::models::Message;
use crate::sentiment::AfinnScorer;
use crate::sentiment::SentimentScorer;
use crate::Result;

/// What to do when the scorer returns an error for a message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreFailurePolicy {
    /// Fail the whole batch
    #[default]
    Abort,
    /// Count the message with a score of 0
    Neutral,
}

pub struct Analyzer {
    scorer: Arc<dyn SentimentScorer>,
    thresholds: NudgeThresholds,
    on_score_error: ScoreFailurePolicy,
}

impl Analyzer {
    /// Analyzer with default thresholds that aborts on scoring errors
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self {
            scorer,
            thresholds: NudgeThresholds::default(),
            on_score_error: ScoreFailurePolicy::Abort,
        }
    }

    pub fn with_config(scorer: Arc<dyn SentimentScorer>, config: &AnalysisConfig) -> Self {
        Self {
            scorer,
            thresholds: NudgeThresholds {
                dominance: config.dominance_threshold,
                negative: config.negative_threshold,
                positive: config.positive_threshold,
            },
            on_score_error: config.on_score_error,
        }
    }

    /// Production analyzer: AFINN scorer plus configured overrides and thresholds
    pub fn from_config(config: &AppConfig) -> Self {
        let scorer = AfinnScorer::with_overrides(config.sentiment.overrides.clone());
        Self::with_config(Arc::new(scorer), &config.analysis)
    }

    pub fn thresholds(&self) -> &NudgeThresholds {
        &self.thresholds
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Run the engine only, without nudges or labels
    pub fn run_engine(&self, messages: &[Message]) -> Result<EngineOutput> {
        engine::analyze(messages, self.scorer.as_ref(), self.on_score_error)
    }

    pub fn analyze(&self, messages: &[Message]) -> Result<AnalysisResult> {
        let output = self.run_engine(messages)?;

        let nudges = nudges::generate(
            &nudges::NudgeInputs {
                top_speaker: output.top_speaker.as_ref(),
                avg_sentiment: output.avg_sentiment,
                message_count: output.message_count,
            },
            &self.thresholds,
        );
        let notable_messages =
            notable::format_notable(output.most_positive.as_ref(), output.most_negative.as_ref());

        debug!(
            "Analyzed {} messages from {} authors: avg sentiment {:.3}, {} nudges",
            output.message_count,
            output.counts.len(),
            output.avg_sentiment,
            nudges.len()
        );

        Ok(AnalysisResult {
            counts: output.counts,
            avg_sentiment: output.avg_sentiment,
            nudges,
            notable_messages,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Arc::new(AfinnScorer::new()))
    }
}
