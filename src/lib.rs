//! TeamPulse: conversation analysis for group chats
//!
//! Given an ordered batch of messages, [`Analyzer`] reports per-author
//! message counts, the average sentiment, advisory nudges and the most
//! positive and most negative message. Scoring is pluggable through
//! [`SentimentScorer`]; [`AfinnScorer`] is the lexicon-based default.

pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod scenarios;
pub mod sentiment;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod models_tests;

pub use analysis::Analyzer;
pub use config::AppConfig;
pub use errors::*;
pub use models::AnalyseRequest;
pub use models::AnalysisResult;
pub use models::Message;
pub use sentiment::AfinnScorer;
pub use sentiment::SentimentScorer;
