use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::Result;
use crate::TeamPulseError;

/// A single chat message: who said what
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub user: String,
    pub text: String,
}

impl Message {
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            text: text.into(),
        }
    }
}

/// Message count per author, in first-appearance order
pub type AuthorCounts = IndexMap<String, usize>;

/// Body of `POST /api/analyse`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyseRequest {
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_name: Option<String>,
}

impl AnalyseRequest {
    /// Reject requests that are well-typed JSON but still unusable
    ///
    /// Shape errors (missing fields, wrong types) are caught by deserialization;
    /// this covers the remaining constraint that every author is named.
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self.messages.iter().position(|m| m.user.is_empty()) {
            return Err(TeamPulseError::InvalidRequest(format!(
                "messages[{index}].user must be a non-empty string"
            )));
        }
        Ok(())
    }

    /// The batch to analyze, after applying `scenarioName`
    pub fn into_messages(self) -> Vec<Message> {
        crate::scenarios::resolve(self.scenario_name.as_deref(), self.messages)
    }
}

/// Final output of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub counts: AuthorCounts,
    pub avg_sentiment: f64,
    pub nudges: Vec<String>,
    #[serde(default)]
    pub notable_messages: Vec<String>,
}

impl AnalysisResult {
    /// Number of messages the result was computed from
    pub fn message_count(&self) -> usize {
        self.counts.values().sum()
    }
}
