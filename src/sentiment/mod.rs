//! Sentiment scoring capability
//!
//! The analysis engine never builds a scorer itself; callers hand one in.
//! Production code uses [`AfinnScorer`], tests plug in deterministic stubs.

mod afinn;

pub use afinn::AfinnScorer;
pub use afinn::SentimentBreakdown;

use crate::Result;

/// Maps message text to a polarity score (higher = more positive, 0 = neutral)
///
/// Implementations must be deterministic for a given input so analysis
/// results stay reproducible.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<f64>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Plain functions and closures are scorers that never fail
impl<F> SentimentScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn score(&self, text: &str) -> Result<f64> {
        Ok(self(text))
    }

    fn name(&self) -> &'static str {
        "fn"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_closure_is_a_scorer() {
        let scorer = |text: &str| text.len() as f64;
        assert!((scorer.score("abcd").unwrap() - 4.0).abs() < f64::EPSILON);
        assert_eq!(SentimentScorer::name(&scorer), "fn");
    }

    #[test]
    fn test_scorer_as_trait_object() {
        let lexicon: Arc<dyn SentimentScorer> = Arc::new(AfinnScorer::new());
        let constant: Arc<dyn SentimentScorer> = Arc::new(|_: &str| -1.0);
        let scorers = [lexicon, constant];
        let scores: Vec<f64> = scorers
            .iter()
            .map(|s| s.score("great").unwrap())
            .collect();
        assert_eq!(scores, vec![3.0, -1.0]);
    }
}
