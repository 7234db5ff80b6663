//! Advisory nudges derived from batch aggregates
//!
//! Rules live in an ordered table and are all evaluated, top to bottom. The
//! output order is the table order, never the order of the input messages.

use super::engine::TopSpeaker;

pub const INVITE_QUIETER_MEMBERS: &str = "👥 Invite quieter members to contribute.";
pub const NEGATIVE_TONE: &str = "😟 Tone seems negative – consider a break.";
pub const POSITIVE_ENERGY: &str = "😊 Positive energy detected – keep it up!";

/// Aggregates a nudge rule may look at
#[derive(Debug, Clone, Copy)]
pub struct NudgeInputs<'a> {
    pub top_speaker: Option<&'a TopSpeaker>,
    pub avg_sentiment: f64,
    pub message_count: usize,
}

/// All comparisons are strict: a value equal to its threshold never fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NudgeThresholds {
    pub dominance: f64,
    pub negative: f64,
    pub positive: f64,
}

impl Default for NudgeThresholds {
    fn default() -> Self {
        Self {
            dominance: 0.7,
            negative: 0.0,
            positive: 1.0,
        }
    }
}

struct NudgeRule {
    name: &'static str,
    applies: fn(&NudgeInputs<'_>, &NudgeThresholds) -> bool,
    message: &'static str,
}

const RULES: &[NudgeRule] = &[
    NudgeRule {
        name: "dominant_speaker",
        applies: |inputs: &NudgeInputs<'_>, t: &NudgeThresholds| {
            inputs
                .top_speaker
                .is_some_and(|s| s.share_of(inputs.message_count) > t.dominance)
        },
        message: INVITE_QUIETER_MEMBERS,
    },
    NudgeRule {
        name: "negative_tone",
        applies: |inputs: &NudgeInputs<'_>, t: &NudgeThresholds| inputs.avg_sentiment < t.negative,
        message: NEGATIVE_TONE,
    },
    NudgeRule {
        name: "positive_energy",
        applies: |inputs: &NudgeInputs<'_>, t: &NudgeThresholds| inputs.avg_sentiment > t.positive,
        message: POSITIVE_ENERGY,
    },
];

/// Evaluate every rule against `inputs`; an empty batch yields nothing
pub fn generate(inputs: &NudgeInputs<'_>, thresholds: &NudgeThresholds) -> Vec<String> {
    if inputs.message_count == 0 {
        return Vec::new();
    }

    RULES
        .iter()
        .filter(|rule| (rule.applies)(inputs, thresholds))
        .inspect(|rule| tracing::debug!("Nudge rule '{}' fired", rule.name))
        .map(|rule| rule.message.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speaker(count: usize) -> TopSpeaker {
        TopSpeaker {
            user: "Alice".to_string(),
            count,
        }
    }

    fn run(top: Option<&TopSpeaker>, avg: f64, n: usize) -> Vec<String> {
        generate(
            &NudgeInputs {
                top_speaker: top,
                avg_sentiment: avg,
                message_count: n,
            },
            &NudgeThresholds::default(),
        )
    }

    #[test]
    fn test_empty_batch_has_no_nudges() {
        assert!(run(None, -3.0, 0).is_empty());
    }

    #[test]
    fn test_dominance_is_strict() {
        let s = speaker(7);
        assert!(run(Some(&s), 0.5, 10).is_empty());

        let s = speaker(8);
        assert_eq!(run(Some(&s), 0.5, 10), vec![INVITE_QUIETER_MEMBERS]);
    }

    #[test]
    fn test_sentiment_boundaries_do_not_fire() {
        let s = speaker(1);
        assert!(run(Some(&s), 0.0, 2).is_empty());
        assert!(run(Some(&s), 1.0, 2).is_empty());
        assert_eq!(run(Some(&s), -0.01, 2), vec![NEGATIVE_TONE]);
        assert_eq!(run(Some(&s), 1.01, 2), vec![POSITIVE_ENERGY]);
    }

    #[test]
    fn test_rules_are_independent_and_ordered() {
        let s = speaker(10);
        assert_eq!(
            run(Some(&s), -2.0, 10),
            vec![INVITE_QUIETER_MEMBERS, NEGATIVE_TONE]
        );
        assert_eq!(
            run(Some(&s), 2.0, 10),
            vec![INVITE_QUIETER_MEMBERS, POSITIVE_ENERGY]
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let s = speaker(6);
        let inputs = NudgeInputs {
            top_speaker: Some(&s),
            avg_sentiment: 0.5,
            message_count: 10,
        };
        let thresholds = NudgeThresholds {
            dominance: 0.5,
            negative: 1.0,
            positive: 3.0,
        };
        assert_eq!(
            generate(&inputs, &thresholds),
            vec![INVITE_QUIETER_MEMBERS, NEGATIVE_TONE]
        );
    }
}
