//! Built-in demo conversations selectable by name

use lazy_static::lazy_static;
use serde::Serialize;
use tracing::debug;
use tracing::warn;

use crate::models::Message;

/// A named, predefined message batch
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    pub messages: Vec<Message>,
}

fn scenario(name: &'static str, messages: &[(&str, &str)]) -> Scenario {
    Scenario {
        name,
        messages: messages
            .iter()
            .map(|(user, text)| Message::new(*user, *text))
            .collect(),
    }
}

lazy_static! {
    static ref SCENARIOS: Vec<Scenario> = vec![
        scenario(
            "Positive Team",
            &[
                ("Alice", "Great job everyone!"),
                ("Bob", "I’m feeling optimistic about this."),
                ("Alice", "Let’s keep up the good work."),
                ("Charlie", "This is really exciting!"),
            ],
        ),
        scenario(
            "Stressful Deadline",
            &[
                ("Alice", "We are running late on this."),
                ("Bob", "This is stressful, need help."),
                ("Charlie", "Let’s prioritize the blockers."),
                ("Alice", "We can still make it if we focus."),
            ],
        ),
        scenario(
            "Uneven Participation",
            &[
                ("Alice", "I think we should discuss the roadmap."),
                ("Alice", "Any thoughts?"),
                ("Alice", "I’m happy to take the lead."),
                ("Bob", "Looks good to me."),
            ],
        ),
    ];
}

/// All built-in scenarios, in catalog order
pub fn all() -> &'static [Scenario] {
    &SCENARIOS
}

/// Exact, case-sensitive lookup
pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

/// Pick the batch to analyze
///
/// A known scenario name replaces `supplied`. An unknown name is not an
/// error: the supplied messages are used unchanged.
pub fn resolve(name: Option<&str>, supplied: Vec<Message>) -> Vec<Message> {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return supplied;
    };

    match find(name) {
        Some(scenario) => {
            debug!("Using scenario '{}' ({} messages)", name, scenario.messages.len());
            scenario.messages.clone()
        }
        None => {
            warn!(
                "Unknown scenario '{}', analyzing the {} supplied messages instead",
                name,
                supplied.len()
            );
            supplied
        }
    }
}
