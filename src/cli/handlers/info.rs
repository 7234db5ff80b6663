//! Information display handlers

use crate::cli::output::*;
use crate::scenarios;
use crate::sentiment::AfinnScorer;
use crate::AppConfig;
use crate::Result;

pub async fn handle_scenarios_command() -> Result<()> {
    print_scenarios(scenarios::all());
    Ok(())
}

pub async fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}

pub async fn handle_score_command(config: &AppConfig, text: &str) -> Result<()> {
    let scorer = AfinnScorer::with_overrides(config.sentiment.overrides.clone());
    let breakdown = scorer.analyze(text);
    print_breakdown(text, &breakdown);

    if breakdown.positive.is_empty() && breakdown.negative.is_empty() {
        print_info(&format!(
            "No words matched the lexicon ({} entries)",
            AfinnScorer::lexicon_size()
        ));
    }
    Ok(())
}
