//! Batch analysis from the command line

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::analysis::Analyzer;
use crate::cli::output::print_analysis;
use crate::cli::output::print_warning;
use crate::models::AnalyseRequest;
use crate::models::AnalysisResult;
use crate::models::Message;
use crate::scenarios;
use crate::AppConfig;
use crate::Result;

/// Accepted input documents
#[derive(Deserialize)]
#[serde(untagged)]
enum AnalyzeInput {
    Request(AnalyseRequest),
    Messages(Vec<Message>),
}

/// Parse an input document into a request; `scenario` overrides any scenarioName in it
pub fn parse_request(input: &str, scenario: Option<String>) -> Result<AnalyseRequest> {
    let mut request = if input.trim().is_empty() {
        AnalyseRequest::default()
    } else {
        match serde_json::from_str::<AnalyzeInput>(input) {
            Ok(AnalyzeInput::Request(request)) => request,
            Ok(AnalyzeInput::Messages(messages)) => AnalyseRequest {
                messages,
                scenario_name: None,
            },
            // Re-parse as a request to surface a precise error message
            Err(_) => serde_json::from_str::<AnalyseRequest>(input)?,
        }
    };

    if scenario.is_some() {
        request.scenario_name = scenario;
    }
    request.validate()?;
    Ok(request)
}

/// Resolve the scenario of an already validated request and analyze
pub fn run_analysis(analyzer: &Analyzer, request: AnalyseRequest) -> Result<AnalysisResult> {
    let messages = request.into_messages();
    analyzer.analyze(&messages)
}

fn read_input(file: Option<&Path>, scenario_only: bool) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        // With only a scenario there is nothing to read
        None if scenario_only => Ok(String::new()),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

pub async fn handle_analyze_command(
    config: &AppConfig,
    file: Option<&Path>,
    scenario: Option<String>,
    json: bool,
) -> Result<()> {
    let input = read_input(file, scenario.is_some())?;
    let request = parse_request(&input, scenario)?;
    if let Some(name) = request.scenario_name.as_deref() {
        if scenarios::find(name).is_none() {
            print_warning(&format!(
                "Unknown scenario '{name}', analyzing the supplied messages instead"
            ));
        }
    }
    info!(
        "Analyzing {} supplied messages (scenario: {})",
        request.messages.len(),
        request.scenario_name.as_deref().unwrap_or("-")
    );

    let analyzer = Analyzer::from_config(config);
    let result = run_analysis(&analyzer, request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_analysis(&result);
    }
    Ok(())
}
