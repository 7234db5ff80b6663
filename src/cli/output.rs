//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the `TeamPulse` CLI

use crate::models::AnalysisResult;
use crate::scenarios::Scenario;
use crate::sentiment::SentimentBreakdown;
use crate::AppConfig;

/// Safely truncate a string at character boundary (not byte boundary)
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Horizontal bar proportional to `count / max`, `width` cells at most
#[must_use]
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = (count * width).div_ceil(max);
    "█".repeat(cells)
}

/// Render an analysis result as a plain-text report
#[must_use]
pub fn format_analysis(result: &AnalysisResult) -> String {
    let total = result.message_count();
    let mut out = String::new();

    out.push_str(&format!("📊 {total} messages from {} authors\n", result.counts.len()));
    out.push('\n');

    out.push_str("👥 Participation:\n");
    let max = result.counts.values().copied().max().unwrap_or(0);
    let name_width = result.counts.keys().map(|u| u.chars().count()).max().unwrap_or(0);
    for (user, count) in &result.counts {
        let share = *count as f64 * 100.0 / total as f64;
        out.push_str(&format!(
            "  {user:<name_width$} {count:>4} ({share:>5.1}%) {}\n",
            bar(*count, max, 20)
        ));
    }
    out.push('\n');

    out.push_str(&format!("💬 Average sentiment: {:.2}\n", result.avg_sentiment));
    out.push('\n');

    if result.nudges.is_empty() {
        out.push_str("💡 Nudges: none\n");
    } else {
        out.push_str("💡 Nudges:\n");
        for nudge in &result.nudges {
            out.push_str(&format!("  {nudge}\n"));
        }
    }

    if !result.notable_messages.is_empty() {
        out.push('\n');
        out.push_str("📌 Notable messages:\n");
        for label in &result.notable_messages {
            out.push_str(&format!("  {}\n", truncate_str(label, 120)));
        }
    }

    out
}

pub fn print_analysis(result: &AnalysisResult) {
    print!("{}", format_analysis(result));
}

pub fn print_breakdown(text: &str, breakdown: &SentimentBreakdown) {
    println!("📝 \"{}\"", truncate_str(text, 80));
    println!("  Score: {}", breakdown.score);
    println!("  Comparative: {:.3}", breakdown.comparative);
    println!("  Tokens: {}", breakdown.tokens.len());
    if !breakdown.positive.is_empty() {
        println!("  👍 Positive words: {}", breakdown.positive.join(", "));
    }
    if !breakdown.negative.is_empty() {
        println!("  👎 Negative words: {}", breakdown.negative.join(", "));
    }
}

pub fn print_scenarios(scenarios: &[Scenario]) {
    println!("📚 {} built-in scenarios:", scenarios.len());
    for scenario in scenarios {
        println!("  - {} ({} messages)", scenario.name, scenario.messages.len());
        for message in &scenario.messages {
            println!("      {}: {}", message.user, truncate_str(&message.text, 60));
        }
    }
}

pub fn print_config(config: &AppConfig) {
    println!("📋 TeamPulse Configuration:");
    println!();

    println!("🌐 Server:");
    println!("  Address: {}", config.bind_address());
    println!("  CORS: {}", config.cors_enabled());
    println!("  Request timeout: {}s", config.request_timeout());
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Backtrace: {}", config.logging.backtrace);
    println!("  Log to file: {}", config.logging.log_to_file);
    println!();

    println!("🧮 Analysis:");
    println!("  Dominance threshold: {}", config.analysis.dominance_threshold);
    println!("  Negative threshold: {}", config.analysis.negative_threshold);
    println!("  Positive threshold: {}", config.analysis.positive_threshold);
    println!("  On score error: {:?}", config.analysis.on_score_error);
    println!();

    println!("📖 Sentiment:");
    println!("  Lexicon overrides: {}", config.sentiment.overrides.len());
}

pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}
