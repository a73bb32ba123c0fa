// Rust guideline compliant 2026-10-16

//! Output formatting module for the Ruru CLI.
//!
//! This module formats resolution results in the supported output formats
//! (JSON and plain text).

use crate::response::{ErrorEnvelope, SuccessEnvelope};
use ruru_core::{MatchOutcome, OutputFormat, Resolved};
use serde_json::json;
use std::collections::BTreeMap;

/// Output formatter trait.
///
/// Defines the interface for formatting command results in different output formats.
pub trait OutputFormatter {
    /// Formats the value(s) an argument resolved to.
    fn format_resolved(&self, resolved: &Resolved) -> String;

    /// Formats a raw matcher outcome against the table it was computed on.
    fn format_outcome(&self, query: &str, outcome: MatchOutcome, table: &[String]) -> String;

    /// Formats the configured choice sets.
    fn format_sets(&self, sets: &BTreeMap<String, Vec<String>>) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &ErrorEnvelope) -> String;

    /// Whether errors belong on stdout rather than stderr.
    fn errors_to_stdout(&self) -> bool {
        false
    }
}

/// JSON output formatter.
///
/// Wraps results in envelopes for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_resolved(&self, resolved: &Resolved) -> String {
        let result = match resolved {
            Resolved::Single(value) => json!(value),
            Resolved::Many(values) => json!(values),
        };
        Self::render(&SuccessEnvelope::new(result))
    }

    fn format_outcome(&self, query: &str, outcome: MatchOutcome, table: &[String]) -> String {
        let result = match outcome {
            MatchOutcome::Unique(index) => json!({
                "outcome": "unique",
                "index": index,
                "choice": table[index],
            }),
            MatchOutcome::Ambiguous => json!({
                "outcome": "ambiguous",
                "matches": ruru_core::prefix_matches(query, table),
            }),
            MatchOutcome::NoMatch => json!({ "outcome": "no_match" }),
        };
        Self::render(&SuccessEnvelope::new(result))
    }

    fn format_sets(&self, sets: &BTreeMap<String, Vec<String>>) -> String {
        Self::render(&SuccessEnvelope::new(json!({
            "sets": sets,
            "total": sets.len(),
        })))
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        Self::render(error)
    }

    fn errors_to_stdout(&self) -> bool {
        true
    }
}

/// Plain text output formatter.
///
/// One value per line, suitable for shell pipelines.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_resolved(&self, resolved: &Resolved) -> String {
        match resolved {
            Resolved::Single(value) => value.clone(),
            Resolved::Many(values) => values.join("\n"),
        }
    }

    fn format_outcome(&self, _query: &str, outcome: MatchOutcome, table: &[String]) -> String {
        match outcome {
            MatchOutcome::Unique(index) => format!("unique {} {}", index, table[index]),
            MatchOutcome::Ambiguous => "ambiguous".to_string(),
            MatchOutcome::NoMatch => "no match".to_string(),
        }
    }

    fn format_sets(&self, sets: &BTreeMap<String, Vec<String>>) -> String {
        if sets.is_empty() {
            return "No sets configured.".to_string();
        }

        sets.iter()
            .map(|(name, choices)| format!("{}: {}", name, choices.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_error(&self, error: &ErrorEnvelope) -> String {
        error.message.clone()
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
