// Rust guideline compliant 2026-10-16

//! Implementation of the `ruru pmatch` command.
//!
//! Runs the raw prefix matcher. The table is used as given, without
//! removing duplicates, and "no match" is a result rather than an error.

use crate::OutputFormatter;
use anyhow::Result;
use ruru_core::pmatch;

/// Matches `query` against `table` and prints the outcome.
///
/// # Errors
///
/// This command does not fail; the signature matches the other commands.
pub fn execute(query: &str, table: &[String], formatter: &dyn OutputFormatter) -> Result<()> {
    let outcome = pmatch(query, table);
    tracing::info!(query, ?outcome, "pmatch");
    println!("{}", formatter.format_outcome(query, outcome, table));
    Ok(())
}
