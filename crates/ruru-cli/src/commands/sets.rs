// Rust guideline compliant 2026-10-16

//! Implementation of the `ruru sets` command.

use crate::OutputFormatter;
use anyhow::Result;
use ruru_core::Config;

/// Lists the choice sets defined in the configuration.
///
/// # Errors
///
/// This command does not fail; the signature matches the other commands.
pub fn execute(config: &Config, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", formatter.format_sets(&config.sets));
    Ok(())
}
