// Rust guideline compliant 2026-10-16

//! Implementation of the `ruru match` command.
//!
//! Resolves one or more arguments against a choice list given on the
//! command line or taken from a configured set.

use crate::OutputFormatter;
use anyhow::Result;
use ruru_core::{match_arg, Config, Query};

/// Where the candidate choices come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceSource {
    /// Choices listed on the command line.
    Inline(Vec<String>),
    /// A named set from the configuration, possibly abbreviated.
    Set(String),
}

impl ChoiceSource {
    /// Returns the candidate choices for this source.
    ///
    /// # Errors
    ///
    /// Returns an error if a set name does not resolve to exactly one set.
    pub fn choices(&self, config: &Config) -> ruru_core::Result<Vec<String>> {
        match self {
            ChoiceSource::Inline(choices) => Ok(choices.clone()),
            ChoiceSource::Set(name) => config.choices(name).map(<[String]>::to_vec),
        }
    }
}

/// Builds the query for the given arguments.
///
/// A single argument is a single query unless `batch` is set; several
/// arguments are always a batch.
pub fn build_query(mut args: Vec<String>, batch: bool) -> Query {
    if args.len() == 1 && !batch {
        Query::Single(args.remove(0))
    } else {
        Query::Batch(args)
    }
}

/// Resolves arguments and prints the result.
///
/// # Arguments
///
/// * `args` - The arguments to resolve
/// * `source` - Where the choices come from
/// * `several_ok` - Whether several results (and batches) are accepted
/// * `batch` - Treat a single argument as a one-element batch
/// * `config` - Loaded configuration
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The set name is unknown or ambiguous
/// - An argument matches no choice
/// - An argument is ambiguous and several results are not accepted
/// - Several arguments are given without `several_ok`
pub fn execute(
    args: Vec<String>,
    source: &ChoiceSource,
    several_ok: bool,
    batch: bool,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let choices = source.choices(config)?;
    let query = build_query(args, batch);
    tracing::info!(?query, choices = choices.len(), several_ok, "resolving");

    let resolved = match_arg(query, &choices, several_ok)?;
    println!("{}", formatter.format_resolved(&resolved));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_single() {
        assert_eq!(
            build_query(vec!["ban".to_string()], false),
            Query::Single("ban".to_string())
        );
    }

    #[test]
    fn test_build_query_forced_batch() {
        assert_eq!(
            build_query(vec!["ban".to_string()], true),
            Query::Batch(vec!["ban".to_string()])
        );
    }

    #[test]
    fn test_build_query_many_args_is_batch() {
        let query = build_query(vec!["a".to_string(), "b".to_string()], false);
        assert!(matches!(query, Query::Batch(ref args) if args.len() == 2));
    }

    #[test]
    fn test_set_source_resolves_abbreviation() {
        let mut config = Config::default();
        config.sets.insert(
            "alerts".to_string(),
            vec!["info".to_string(), "warning".to_string()],
        );
        let choices = ChoiceSource::Set("al".to_string())
            .choices(&config)
            .unwrap();
        assert_eq!(choices, vec!["info", "warning"]);
    }

    #[test]
    fn test_unknown_set_source() {
        let config = Config::default();
        assert!(ChoiceSource::Set("themes".to_string())
            .choices(&config)
            .is_err());
    }
}
