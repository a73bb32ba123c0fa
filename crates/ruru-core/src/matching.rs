// Rust guideline compliant 2026-10-16

//! Partial (prefix) matching of a query against a candidate table.
//!
//! The precedence is fixed:
//!
//! - An empty query matches nothing
//! - An exact match wins, at the index of its first occurrence
//! - Otherwise the query must be a prefix of exactly one candidate

use std::collections::HashSet;

/// Outcome of matching one query against a candidate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A single candidate matched, at this index.
    Unique(usize),
    /// Two or more candidates start with the query and none equals it.
    Ambiguous,
    /// No candidate matched.
    NoMatch,
}

impl MatchOutcome {
    /// Returns the matched index for a unique match.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            MatchOutcome::Unique(index) => Some(index),
            MatchOutcome::Ambiguous | MatchOutcome::NoMatch => None,
        }
    }
}

/// Matches `query` against `table` using exact-then-prefix precedence.
///
/// Comparison is case-sensitive and byte-wise. The table is used as given;
/// callers that need duplicate-free semantics should pass it through
/// [`dedup_choices`] first.
///
/// # Arguments
///
/// * `query` - The (possibly abbreviated) string to look up
/// * `table` - Candidate strings, in order
///
/// # Returns
///
/// The [`MatchOutcome`] for the query.
pub fn pmatch<S: AsRef<str>>(query: &str, table: &[S]) -> MatchOutcome {
    if query.is_empty() {
        return MatchOutcome::NoMatch;
    }

    let names = table.iter().map(AsRef::<str>::as_ref);

    if let Some(index) = names.clone().position(|c| c == query) {
        tracing::trace!(query, index, "exact match");
        return MatchOutcome::Unique(index);
    }

    let mut prefixed = names
        .enumerate()
        .filter(|(_, c)| c.starts_with(query))
        .map(|(i, _)| i);

    let outcome = match (prefixed.next(), prefixed.next()) {
        (None, _) => MatchOutcome::NoMatch,
        (Some(index), None) => MatchOutcome::Unique(index),
        (Some(_), Some(_)) => MatchOutcome::Ambiguous,
    };
    tracing::trace!(query, ?outcome, "prefix match");
    outcome
}

/// Returns every candidate that starts with `query`, in table order.
pub fn prefix_matches<'a, S: AsRef<str>>(query: &str, table: &'a [S]) -> Vec<&'a str> {
    table
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|c| c.starts_with(query))
        .collect()
}

/// Removes duplicate choices, keeping the first occurrence of each.
pub fn dedup_choices<S: AsRef<str>>(choices: &[S]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(choices.len());
    choices
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|c| seen.insert(*c))
        .collect()
}
