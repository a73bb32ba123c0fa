// Rust guideline compliant 2026-10-16

//! Argument resolution on top of [`pmatch`].
//!
//! A [`Query`] is resolved against a list of choices under a several-ok
//! policy:
//!
//! - Without several-ok, a single argument must resolve to exactly one choice
//! - With several-ok, ambiguity yields every prefix match and batches are allowed
//! - No match is always an error

use crate::matching::{dedup_choices, pmatch, prefix_matches, MatchOutcome};
use crate::{Error, Result};

/// An argument to resolve: one string or a batch of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// A single argument.
    Single(String),
    /// Several arguments, resolved independently and in order.
    Batch(Vec<String>),
}

impl From<&str> for Query {
    fn from(arg: &str) -> Self {
        Query::Single(arg.to_string())
    }
}

impl From<String> for Query {
    fn from(arg: String) -> Self {
        Query::Single(arg)
    }
}

impl From<Vec<String>> for Query {
    fn from(args: Vec<String>) -> Self {
        Query::Batch(args)
    }
}

impl From<Vec<&str>> for Query {
    fn from(args: Vec<&str>) -> Self {
        Query::Batch(args.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Query {
    fn from(args: &[&str]) -> Self {
        Query::Batch(args.iter().map(|a| a.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Query {
    fn from(args: [&str; N]) -> Self {
        Query::Batch(args.iter().map(|a| a.to_string()).collect())
    }
}

/// The value an argument resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Exactly one choice (several-ok disabled).
    Single(String),
    /// Zero or more choices (several-ok enabled).
    Many(Vec<String>),
}

impl Resolved {
    /// Returns the resolved choices as a list, regardless of shape.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Resolved::Single(value) => vec![value],
            Resolved::Many(values) => values,
        }
    }
}

/// Resolves `query` against `choices`.
///
/// Choices are deduplicated first, keeping first occurrences.
///
/// # Arguments
///
/// * `query` - A single argument or a batch of arguments
/// * `choices` - The valid values
/// * `several_ok` - Whether ambiguous and batch input may yield several values
///
/// # Returns
///
/// [`Resolved::Single`] when `several_ok` is false, otherwise
/// [`Resolved::Many`]. Batch results are flattened in input order without
/// removing duplicates.
///
/// # Errors
///
/// Returns an error if:
/// - An argument matches no choice
/// - An argument is ambiguous and `several_ok` is false
/// - A batch is given and `several_ok` is false
/// - Any batch element fails (the first failure aborts the batch)
pub fn match_arg<S: AsRef<str>>(
    query: impl Into<Query>,
    choices: &[S],
    several_ok: bool,
) -> Result<Resolved> {
    let choices = dedup_choices(choices);

    match (query.into(), several_ok) {
        (Query::Single(arg), false) => resolve_one(&arg, &choices).map(Resolved::Single),
        (Query::Single(arg), true) => resolve_several(&arg, &choices).map(Resolved::Many),
        (Query::Batch(_), false) => Err(Error::BatchNotAllowed),
        (Query::Batch(args), true) => resolve_batch(&args, &choices).map(Resolved::Many),
    }
}

/// Resolves a single argument to exactly one choice.
///
/// # Errors
///
/// Returns an error if the argument matches no choice or several choices.
pub fn match_one<S: AsRef<str>>(arg: &str, choices: &[S]) -> Result<String> {
    resolve_one(arg, &dedup_choices(choices))
}

/// Resolves an argument or batch with several-ok semantics.
///
/// # Errors
///
/// Returns an error if any argument matches no choice.
pub fn match_several<S: AsRef<str>>(query: impl Into<Query>, choices: &[S]) -> Result<Vec<String>> {
    match_arg(query, choices, true).map(Resolved::into_vec)
}

fn resolve_one(arg: &str, choices: &[&str]) -> Result<String> {
    match pmatch(arg, choices) {
        MatchOutcome::Unique(index) => {
            tracing::debug!(arg, resolved = choices[index], "argument resolved");
            Ok(choices[index].to_string())
        }
        MatchOutcome::Ambiguous => {
            let matches = prefix_matches(arg, choices);
            tracing::debug!(arg, candidates = matches.len(), "ambiguous argument");
            Err(Error::Ambiguous {
                arg: arg.to_string(),
                matches: to_owned(&matches),
            })
        }
        MatchOutcome::NoMatch => Err(no_match(arg, choices)),
    }
}

fn resolve_several(arg: &str, choices: &[&str]) -> Result<Vec<String>> {
    match pmatch(arg, choices) {
        MatchOutcome::Unique(index) => Ok(vec![choices[index].to_string()]),
        MatchOutcome::Ambiguous => Ok(to_owned(&prefix_matches(arg, choices))),
        MatchOutcome::NoMatch => Err(no_match(arg, choices)),
    }
}

fn resolve_batch(args: &[String], choices: &[&str]) -> Result<Vec<String>> {
    let mut resolved = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        let matches = resolve_several(arg, choices).map_err(|source| Error::BatchElement {
            index,
            arg: arg.clone(),
            source: Box::new(source),
        })?;
        resolved.extend(matches);
    }
    tracing::debug!(batch = args.len(), resolved = resolved.len(), "batch resolved");
    Ok(resolved)
}

fn no_match(arg: &str, choices: &[&str]) -> Error {
    tracing::debug!(arg, "argument matched no choice");
    Error::NoMatch {
        arg: arg.to_string(),
        choices: to_owned(choices),
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
