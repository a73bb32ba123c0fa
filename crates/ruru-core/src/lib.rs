// Rust guideline compliant 2026-10-16

//! Ruru Core Library
//!
//! Partial argument matching in the style of R's `match.arg` and `pmatch`:
//! - Prefix matching with exact-match precedence (`pmatch`)
//! - Argument resolution with a several-ok policy and batch input (`match_arg`)
//! - Named choice sets loaded from configuration
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod matching;
pub mod resolve;

pub use config::{Config, OutputFormat};
pub use error::{Error, ErrorCode, Result};
pub use matching::{dedup_choices, pmatch, prefix_matches, MatchOutcome};
pub use resolve::{match_arg, match_one, match_several, Query, Resolved};
