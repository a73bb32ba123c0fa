// Rust guideline compliant 2026-10-16

//! Ruru CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod response;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use terminal::should_use_color;
