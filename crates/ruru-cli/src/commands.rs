// Rust guideline compliant 2026-10-16

//! Command implementations for the Ruru CLI.

pub mod match_arg;
pub mod pmatch;
pub mod sets;
