//! Subcommand implementations.

pub mod check;
pub mod render;
pub mod types;
