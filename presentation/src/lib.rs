//! Presentation layer for dlinrt-compare
//!
//! This crate contains CLI definitions and output formatters
//! (console table, summary, JSON and CSV).

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
