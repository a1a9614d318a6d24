//! Output formatting for comparison results

pub mod console;
pub mod csv;
pub mod formatter;
