//! Output formatter trait

use dlinrt_application::CompareStructuresOutput;
use dlinrt_domain::OutputFormat;

/// Trait for formatting comparison results
pub trait OutputFormatter {
    /// Availability matrix of the filtered rows
    fn format_table(&self, output: &CompareStructuresOutput) -> String;

    /// Per-product statistics and common/unique structures
    fn format_summary(&self, output: &CompareStructuresOutput) -> String;

    /// Format as JSON
    fn format_json(&self, output: &CompareStructuresOutput) -> String;

    /// Format the filtered rows as CSV
    fn format_csv(&self, output: &CompareStructuresOutput) -> String;

    /// Dispatch on an [`OutputFormat`]
    fn format(&self, output: &CompareStructuresOutput, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.format_table(output),
            OutputFormat::Summary => self.format_summary(output),
            OutputFormat::Json => self.format_json(output),
            OutputFormat::Csv => self.format_csv(output),
        }
    }
}
