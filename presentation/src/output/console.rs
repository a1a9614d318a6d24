//! Console output formatter for comparison results

use crate::output::csv::to_csv;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use dlinrt_application::CompareStructuresOutput;
use dlinrt_domain::core::string::truncate;
use dlinrt_domain::{ShowOnly, StructureRow};

const NAME_WIDTH: usize = 32;

/// Formats comparison results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Availability matrix of the filtered rows
    pub fn format_table(output: &CompareStructuresOutput) -> String {
        let mut text = String::new();
        let total = output.product_count();

        text.push_str(&Self::header("Structure Comparison"));
        text.push('\n');

        // Product legend
        text.push_str(&format!("{}\n", "Products:".cyan().bold()));
        for (index, product) in output.products.iter().enumerate() {
            text.push_str(&format!(
                "  {} {} ({})\n",
                format!("P{}", index + 1).yellow().bold(),
                product.display_name,
                product.id.dimmed()
            ));
        }
        text.push('\n');

        if output.rows.is_empty() {
            text.push_str(&format!("{}\n", "No structures match the filters.".dimmed()));
            text.push_str(&Self::footer());
            return text;
        }

        // Column header
        let mut columns = format!(
            "{:<name$}  {:<13}  {:<7}",
            "Structure",
            "Region",
            "Modality",
            name = NAME_WIDTH
        );
        for index in 0..total {
            columns.push_str(&format!("  {:>3}", format!("P{}", index + 1)));
        }
        columns.push_str("  Count");
        text.push_str(&format!("{}\n", columns.bold()));
        text.push_str(&format!("{}\n", "-".repeat(columns.len())));

        for row in &output.rows {
            text.push_str(&Self::table_row(row, output, total));
            text.push('\n');
        }

        text.push_str(&format!(
            "\n{} {} of {} structures shown ({} common, {} unique)\n",
            "Total:".cyan().bold(),
            output.rows.len(),
            output.result.all_structures.len(),
            output.result.common_structures.len(),
            output
                .result
                .all_structures
                .iter()
                .filter(|r| r.is_unique)
                .count()
        ));

        if !output.filters.is_empty() {
            text.push_str(&format!(
                "{} {}\n",
                "Filters:".dimmed(),
                Self::describe_filters(output)
            ));
        }

        text.push_str(&Self::footer());
        text
    }

    fn table_row(row: &StructureRow, output: &CompareStructuresOutput, total: usize) -> String {
        let name = format!(
            "{:<width$}",
            truncate(&row.structure_name, NAME_WIDTH),
            width = NAME_WIDTH
        );
        let name = if row.is_common(total) {
            name.green().to_string()
        } else if row.is_unique {
            name.yellow().to_string()
        } else {
            name
        };

        let mut line = format!(
            "{}  {:<13}  {:<7}",
            name,
            row.region.as_str(),
            row.modality.as_str()
        );
        for product in &output.products {
            let mark = if row.is_supported_by(&product.id) {
                format!("{:>3}", "✓").green().to_string()
            } else {
                format!("{:>3}", "·").dimmed().to_string()
            };
            line.push_str("  ");
            line.push_str(&mark);
        }
        line.push_str(&format!("  {}/{}", row.supported_by_count, total));
        line
    }

    /// Per-product statistics and common/unique structures
    pub fn format_summary(output: &CompareStructuresOutput) -> String {
        let mut text = String::new();
        let result = &output.result;

        text.push_str(&Self::header("Structure Coverage Summary"));
        text.push('\n');

        text.push_str(&Self::section_header("Products"));
        for product in &output.products {
            let stats = result
                .product_stats
                .get(&product.id)
                .copied()
                .unwrap_or_default();
            text.push_str(&format!(
                "  {}\n    {} structures, {} unique, {} common\n",
                product.display_name.yellow().bold(),
                stats.total,
                stats.unique,
                stats.common
            ));
        }

        text.push_str(&Self::section_header(&format!(
            "Common to all {} products ({})",
            output.product_count(),
            result.common_structures.len()
        )));
        if result.common_structures.is_empty() {
            text.push_str(&format!("  {}\n", "(none)".dimmed()));
        } else {
            text.push_str(&Self::indent(&result.common_structures.join(", "), "  "));
            text.push('\n');
        }

        text.push_str(&Self::section_header("Unique structures"));
        for product in &output.products {
            let unique = result
                .unique_structures
                .get(&product.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            text.push_str(&format!(
                "  {} ({})\n",
                product.display_name.yellow().bold(),
                unique.len()
            ));
            if !unique.is_empty() {
                text.push_str(&Self::indent(&unique.join(", "), "    "));
                text.push('\n');
            }
        }

        text.push_str(&Self::section_header("Structures per region"));
        for (region, count) in result.region_breakdown() {
            text.push_str(&format!("  {:<15} {}\n", region.as_str(), count));
        }

        text.push_str(&Self::footer());
        text
    }

    /// Format as JSON
    pub fn format_json(output: &CompareStructuresOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the filtered rows as CSV
    pub fn format_csv(output: &CompareStructuresOutput) -> String {
        to_csv(output)
    }

    fn describe_filters(output: &CompareStructuresOutput) -> String {
        let filters = &output.filters;
        let mut parts = Vec::new();
        if let Some(region) = filters.region {
            parts.push(format!("region={}", region));
        }
        if let Some(modality) = filters.modality {
            parts.push(format!("modality={}", modality));
        }
        if filters.show_only != ShowOnly::All {
            parts.push(format!("show-only={}", filters.show_only));
        }
        if let Some(term) = filters.search_term.as_deref().filter(|t| !t.trim().is_empty()) {
            parts.push(format!("search=\"{}\"", term));
        }
        parts.join(", ")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_table(&self, output: &CompareStructuresOutput) -> String {
        Self::format_table(output)
    }

    fn format_summary(&self, output: &CompareStructuresOutput) -> String {
        Self::format_summary(output)
    }

    fn format_json(&self, output: &CompareStructuresOutput) -> String {
        Self::format_json(output)
    }

    fn format_csv(&self, output: &CompareStructuresOutput) -> String {
        Self::format_csv(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlinrt_application::ProductSummary;
    use dlinrt_domain::{Product, StructureFilters, compare_structures, filter_structures};

    fn output(filters: StructureFilters) -> CompareStructuresOutput {
        colored::control::set_override(false);
        let products = vec![
            Product::new("a")
                .with_company("Acme")
                .with_name("Seg")
                .with_structures(["Brain: Brainstem", "Brain: Eye_L"]),
            Product::new("b").with_structures(["Brainstem"]),
        ];
        let result = compare_structures(&products);
        let rows = filter_structures(&result.all_structures, &filters, products.len());
        CompareStructuresOutput {
            products: products.iter().map(ProductSummary::from).collect(),
            result,
            filters,
            rows,
        }
    }

    #[test]
    fn test_format_table_lists_rows_and_legend() {
        let text = ConsoleFormatter::format_table(&output(StructureFilters::default()));
        assert!(text.contains("P1 Acme Seg (a)"));
        assert!(text.contains("Brainstem"));
        assert!(text.contains("Eye L"));
        assert!(text.contains("2/2"));
        assert!(text.contains("1/2"));
        assert!(text.contains("2 of 2 structures shown (1 common, 1 unique)"));
    }

    #[test]
    fn test_format_table_no_match() {
        let text = ConsoleFormatter::format_table(&output(
            StructureFilters::new().with_search("liver"),
        ));
        assert!(text.contains("No structures match the filters."));
    }

    #[test]
    fn test_format_table_describes_filters() {
        let text = ConsoleFormatter::format_table(&output(
            StructureFilters::new().with_show_only(ShowOnly::Unique),
        ));
        assert!(text.contains("show-only=unique"));
        assert!(!text.contains("Brainstem "));
    }

    #[test]
    fn test_format_summary() {
        let text = ConsoleFormatter::format_summary(&output(StructureFilters::default()));
        assert!(text.contains("2 structures, 1 unique, 1 common"));
        assert!(text.contains("Common to all 2 products (1)"));
        assert!(text.contains("    Eye L"));
        assert!(text.contains("Brain"));
    }

    #[test]
    fn test_format_json_round_trips() {
        let json = ConsoleFormatter::format_json(&output(StructureFilters::default()));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["commonStructures"][0], "Brainstem");
        assert_eq!(value["products"][0]["displayName"], "Acme Seg");
        assert_eq!(value["rows"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
