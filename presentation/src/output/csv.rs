//! CSV export of comparison rows
//!
//! One line per structure, one `yes`/`no` column per compared product.
//! Fields are quoted per RFC 4180 when they contain a delimiter, quote or
//! line break.

use dlinrt_application::CompareStructuresOutput;

/// Quote a CSV field if needed
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_record<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    let line = fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
    out.push_str("\r\n");
}

/// Render the filtered rows of a comparison as CSV
pub fn to_csv(output: &CompareStructuresOutput) -> String {
    let mut csv = String::new();

    let mut header = vec!["structure", "normalized_name", "region", "modality"];
    header.extend(output.products.iter().map(|p| p.id.as_str()));
    header.extend(["supported_by", "unique_to"]);
    write_record(&mut csv, header);

    for row in &output.rows {
        let count = row.supported_by_count.to_string();
        let mut fields = vec![
            row.structure_name.as_str(),
            row.normalized_name.as_str(),
            row.region.as_str(),
            row.modality.as_str(),
        ];
        fields.extend(output.products.iter().map(|p| {
            if row.is_supported_by(&p.id) {
                "yes"
            } else {
                "no"
            }
        }));
        fields.push(count.as_str());
        fields.push(row.unique_to_product_id.as_deref().unwrap_or(""));
        write_record(&mut csv, fields);
    }

    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlinrt_application::ProductSummary;
    use dlinrt_domain::{Product, StructureFilters, compare_structures};

    fn output(products: Vec<Product>) -> CompareStructuresOutput {
        let result = compare_structures(&products);
        CompareStructuresOutput {
            products: products.iter().map(ProductSummary::from).collect(),
            rows: result.all_structures.clone(),
            result,
            filters: StructureFilters::default(),
        }
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("Heart"), "Heart");
        assert_eq!(escape_field("Lung, left"), "\"Lung, left\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&output(vec![
            Product::new("a").with_structures(["Brain: Brainstem", "Brain: Eye_L"]),
            Product::new("b").with_structures(["Brainstem"]),
        ]));

        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(
            lines[0],
            "structure,normalized_name,region,modality,a,b,supported_by,unique_to"
        );
        assert_eq!(lines[1], "Brainstem,brainstem,Brain,Unknown,yes,yes,2,");
        assert_eq!(lines[2], "Eye L,eye l,Brain,Unknown,yes,no,1,a");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_to_csv_quotes_region_with_spaces_only_when_needed() {
        let csv = to_csv(&output(vec![Product::new("a").with_structures(["Parotid_L"])]));
        assert!(csv.contains("Parotid L,parotid l,Head and Neck,Unknown,yes,1,a"));
    }
}
