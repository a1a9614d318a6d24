//! CLI command definitions

use clap::{Parser, ValueEnum};
use dlinrt_domain::{Modality, Region, ShowOnly};
use std::path::PathBuf;

/// Output format for comparison results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Availability matrix, one row per structure
    Table,
    /// Per-product statistics, common and unique structures
    Summary,
    /// JSON output
    Json,
    /// CSV export
    Csv,
}

impl From<OutputFormat> for dlinrt_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => dlinrt_domain::OutputFormat::Table,
            OutputFormat::Summary => dlinrt_domain::OutputFormat::Summary,
            OutputFormat::Json => dlinrt_domain::OutputFormat::Json,
            OutputFormat::Csv => dlinrt_domain::OutputFormat::Csv,
        }
    }
}

/// CLI arguments for dlinrt-compare
#[derive(Parser, Debug)]
#[command(name = "dlinrt-compare")]
#[command(author, version, about = "Compare the anatomical structures supported by DLinRT products")]
#[command(long_about = r#"
dlinrt-compare reconciles the structure names advertised by deep-learning
auto-contouring products and shows which structures they have in common.

Vendor labels are normalized before comparison: region prefixes are removed
("Head & Neck: Mandible" -> "Mandible") and laterality is unified
("Parotid_L", "Parotid-Left" -> "Parotid L").

Configuration files are loaded from (in priority order):
1. DLINRT_* environment variables
2. --config <path>     Explicit config file
3. ./dlinrt.toml       Project-level config
4. ~/.config/dlinrt-compare/config.toml   Global config

Example:
  dlinrt-compare --catalog products.json
  dlinrt-compare --catalog products.json -p limbus-contour -p mirada-dlcexpert --show-only common
  dlinrt-compare --catalog products.json --region "head and neck" -o csv > hn.csv
"#)]
pub struct Cli {
    /// Path to the product catalog (JSON)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Products to compare (can be specified multiple times; default: all)
    #[arg(short, long = "product", value_name = "ID")]
    pub products: Vec<String>,

    /// Only consider catalog products of this category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Keep products without any structure when comparing the whole catalog
    #[arg(long)]
    pub include_empty: bool,

    /// Only show structures of this region
    #[arg(long, value_name = "REGION")]
    pub region: Option<Region>,

    /// Only show structures of this modality (CT, MR, Unknown)
    #[arg(long, value_name = "MODALITY")]
    pub modality: Option<Modality>,

    /// Only show unique or common structures (all, unique, common)
    #[arg(long, value_name = "CLASS")]
    pub show_only: Option<ShowOnly>,

    /// Case-insensitive search in structure names
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
