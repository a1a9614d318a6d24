//! CLI entrypoint for dlinrt-compare
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use dlinrt_application::{ComparisonParams, CompareStructuresUseCase};
use dlinrt_domain::OutputFormat;
use dlinrt_infrastructure::{ConfigLoader, FileConfig, JsonProductCatalog};
use dlinrt_presentation::{Cli, ConsoleFormatter, OutputFormatter};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Comparison parameters with CLI flags applied over the config file
fn build_params(config: &FileConfig, cli: &Cli) -> ComparisonParams {
    let mut params = config.to_comparison_params();

    if !cli.products.is_empty() {
        params.product_ids = cli.products.clone();
    }
    if let Some(category) = &cli.category {
        params.category = Some(category.clone());
    }
    if cli.include_empty {
        params.include_empty = true;
    }
    if let Some(region) = cli.region {
        params.filters.region = Some(region);
    }
    if let Some(modality) = cli.modality {
        params.filters.modality = Some(modality);
    }
    if let Some(show_only) = cli.show_only {
        params.filters.show_only = show_only;
    }
    if let Some(search) = &cli.search {
        params.filters.search_term = Some(search.clone());
    }

    params
}

fn catalog_path(config: &FileConfig, cli: &Cli) -> Result<PathBuf> {
    match &cli.catalog {
        Some(path) => Ok(path.clone()),
        None => Ok(PathBuf::from(config.catalog_path()?)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("invalid configuration: {}", issue.message);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let params = build_params(&config, &cli);
    let path = catalog_path(&config, &cli)?;

    info!("Starting dlinrt-compare with catalog {}", path.display());

    // === Dependency Injection ===
    let catalog = Arc::new(JsonProductCatalog::new(path));
    let use_case = CompareStructuresUseCase::new(catalog);

    let output = use_case.execute(&params).await?;

    let rendered = ConsoleFormatter.format(&output, format);
    match format {
        OutputFormat::Csv => print!("{}", rendered),
        _ => println!("{}", rendered),
    }

    Ok(())
}
