//! Configuration file loading for dlinrt-compare
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DLINRT_*` environment variables (e.g. `DLINRT_CATALOG__PATH`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./dlinrt.toml` or `./.dlinrt.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/dlinrt-compare/config.toml`
//! 5. Fallback: `~/.config/dlinrt-compare/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCatalogConfig, FileConfig, FileFilterConfig, FileOutputConfig,
    FileOutputFormat, FileSelectionConfig,
};
pub use loader::ConfigLoader;
