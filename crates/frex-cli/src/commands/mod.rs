//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use frex_core::FrexConfig;

/// Load the pipeline configuration, falling back to defaults when no file is
/// given or present.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FrexConfig> {
    match config_path {
        Some(path) => Ok(FrexConfig::from_file(Path::new(path))?),
        None => Ok(FrexConfig::default()),
    }
}
