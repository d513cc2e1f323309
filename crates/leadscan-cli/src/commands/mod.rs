//! CLI subcommands.

pub mod config;
pub mod manual;
pub mod open;
pub mod scan;

use leadscan_core::ScanConfig;

/// Load configuration from an explicit path, the default location, or
/// built-in defaults when no file exists.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<ScanConfig> {
    if let Some(path) = config_path {
        return Ok(ScanConfig::from_file(std::path::Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(ScanConfig::from_file(&default_path)?)
    } else {
        Ok(ScanConfig::default())
    }
}
