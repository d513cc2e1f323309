//! Open command - skip scanning and go straight to the creation form.

use clap::Args;

use leadscan_core::Navigator;

use super::load_config;
use crate::notify::ConsoleNavigator;

/// Arguments for the open command.
#[derive(Args)]
pub struct OpenArgs {
    /// Record type to open the creation form for (defaults to the
    /// configured target)
    #[arg(long)]
    object_type: Option<String>,
}

pub async fn run(args: OpenArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let object_type = args
        .object_type
        .unwrap_or_else(|| config.target.object_type.clone());

    let navigator = ConsoleNavigator::new(&config.store.base_url);
    navigator.open_create_form(&object_type);

    Ok(())
}
