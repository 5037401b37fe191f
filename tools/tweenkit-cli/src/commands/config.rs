//! Show or initialize the configuration file.

use tweenkit_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, write_default: bool) -> anyhow::Result<()> {
    if write_default {
        let path = AppConfig::default()
            .save()
            .map_err(|e| anyhow::anyhow!("Failed to write config: {e}"))?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    println!("Config file: {}", config_file_path().display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
