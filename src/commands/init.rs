use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Wearmap Configuration
#
# Every threshold is optional; omitted values use the built-in defaults
# shown here.

[thresholds]
# Advisory triggers
idle_ratio = 0.30
category_share = 0.40
min_outfits = 5
high_price = 500.0
low_use = 3
next_season_min = 10
min_brands = 5
min_utilization = 50.0
"#;

    fs::write(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
