use std::path::Path;

use anyhow::{Result, bail};
use cohort_core::ClassConfig;

pub fn init(name: &str, path: &str) -> Result<()> {
    let output = Path::new(path);
    if output.exists() {
        bail!("{} already exists, refusing to overwrite", output.display());
    }

    let config = ClassConfig::scaffold(name);
    std::fs::write(output, config.to_toml_string()?)?;
    println!("✓ Generated {}", output.display());
    Ok(())
}
