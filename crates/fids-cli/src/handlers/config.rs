use anyhow::{Result, bail};
use fids_runtime::BoardConfig;
use std::path::Path;

/// Print the configuration the board would run with
pub fn show(config_path: &Path) -> Result<()> {
    let config = BoardConfig::load_from(config_path)?;
    config.validate()?;

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", config_path.display())
    };
    println!("# {}", source);
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    BoardConfig::default().save_to(config_path)?;
    println!("Wrote {}", config_path.display());
    Ok(())
}
