//! Project setup

use anyhow::{Context, Result};
use ecosystem_theme::{EngineConfig, CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};

/// Write a default `ecosystem.toml` into `dir`, returning its path
pub fn init_project(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let config = EngineConfig::default();
    fs::write(&path, config.to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let gitignore = dir.join(".gitignore");
    if !gitignore.exists() {
        fs::write(
            &gitignore,
            format!("# Ecosystem store state\n/{}/\n", config.state_dir.display()),
        )?;
    }

    tracing::debug!("initialized {}", path.display());
    Ok(path)
}
