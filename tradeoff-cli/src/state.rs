use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$TRADEOFF_HOME`, else `~/.tradeoff`.
pub fn tradeoff_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TRADEOFF_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tradeoff"))
}

pub fn ensure_tradeoff_home() -> Result<PathBuf> {
    let dir = tradeoff_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
