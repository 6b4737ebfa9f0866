use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_tradeoff_home, tradeoff_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogSection,
    pub wizard: WizardSection,
    pub output: OutputSection,
}

/// Optional CSV files merged over the built-in catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    pub budget_csv: Option<PathBuf>,
    pub units_csv: Option<PathBuf>,
}

/// Defaults used when `tradeoff wizard` is run without selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardSection {
    pub priorities: Vec<String>,
    pub wasteful: Vec<String>,
    pub top_priority: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub json: bool,
}

impl Default for WizardSection {
    fn default() -> Self {
        Self {
            priorities: vec!["education".to_string(), "healthcare".to_string()],
            wasteful: vec!["defense".to_string(), "foreign-aid".to_string()],
            top_priority: Some("education".to_string()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(tradeoff_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_tradeoff_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let written = save_config(&Config::default())?;
    println!("Wrote {}", written.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[output]\njson = true\n\n[catalog]\nunits_csv = \"units.csv\"\n").unwrap();

        let cfg = load_config_from(&p).unwrap();
        assert!(cfg.output.json);
        assert_eq!(cfg.catalog.units_csv, Some(PathBuf::from("units.csv")));
        assert_eq!(cfg.catalog.budget_csv, None);
        assert_eq!(cfg.wizard, WizardSection::default());
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back, Config::default());
    }

    #[test]
    fn test_bad_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[wizard\n").unwrap();
        let err = load_config_from(&p).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
