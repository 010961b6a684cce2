//! Demo configuration: tab list and layout options.
//!
//! Layered as built-in defaults, then a TOML file, then `TABSTRIP_`
//! environment variables. CLI flags are applied on top by the caller.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tabstrip::{LayoutOptions, Tab};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Tabs, left to right.
    #[serde(default = "default_tabs")]
    pub tabs: Vec<Tab>,

    #[serde(default)]
    pub layout: LayoutOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tabs: default_tabs(),
            layout: LayoutOptions::default(),
        }
    }
}

fn default_tabs() -> Vec<Tab> {
    ["One", "Two", "Three"].into_iter().map(Tab::new).collect()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "tabstrip", "tabstrip").map_or_else(
        || PathBuf::from("tabstrip.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load config from `path` (missing file is fine) plus the environment.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("TABSTRIP_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Render the effective config back to TOML.
pub fn to_toml(cfg: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(cfg)?)
}
