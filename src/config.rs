use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::cli::SystemArg;

/// Default config file looked up when `--config` is not given.
const DEFAULT_CONFIG_PATH: &str = "antikythera.toml";

/// Top-level antikythera configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AntikytheraConfig {
    /// Output formatting settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Easter computation settings.
    #[serde(default)]
    pub easter: EasterToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_weekdays")]
    pub weekdays: String,
    #[serde(default = "default_true")]
    pub annotations: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EasterToml {
    #[serde(default = "default_system")]
    pub system: String,
}

fn default_weekdays() -> String {
    "short".to_string()
}
fn default_true() -> bool {
    true
}
fn default_system() -> String {
    "both".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            weekdays: default_weekdays(),
            annotations: default_true(),
        }
    }
}

impl Default for EasterToml {
    fn default() -> Self {
        Self {
            system: default_system(),
        }
    }
}

impl AntikytheraConfig {
    /// Resolves the reckoning for a command: the CLI flag wins, then the
    /// config file, then the built-in default.
    pub fn system(&self, flag: Option<SystemArg>) -> Result<SystemArg> {
        if let Some(system) = flag {
            return Ok(system);
        }
        match self.easter.system.as_str() {
            "gregorian" => Ok(SystemArg::Gregorian),
            "julian" => Ok(SystemArg::Julian),
            "both" => Ok(SystemArg::Both),
            other => bail!("unknown system {other:?} in config (expected gregorian/julian/both)"),
        }
    }

    /// True when weekday names should be written out in full.
    pub fn long_weekdays(&self) -> Result<bool> {
        match self.output.weekdays.as_str() {
            "short" => Ok(false),
            "long" => Ok(true),
            other => bail!("unknown weekday style {other:?} in config (expected short/long)"),
        }
    }
}

/// Loads configuration.
///
/// An explicit `--config` path must exist; the default path is used only
/// when present, falling back to built-in defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<AntikytheraConfig> {
    let (path, required) = match path {
        Some(p) => (p, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };
    if !path.exists() {
        if required {
            bail!("config file not found: {}", path.display());
        }
        return Ok(AntikytheraConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}
