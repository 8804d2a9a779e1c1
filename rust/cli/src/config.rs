use serde::{Deserialize, Serialize};
use std::fs;

use tablestakes_engine::table::TableConfig;

pub const CONFIG_PATH_ENV: &str = "TABLESTAKES_CONFIG";
pub const MIN_BET_ENV: &str = "TABLESTAKES_MIN_BET";
pub const CHIP_UNIT_ENV: &str = "TABLESTAKES_CHIP_UNIT";
pub const OPEN_FOLD_ENV: &str = "TABLESTAKES_OPEN_FOLD";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub min_bet: ValueSource,
    pub chip_unit: ValueSource,
    pub fold_when_not_facing_bet: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            min_bet: ValueSource::Default,
            chip_unit: ValueSource::Default,
            fold_when_not_facing_bet: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: TableConfig,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<TableConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `TABLESTAKES_CONFIG`, then
/// environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = TableConfig::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.min_bet {
            cfg.min_bet = v;
            sources.min_bet = ValueSource::File;
        }
        if let Some(v) = f.chip_unit {
            cfg.chip_unit = v;
            sources.chip_unit = ValueSource::File;
        }
        if let Some(v) = f.fold_when_not_facing_bet {
            cfg.fold_when_not_facing_bet = v;
            sources.fold_when_not_facing_bet = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var(MIN_BET_ENV)
        && !v.is_empty()
    {
        cfg.min_bet = v
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid min_bet: {v:?}")))?;
        sources.min_bet = ValueSource::Env;
    }
    if let Ok(v) = std::env::var(CHIP_UNIT_ENV)
        && !v.is_empty()
    {
        cfg.chip_unit = v
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid chip_unit: {v:?}")))?;
        sources.chip_unit = ValueSource::Env;
    }
    if let Ok(v) = std::env::var(OPEN_FOLD_ENV)
        && !v.is_empty()
    {
        cfg.fold_when_not_facing_bet = parse_bool(&v)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid open fold flag: {v:?}")))?;
        sources.fold_when_not_facing_bet = ValueSource::Env;
    }

    cfg.validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    min_bet: Option<u32>,
    #[serde(default)]
    chip_unit: Option<u32>,
    #[serde(default)]
    fold_when_not_facing_bet: Option<bool>,
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
