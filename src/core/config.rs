//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.holocron/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The log file location is itself a config value, so loading runs before the
//! logger exists. Anything worth logging along the way is collected as a
//! [`ConfigNotice`] and emitted once logging is up.

use log::{Level, LevelFilter, log};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::FIRST_PAGE;
use crate::swapi::http::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HolocronConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_page: Option<u32>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "holocron.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub start_page: u32,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values taken from command-line flags. `None` means not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub page: Option<u32>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Deferred Log Lines
// ============================================================================

/// A log line produced while loading config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNotice {
    pub level: Level,
    pub message: String,
}

impl ConfigNotice {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Write this notice to the active logger.
    pub fn emit(&self) {
        log!(self.level, "{}", self.message);
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.holocron/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".holocron").join("config.toml"))
}

/// Load config from `~/.holocron/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HolocronConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(notices: &mut Vec<ConfigNotice>) -> Result<HolocronConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            notices.push(ConfigNotice::new(
                Level::Warn,
                "Could not determine home directory, using default config",
            ));
            return Ok(HolocronConfig::default());
        }
    };

    if !path.exists() {
        notices.push(ConfigNotice::new(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        ));
        generate_default_config(&path, notices);
        return Ok(HolocronConfig::default());
    }

    load_config_from(&path, notices)
}

pub fn load_config_from(
    path: &Path,
    notices: &mut Vec<ConfigNotice>,
) -> Result<HolocronConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: HolocronConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    notices.push(ConfigNotice::new(
        Level::Info,
        format!("Loaded config from {}", path.display()),
    ));
    notices.push(ConfigNotice::new(Level::Debug, format!("Config: {config:?}")));
    Ok(config)
}

fn generate_default_config(path: &Path, notices: &mut Vec<ConfigNotice>) {
    let default_content = r#"# Holocron Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_page = 1                     # Or set HOLOCRON_START_PAGE, or pass --page
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "holocron.log"

# [api]
# base_url = "https://swapi.dev/api" # Or set SWAPI_BASE_URL, or pass --base-url
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        notices.push(ConfigNotice::new(
            Level::Warn,
            format!("Failed to create config directory: {e}"),
        ));
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        notices.push(ConfigNotice::new(
            Level::Warn,
            format!("Failed to write default config: {e}"),
        ));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &HolocronConfig,
    cli: &CliOverrides,
    notices: &mut Vec<ConfigNotice>,
) -> ResolvedConfig {
    resolve_with_env(config, cli, notices, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
fn resolve_with_env(
    config: &HolocronConfig,
    cli: &CliOverrides,
    notices: &mut Vec<ConfigNotice>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("SWAPI_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Start page: CLI → env → config → default. Unparseable env values are ignored.
    let start_page = cli
        .page
        .or_else(|| {
            env("HOLOCRON_START_PAGE").and_then(|raw| match raw.trim().parse::<u32>() {
                Ok(page) => Some(page),
                Err(e) => {
                    notices.push(ConfigNotice::new(
                        Level::Warn,
                        format!("Ignoring HOLOCRON_START_PAGE={raw:?}: {e}"),
                    ));
                    None
                }
            })
        })
        .or(config.general.start_page)
        .unwrap_or(FIRST_PAGE)
        .max(FIRST_PAGE);

    // Log level: env → config → default
    let log_level = env("HOLOCRON_LOG")
        .or_else(|| config.general.log_level.clone())
        .and_then(|raw| parse_level(&raw))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .general
        .log_file
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        base_url,
        start_page,
        log_level,
        log_file,
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse::<LevelFilter>().ok()
}
