//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.hrms-nav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! `[[routes]]` entries replace built-in modules with the same id or add new
//! ones; the result is validated before the navigator ever sees it.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::navigator::DEFAULT_HISTORY_LIMIT;
use crate::core::route_table::{RouteTable, RouteTableEntry, RouteTableError};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HrmsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub routes: Vec<RouteTableEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_module: Option<String>,
    pub history_limit: Option<usize>,
    pub log_level: Option<String>,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub default_module: Option<String>,
    pub history_limit: Option<usize>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MODULE: &str = "dashboard";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_module: String,
    pub history_limit: usize,
    pub log_level: LevelFilter,
    pub routes: Arc<RouteTable>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Routes(RouteTableError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Routes(e) => write!(f, "invalid route configuration: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<RouteTableError> for ConfigError {
    fn from(e: RouteTableError) -> Self {
        ConfigError::Routes(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.hrms-nav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".hrms-nav").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise from `~/.hrms-nav/config.toml`.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file is an error, as is a malformed one.
pub fn load_config(explicit: Option<&Path>) -> Result<HrmsConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(HrmsConfig::default());
            }
        },
    };

    if explicit.is_none() && !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(HrmsConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<HrmsConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# HRMS Navigator Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_module = "dashboard"       # Or set HRMS_DEFAULT_MODULE
# history_limit = 50                 # Back-navigation depth, or HRMS_HISTORY_LIMIT
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"

# Routes replace built-in modules with the same id, or add new ones.
# [[routes]]
# id = "reports"
# title = "Reports"
# accepts = ["reportId", "year"]
# key = "reportId"                   # Bare ids are stored under this key
# fallback = "dashboard"             # Shown when no screen renders "reports"
# sidebar = true
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &HrmsConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &HrmsConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    let routes = if config.routes.is_empty() {
        RouteTable::builtin()
    } else {
        let table = RouteTable::builtin().with_overrides(config.routes.clone())?;
        info!("Applied {} route override(s)", config.routes.len());
        table
    };

    // Default module: CLI → env → config → default
    let default_module = cli
        .default_module
        .clone()
        .or_else(|| env("HRMS_DEFAULT_MODULE"))
        .or_else(|| config.general.default_module.clone())
        .unwrap_or_else(|| DEFAULT_MODULE.to_string());

    // History limit: CLI → env → config → default
    let history_limit = cli
        .history_limit
        .or_else(|| env("HRMS_HISTORY_LIMIT").and_then(|v| parse_or_warn(&v, "HRMS_HISTORY_LIMIT")))
        .or(config.general.history_limit)
        .unwrap_or(DEFAULT_HISTORY_LIMIT);

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("HRMS_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .and_then(|v| parse_or_warn(&v, "log_level"))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    Ok(ResolvedConfig {
        default_module,
        history_limit,
        log_level,
        routes: Arc::new(routes),
    })
}

fn parse_or_warn<T: std::str::FromStr>(raw: &str, what: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring invalid {} value: {:?}", what, raw);
            None
        }
    }
}
