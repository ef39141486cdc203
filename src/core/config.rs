//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.optgroup/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OptgroupConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Option group definition loaded when none is given on the command line.
    pub default_group: Option<String>,
    pub pretty: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_LOG_FILE: &str = "optgroup.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub group_path: Option<PathBuf>,
    pub pretty: bool,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl ResolvedConfig {
    /// Parses `log_level`; an unknown name is an error rather than a silent default.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

/// Values supplied on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub group: Option<PathBuf>,
    pub pretty: Option<bool>,
    pub log_level: Option<String>,
}

/// Where the loaded config came from. Loading happens before the logger is
/// installed, so callers log this once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Generated(PathBuf),
    /// No file existed and writing the default failed.
    GenerateFailed { path: PathBuf, reason: String },
    /// No home directory to look in.
    NoHome,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                write!(f, "no config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed { path, reason } => write!(
                f,
                "no config file found, failed to generate default at {}: {reason}",
                path.display()
            ),
            ConfigSource::NoHome => {
                write!(f, "could not determine home directory, using default config")
            }
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidLogLevel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidLogLevel(level) => write!(
                f,
                "unknown log level {level:?} (expected off, error, warn, info, debug or trace)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.optgroup/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".optgroup").join("config.toml"))
}

/// Load config from `~/.optgroup/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `OptgroupConfig::default()`.
pub fn load_config() -> Result<(OptgroupConfig, ConfigSource), ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok((OptgroupConfig::default(), ConfigSource::NoHome))
        }
    }
}

/// Load config from an explicit path, generating a default if it is missing.
pub fn load_config_from(path: &Path) -> Result<(OptgroupConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        let source = match generate_default_config(path) {
            Ok(()) => ConfigSource::Generated(path.to_path_buf()),
            Err(e) => {
                warn!("Failed to write default config: {}", e);
                ConfigSource::GenerateFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        };
        return Ok((OptgroupConfig::default(), source));
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: OptgroupConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# optgroup configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_group = "/path/to/group.toml"   # Or set OPTGROUP_GROUP
# pretty = false                          # Pretty-print JSON output (--pretty / --no-pretty)

# [logging]
# level = "debug"                         # "off", "error", "warn", "info", "debug", "trace"
# file = "optgroup.log"                   # Or set OPTGROUP_LOG_FILE
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &OptgroupConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &OptgroupConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Group: CLI → env → config
    let group_path = cli
        .group
        .clone()
        .or_else(|| env("OPTGROUP_GROUP").map(PathBuf::from))
        .or_else(|| config.general.default_group.as_ref().map(PathBuf::from));

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("OPTGROUP_LOG_LEVEL"))
        .or_else(|| config.logging.level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // Log file: env → config → default
    let log_file = env("OPTGROUP_LOG_FILE")
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        group_path,
        pretty: cli.pretty.or(config.general.pretty).unwrap_or(false),
        log_level,
        log_file: PathBuf::from(log_file),
    }
}
