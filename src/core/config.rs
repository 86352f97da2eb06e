//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.fortune-caster/config.toml`. If missing on first run,
//! a commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::timer::{DEFAULT_ACTIONS_DELAY_MS, DEFAULT_MESSAGE_DELAY_MS, RevealDelays};
use crate::share::warpcast::{DEFAULT_APP_URL, DEFAULT_COMPOSE_URL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FortuneConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub message_delay_ms: Option<u64>,
    pub actions_delay_ms: Option<u64>,
    pub fortunes_file: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShareConfig {
    pub app_url: Option<String>,
    pub compose_url: Option<String>,
    pub open_browser: Option<bool>,
}

/// Values from CLI flags. `None`/`false` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub fortunes: Option<PathBuf>,
    pub seed: Option<u64>,
    pub message_delay_ms: Option<u64>,
    pub actions_delay_ms: Option<u64>,
    pub no_browser: bool,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub delays: RevealDelays,
    /// `None` = built-in catalog.
    pub fortunes_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub app_url: String,
    pub compose_url: String,
    pub open_browser: bool,
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
// Loading
// ============================================================================

/// Returns `~/.fortune-caster/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".fortune-caster"))
}

/// Returns the path to `~/.fortune-caster/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.fortune-caster/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FortuneConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FortuneConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FortuneConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FortuneConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FortuneConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FortuneConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Fortune Caster Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# message_delay_ms = 800             # Open → fortune visible
# actions_delay_ms = 1000            # Fortune visible → share buttons visible
# fortunes_file = "fortunes.txt"     # Path relative to ~/.fortune-caster/, one fortune per line
# seed = 42                          # Reproducible draws

# [share]
# app_url = "https://fortune-caster.vercel.app"   # Or set FORTUNE_CASTER_APP_URL
# compose_url = "https://warpcast.com/~/compose"
# open_browser = true                # false = show the link in the status bar
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn env_u64<E>(env: &E, name: &str) -> Option<u64>
where
    E: Fn(&str) -> Option<String>,
{
    let raw = env(name)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a whole number of milliseconds", name, raw);
            None
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FortuneConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |name| std::env::var(name).ok())
}

/// `resolve` with the environment supplied by `env`.
pub fn resolve_with<E>(config: &FortuneConfig, cli: &CliOverrides, env: E) -> ResolvedConfig
where
    E: Fn(&str) -> Option<String>,
{
    // Delays: CLI → env → config → default
    let message_delay_ms = cli
        .message_delay_ms
        .or_else(|| env_u64(&env, "FORTUNE_CASTER_MESSAGE_DELAY_MS"))
        .or(config.general.message_delay_ms)
        .unwrap_or(DEFAULT_MESSAGE_DELAY_MS);
    let actions_delay_ms = cli
        .actions_delay_ms
        .or_else(|| env_u64(&env, "FORTUNE_CASTER_ACTIONS_DELAY_MS"))
        .or(config.general.actions_delay_ms)
        .unwrap_or(DEFAULT_ACTIONS_DELAY_MS);

    // Catalog: CLI path as given, env path as given, config path relative to ~/.fortune-caster/
    let fortunes_file = cli
        .fortunes
        .clone()
        .or_else(|| env("FORTUNE_CASTER_FORTUNES").map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .fortunes_file
                .as_deref()
                .map(resolve_config_relative)
        });

    // App URL: env → config → default
    let app_url = env("FORTUNE_CASTER_APP_URL")
        .or_else(|| config.share.app_url.clone())
        .unwrap_or_else(|| DEFAULT_APP_URL.to_string());

    let compose_url = config
        .share
        .compose_url
        .clone()
        .unwrap_or_else(|| DEFAULT_COMPOSE_URL.to_string());

    let open_browser = !cli.no_browser && config.share.open_browser.unwrap_or(true);

    ResolvedConfig {
        delays: RevealDelays::from_millis(message_delay_ms, actions_delay_ms),
        fortunes_file,
        seed: cli.seed.or(config.general.seed),
        app_url,
        compose_url,
        open_browser,
    }
}

/// Relative paths in the config file are relative to the config directory.
fn resolve_config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
