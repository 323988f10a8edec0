//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.terminal-mines/config.toml`. If missing on first run, a
//! commented-out default is generated so players can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::action::{DEFAULT_FLAG_KEY, KeyMap};
use crate::core::difficulty::Difficulty;
use crate::core::error::GameError;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MinesConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    /// Preset name or `"mines,width,height"`.
    pub difficulty: Option<String>,
    pub flag_key: Option<char>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DIFFICULTY: &str = "easy";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "mines.log";

const CONFIG_DIR: &str = ".terminal-mines";

const ENV_DIFFICULTY: &str = "MINES_DIFFICULTY";
const ENV_SEED: &str = "MINES_SEED";

/// Symbols the flag key may not take: movement, reveal and quit.
const RESERVED_KEYS: [char; 7] = ['w', 'a', 's', 'd', 'q', '\n', '\r'];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub difficulty: Difficulty,
    pub keys: KeyMap,
    pub seed: Option<u64>,
    pub log_level: log::LevelFilter,
    pub log_file: PathBuf,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.terminal-mines/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.terminal-mines/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.terminal-mines/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MinesConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MinesConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MinesConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<MinesConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(MinesConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: MinesConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Terminal Mines Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [game]
# difficulty = "easy"     # easy, balanced, intermediate, challenging, expert
#                         # or "mines,width,height", e.g. "50,20,20"
# flag_key = "e"
# seed = 1234             # fixed mine layout, or set MINES_SEED

# [log]
# level = "info"          # off, error, warn, info, debug, trace
# file = "mines.log"      # relative to ~/.terminal-mines/
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
///
/// `cli_difficulty` and `cli_seed` are from CLI flags (None = not specified).
pub fn resolve(
    config: &MinesConfig,
    cli_difficulty: Option<Difficulty>,
    cli_seed: Option<u64>,
) -> Result<ResolvedConfig, GameError> {
    resolve_with_env(config, cli_difficulty, cli_seed, |key| std::env::var(key).ok())
}

/// [`resolve`] with the environment supplied by `env`.
pub fn resolve_with_env(
    config: &MinesConfig,
    cli_difficulty: Option<Difficulty>,
    cli_seed: Option<u64>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, GameError> {
    // Difficulty: CLI → env → config → default
    let difficulty = match cli_difficulty {
        Some(d) => d,
        None => env(ENV_DIFFICULTY)
            .or_else(|| config.game.difficulty.clone())
            .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string())
            .parse()?,
    };

    // Seed: CLI → env → config
    let seed = match cli_seed {
        Some(seed) => Some(seed),
        None => match env(ENV_SEED) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                GameError::configuration(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_SEED, raw
                ))
            })?),
            None => config.game.seed,
        },
    };

    let keys = KeyMap {
        flag: resolve_flag_key(config.game.flag_key)?,
    };

    Ok(ResolvedConfig {
        difficulty,
        keys,
        seed,
        log_level: resolve_log_level(config),
        log_file: resolve_log_file(config),
    })
}

/// Key input arrives lower-cased, and movement, reveal and quit are taken.
fn resolve_flag_key(configured: Option<char>) -> Result<char, GameError> {
    let key = configured.unwrap_or(DEFAULT_FLAG_KEY).to_ascii_lowercase();
    if RESERVED_KEYS.contains(&key) || key.is_whitespace() || key.is_control() {
        return Err(GameError::configuration(format!(
            "flag_key {:?} is already bound or cannot be typed",
            key
        )));
    }
    Ok(key)
}

fn resolve_log_level(config: &MinesConfig) -> log::LevelFilter {
    match config.log.level.as_deref().map(str::parse::<log::LevelFilter>) {
        Some(Ok(level)) => level,
        Some(Err(_)) => {
            warn!("Unknown log level {:?}, using default", config.log.level);
            DEFAULT_LOG_LEVEL
        }
        None => DEFAULT_LOG_LEVEL,
    }
}

/// Relative log paths are placed under `~/.terminal-mines/`.
fn resolve_log_file(config: &MinesConfig) -> PathBuf {
    let file = PathBuf::from(config.log.file.as_deref().unwrap_or(DEFAULT_LOG_FILE));
    if file.is_absolute() {
        return file;
    }
    match config_dir() {
        Some(dir) => dir.join(file),
        None => file,
    }
}
