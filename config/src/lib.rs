//! Configuration loading for ZenPulse.
//!
//! Two inputs are read once at startup:
//!
//! - `~/.zenpulse/config.toml`: UI options, affirmation timing, and an
//!   optional path to an external catalog.
//! - The content catalog: either the built-in asset or an external TOML file
//!   with the same schema (see [`load_catalog`]).

mod catalog;

pub use catalog::{BUILTIN_CATALOG_NAME, builtin_catalog, load_catalog, parse_catalog};

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use zenpulse_types::CatalogError;
use zenpulse_types::ui::UiOptions;

/// Delay before a mood selection produces its affirmation.
pub const DEFAULT_AFFIRMATION_DELAY_MS: u64 = 1500;

/// Env var naming an external catalog file. Wins over `[content] catalog`.
pub const CATALOG_ENV: &str = "ZENPULSE_CATALOG";
/// Env var forcing ASCII glyphs (`1`/`true`).
pub const ASCII_ENV: &str = "ZENPULSE_ASCII";

const fn default_delay_ms() -> u64 {
    DEFAULT_AFFIRMATION_DELAY_MS
}

#[derive(Debug, Default, Deserialize)]
pub struct ZenConfig {
    pub app: Option<AppConfig>,
    pub affirmations: Option<AffirmationConfig>,
    pub content: Option<ContentConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid catalog {}: {source}", path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Catalog { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable modal animations and spinner motion.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// ```toml
/// [affirmations]
/// delay_ms = 1500
/// ```
#[derive(Debug, Deserialize)]
pub struct AffirmationConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for AffirmationConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_AFFIRMATION_DELAY_MS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentConfig {
    /// External catalog file. `${VAR}` references are expanded.
    pub catalog: Option<String>,
}

impl ZenConfig {
    /// Load `~/.zenpulse/config.toml`. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }

    #[must_use]
    pub fn affirmation_delay(&self) -> Duration {
        let ms = self
            .affirmations
            .as_ref()
            .map_or(DEFAULT_AFFIRMATION_DELAY_MS, |a| a.delay_ms);
        Duration::from_millis(ms)
    }

    /// Catalog path from `[content] catalog`, with env vars expanded.
    #[must_use]
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let raw = self.content.as_ref()?.catalog.as_deref()?;
        let expanded = expand_env_vars(raw.trim());
        if expanded.is_empty() {
            None
        } else {
            Some(PathBuf::from(expanded))
        }
    }
}

/// Resolve UI options from the optional config plus env overrides.
#[must_use]
pub fn ui_options(config: Option<&ZenConfig>) -> UiOptions {
    let mut options = config.map(ZenConfig::ui_options).unwrap_or_default();
    if env_flag(ASCII_ENV) {
        options.ascii_only = true;
    }
    options
}

/// Resolve the affirmation delay, falling back to 1.5 s.
#[must_use]
pub fn affirmation_delay(config: Option<&ZenConfig>) -> Duration {
    config.map_or(
        Duration::from_millis(DEFAULT_AFFIRMATION_DELAY_MS),
        ZenConfig::affirmation_delay,
    )
}

fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

/// Expand `${VAR}` references. Unset variables expand to nothing.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".zenpulse").join("config.toml"))
}
