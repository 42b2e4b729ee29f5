use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use zenpulse_types::{AffirmationTable, Catalog, MeditationItem, NonEmptyString, PlanOptions};

use crate::{CATALOG_ENV, ConfigError, ZenConfig, expand_env_vars};

const BUILTIN_CATALOG_RAW: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/catalog.toml"));

/// Pseudo-path reported in errors about the embedded catalog.
pub const BUILTIN_CATALOG_NAME: &str = "<builtin catalog>";

/// On-disk catalog schema.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    meditations: Vec<MeditationItem>,
    plans: PlanOptions,
    affirmations: AffirmationTable,
    #[serde(default)]
    features: Vec<NonEmptyString>,
}

/// Parse and validate catalog TOML. `origin` only labels errors.
pub fn parse_catalog(raw: &str, origin: &Path) -> Result<Catalog, ConfigError> {
    let file: CatalogFile = toml::from_str(raw).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    Catalog::new(
        file.meditations,
        file.plans,
        file.affirmations,
        file.features,
    )
    .map_err(|source| ConfigError::Catalog {
        path: origin.to_path_buf(),
        source,
    })
}

pub fn builtin_catalog() -> Result<Catalog, ConfigError> {
    parse_catalog(BUILTIN_CATALOG_RAW, Path::new(BUILTIN_CATALOG_NAME))
}

/// Load the catalog once at startup.
///
/// Resolution order: `ZENPULSE_CATALOG`, then `[content] catalog`, then the
/// built-in asset.
pub fn load_catalog(config: Option<&ZenConfig>) -> Result<Catalog, ConfigError> {
    let external = env::var(CATALOG_ENV)
        .ok()
        .map(|raw| expand_env_vars(raw.trim()))
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.and_then(ZenConfig::catalog_path));

    let Some(path) = external else {
        tracing::debug!("Using built-in catalog");
        return builtin_catalog();
    };

    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let catalog = parse_catalog(&raw, &path)?;
    tracing::info!(
        path = %path.display(),
        meditations = catalog.meditations().len(),
        "Loaded external catalog"
    );
    Ok(catalog)
}
