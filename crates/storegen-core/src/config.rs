//! # Configuration File Parser
//!
//! Reads and parses `storegen.toml`, the optional configuration file that
//! customizes row counts and paths without CLI flags. CLI flags win over
//! the file; built-in defaults fill anything left unset.
//!
//! Example `storegen.toml`:
//!
//! ```toml
//! [generate]
//! users = 50000
//! products = 50000
//! orders = 100000
//! seed = 42
//!
//! [paths]
//! data_dir = "data"
//! database = "db/ecommerce.db"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, StoreGenError};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "storegen.toml";

/// Default directory for the generated CSV files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default path of the embedded database file.
pub const DEFAULT_DATABASE_PATH: &str = "db/ecommerce.db";

/// Top-level storegen.toml structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreGenConfig {
    /// Generation settings.
    pub generate: GenerateSection,
    /// Filesystem locations shared by both stages.
    pub paths: PathsSection,
}

/// `[generate]` section: row counts and seed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateSection {
    pub users: Option<usize>,
    pub products: Option<usize>,
    pub orders: Option<usize>,
    pub seed: Option<u64>,
}

/// `[paths]` section: where the CSVs and the database file live.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub data_dir: Option<PathBuf>,
    pub database: Option<PathBuf>,
}

/// Read and parse a storegen.toml file from the given directory.
///
/// Returns `None` if the file doesn't exist (config is optional).
/// Returns an error if the file exists but can't be parsed.
pub fn read_config(dir: &Path) -> Result<Option<StoreGenConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| StoreGenError::Config {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let config: StoreGenConfig = toml::from_str(&content).map_err(|e| StoreGenError::Config {
        message: format!("Failed to parse {}: {}", path.display(), e),
    })?;

    Ok(Some(config))
}
