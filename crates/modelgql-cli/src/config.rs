use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use modelgql_schema::SchemaConfig;
use tracing::debug;

/// Config file looked up next to the registry when no path is given.
pub const CONFIG_FILE_NAME: &str = "modelgql.toml";

/// Picks the config file to load, if any.
fn config_path(cli_config: Option<&Path>, registry: &Path) -> Option<PathBuf> {
    // 1. --config flag / MODELGQL_CONFIG env
    if let Some(path) = cli_config {
        return Some(path.to_path_buf());
    }
    // 2. modelgql.toml next to the registry
    let sibling = registry
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(CONFIG_FILE_NAME);
    sibling.exists().then_some(sibling)
}

/// Loads the schema configuration for `registry`.
///
/// An explicitly given file must exist; otherwise defaults are used when no
/// config sits next to the registry.
pub fn load(cli_config: Option<&Path>, registry: &Path) -> Result<SchemaConfig> {
    let Some(path) = config_path(cli_config, registry) else {
        debug!("No config file found, using defaults");
        return Ok(SchemaConfig::default());
    };

    debug!(path = %path.display(), "Loading config");
    SchemaConfig::from_file(&path).with_context(|| format!("Cannot load config {}", path.display()))
}
