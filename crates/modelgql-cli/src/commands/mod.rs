pub mod check;
pub mod generate;

use std::path::Path;

use anyhow::{Context, Result};
use modelgql_schema::ModelRegistry;

fn load_registry(path: &Path) -> Result<ModelRegistry> {
    ModelRegistry::from_json_file(path)
        .with_context(|| format!("Cannot load registry {}", path.display()))
}
