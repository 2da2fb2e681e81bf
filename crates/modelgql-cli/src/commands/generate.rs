use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use modelgql_schema::SchemaBuilder;
use tracing::info;

use crate::cli::GenerateArgs;
use crate::config;
use crate::output::print_success;

pub fn generate(args: &GenerateArgs, config_path: Option<&Path>) -> Result<()> {
    let registry = super::load_registry(&args.registry)?;

    let mut config = config::load(config_path, &args.registry)?;
    if args.strict {
        config.strict = true;
    }

    let mut builder = SchemaBuilder::new(&registry).config(config);
    if !args.expose.is_empty() {
        builder = builder.expose(&args.expose);
    }

    let sdl = builder.generate()?;
    info!(entities = registry.len(), bytes = sdl.len(), "Generated schema");

    match &args.output {
        Some(path) => {
            fs::write(path, &sdl).with_context(|| format!("Cannot write {}", path.display()))?;
            print_success(&format!("Wrote {}", path.display()));
        }
        None => print!("{sdl}"),
    }

    Ok(())
}
