use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "modelgql")]
#[command(about = "Generate GraphQL SDL from ORM model registries")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to modelgql.toml (defaults to the file next to the registry)
    #[arg(short, long, global = true, env = "MODELGQL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the SDL for a registry file
    Generate(GenerateArgs),
    /// Report registry inconsistencies
    Check(CheckArgs),
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to the registry JSON file
    pub registry: PathBuf,
    /// Write the SDL to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Fail on registry inconsistencies (overrides config)
    #[arg(long)]
    pub strict: bool,
    /// Only expose these entities through Query and Mutation
    #[arg(long, value_delimiter = ',')]
    pub expose: Vec<String>,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to the registry JSON file
    pub registry: PathBuf,
    /// Entities that will be exposed (as for `generate --expose`)
    #[arg(long, value_delimiter = ',')]
    pub expose: Vec<String>,
}
