//! Schema generation configuration.
//!
//! Configuration is usually read from a `modelgql.toml` file next to the
//! registry definition.
//!
//! # Example Configuration
//!
//! ```toml
//! indent = 2
//! strict = false
//!
//! [extensions]
//! types = ["scalar Date"]
//! queries = ["ping: String"]
//! mutations = ["login(email: String!, password: String!): String"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::schema::SchemaExtensions;

/// Schema generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Spaces used to indent fields.
    /// Default: 2
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Fail instead of silently omitting inconsistent registry entries.
    /// Default: false
    #[serde(default = "default_strict")]
    pub strict: bool,

    /// Fragments spliced into the generated schema.
    #[serde(default)]
    pub extensions: SchemaExtensions,
}

fn default_indent() -> usize {
    2
}

fn default_strict() -> bool {
    false
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            strict: default_strict(),
            extensions: SchemaExtensions::default(),
        }
    }
}

impl SchemaConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if !(1..=8).contains(&self.indent) {
            return Err(SchemaError::invalid_config("indent must be between 1 and 8"));
        }
        if self
            .extensions
            .types
            .iter()
            .chain(&self.extensions.queries)
            .chain(&self.extensions.mutations)
            .any(|fragment| fragment.trim().is_empty())
        {
            return Err(SchemaError::invalid_config("extension fragments must not be blank"));
        }
        Ok(())
    }

    /// Parses and validates a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or fails validation.
    pub fn from_toml_str(toml: &str) -> Result<Self, SchemaError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::io(path, e))?;
        Self::from_toml_str(&content)
    }
}
