//! Error types for registry loading and schema generation.
//!
//! Generation itself never fails: inconsistent input is omitted from the
//! output. Errors only come from reading registry and config files, from
//! invalid configuration, and from strict builds that promote registry
//! inconsistencies to a hard failure.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur around schema generation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A registry or config file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A registry file is not valid JSON for the registry format.
    #[error("Invalid registry definition: {0}")]
    InvalidRegistry(#[from] serde_json::Error),

    /// A config file is not valid TOML for [`crate::SchemaConfig`].
    #[error("Invalid config file: {0}")]
    InvalidConfigFile(#[from] toml::de::Error),

    /// Config values out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Strict build found registry inconsistencies.
    #[error("Registry is inconsistent ({} issue(s)): {}", .0.len(), join_issues(.0))]
    InconsistentRegistry(Vec<RegistryIssue>),
}

/// A registry inconsistency that default builds skip silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryIssue {
    /// An entity has no primary key attribute.
    #[error("entity '{entity}' has no primary key")]
    MissingPrimaryKey { entity: String },

    /// An entity declares more than one primary key attribute.
    #[error("entity '{entity}' has {count} primary keys")]
    MultiplePrimaryKeys { entity: String, count: usize },

    /// An association target does not resolve to a registered entity.
    #[error("association '{entity}.{alias}' targets unknown entity '{target}'")]
    UnresolvedAssociation {
        entity: String,
        alias: String,
        target: String,
    },

    /// Two fields of one object type share a name.
    #[error("entity '{entity}' emits field '{field}' more than once")]
    DuplicateField { entity: String, field: String },

    /// A selected entity name is not present in the registry.
    #[error("entity '{entity}' is not registered")]
    UnknownEntity { entity: String },
}

fn join_issues(issues: &[RegistryIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl SchemaError {
    /// Create a new Io error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new InvalidConfig error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_messages() {
        let issue = RegistryIssue::UnresolvedAssociation {
            entity: "user".into(),
            alias: "posts".into(),
            target: "post".into(),
        };
        assert_eq!(
            issue.to_string(),
            "association 'user.posts' targets unknown entity 'post'"
        );
        assert_eq!(
            RegistryIssue::MissingPrimaryKey {
                entity: "tag".into()
            }
            .to_string(),
            "entity 'tag' has no primary key"
        );
    }

    #[test]
    fn test_inconsistent_registry_lists_issues() {
        let err = SchemaError::InconsistentRegistry(vec![
            RegistryIssue::UnknownEntity {
                entity: "ghost".into(),
            },
            RegistryIssue::MultiplePrimaryKeys {
                entity: "pair".into(),
                count: 2,
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Registry is inconsistent (2 issue(s)): entity 'ghost' is not registered; entity 'pair' has 2 primary keys"
        );
    }

    #[test]
    fn test_invalid_config_message() {
        let err = SchemaError::invalid_config("indent must be between 1 and 8");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: indent must be between 1 and 8"
        );
    }
}
