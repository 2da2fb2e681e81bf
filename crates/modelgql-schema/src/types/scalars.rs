//! The storage-type lookup table.

use std::fmt;

/// Storage type marking a computed attribute with no backing column.
pub const VIRTUAL_TYPE: &str = "VIRTUAL";

/// The closed set of scalars produced by the lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphQLScalar {
    Id,
    String,
    Int,
    Float,
    Boolean,
}

impl GraphQLScalar {
    /// Looks up the scalar for an ORM storage type key. Case-sensitive.
    #[must_use]
    pub fn from_storage_type(storage_type: &str) -> Option<Self> {
        match storage_type {
            "ID" => Some(Self::Id),

            // Character data, identifiers and calendar values travel as strings
            "TEXT" | "STRING" | "CHAR" | "UUID" | "UUIDV1" | "UUIDV4" | "DATE" | "TIME"
            | VIRTUAL_TYPE => Some(Self::String),

            "INTEGER" | "TINYINT" | "SMALLINT" | "MEDIUMINT" | "BIGINT" => Some(Self::Int),

            "FLOAT" | "DOUBLE" | "REAL" | "DECIMALS" | "DECIMAL" => Some(Self::Float),

            "BOOLEAN" => Some(Self::Boolean),

            _ => None,
        }
    }

    /// The GraphQL name of this scalar.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
        }
    }
}

impl fmt::Display for GraphQLScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a storage type key to the GraphQL type name used in the schema.
///
/// Unknown keys are returned unchanged, which lets a model name a custom
/// scalar or enum (`Date`, `Role`, ...) as its type.
pub fn storage_type_to_graphql(storage_type: &str) -> &str {
    GraphQLScalar::from_storage_type(storage_type)
        .map(GraphQLScalar::as_str)
        .unwrap_or(storage_type)
}

/// Checks if a storage type is the computed-attribute marker.
pub fn is_virtual(storage_type: &str) -> bool {
    storage_type == VIRTUAL_TYPE
}
