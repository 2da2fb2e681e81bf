//! Storage type to GraphQL scalar mapping.
//!
//! ORM column types (`INTEGER`, `TEXT`, `BOOLEAN`, ...) are translated into
//! the five built-in GraphQL scalars. Identifiers outside the table pass
//! through unchanged so custom scalars and enums can be named directly in a
//! model definition.

mod scalars;

pub use scalars::{GraphQLScalar, VIRTUAL_TYPE, is_virtual, storage_type_to_graphql};
