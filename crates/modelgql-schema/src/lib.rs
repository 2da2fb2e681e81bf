//! # modelgql-schema
//!
//! GraphQL SDL generation from an ORM model registry.
//!
//! Given entities with typed attributes and associations, this crate emits:
//!
//! - the `_inputStringOperator` filter input type
//! - an object type per entity, with association fields
//! - `_createInput<Type>` and `_updateInput<Type>` input types
//! - the root `Query` type (list, count and single lookups)
//! - the root `Mutation` type (create, update, delete)
//!
//! ## Overview
//!
//! Generation is synchronous and side-effect free. It never fails: an
//! association whose target is not registered, an attribute hidden from a
//! context, or an unknown storage type is left out or passed through, so one
//! malformed entity never blocks the rest of the schema. Use
//! [`SchemaBuilder::build_strict`] to turn those inconsistencies into an
//! error instead.
//!
//! ```
//! use modelgql_schema::{AttributeSpec, Entity, ModelRegistry, SchemaExtensions, generate_schema};
//!
//! let registry = ModelRegistry::new().with(
//!     Entity::new("task")
//!         .attribute("id", AttributeSpec::new("INTEGER").primary_key().auto_increment())
//!         .attribute("title", AttributeSpec::new("STRING").not_null())
//!         .attribute("done", AttributeSpec::new("BOOLEAN")),
//! );
//!
//! let sdl = generate_schema(&registry, SchemaExtensions::default());
//! assert!(sdl.contains("createTask(input: _createInputTask): Task!"));
//! ```
//!
//! ## Modules
//!
//! - [`registry`] - Entity, attribute and association metadata
//! - [`types`] - Storage type to GraphQL scalar mapping
//! - [`schema`] - Field rules and schema assembly
//! - [`sdl`] - Structured SDL and text emission
//! - [`config`] - Configuration options
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod naming;
pub mod registry;
pub mod schema;
pub mod sdl;
pub mod types;

// Re-export main types
pub use config::SchemaConfig;
pub use error::{RegistryIssue, SchemaError};
pub use registry::{
    AssociationSpec, AttributeSpec, Entity, EntityFlags, ModelRegistry, Multiplicity, NamingForms,
    ResolvedAssociation, TimestampColumns,
};
pub use schema::{SchemaBuilder, SchemaExtensions, generate_schema};
pub use sdl::{Document, SdlWriter, TypeRef};
pub use types::storage_type_to_graphql;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
