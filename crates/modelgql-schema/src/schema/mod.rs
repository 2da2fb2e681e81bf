//! SDL generation from the model registry.
//!
//! ## Components
//!
//! - [`input_types`] - the fixed `_inputStringOperator` filter input
//! - [`fields`] - per-attribute rules for the type, search, create and
//!   update contexts
//! - [`associations`] - association fields on object types
//! - [`type_generator`] - object type plus create/update inputs per entity
//! - [`query`] / [`mutation`] - root field synthesis
//! - [`SchemaBuilder`] - assembles everything into one document
//!
//! ## Architecture
//!
//! The generation process:
//! 1. Attributes are mapped to fields through the rule functions
//! 2. Associations are resolved against the registry and expanded
//! 3. Entity declarations and root fields are collected into a `Document`
//! 4. `SdlWriter` renders the document to text

pub mod associations;
mod builder;
pub mod fields;
pub mod input_types;
pub mod mutation;
pub mod query;
pub mod type_generator;

pub use builder::{SchemaBuilder, SchemaExtensions, generate_schema};
pub use input_types::{OPERATOR_INPUT, operator_input_type};
pub use type_generator::EntityTypes;
