//! Schema builder.
//!
//! This module provides `SchemaBuilder`, which assembles the complete SDL
//! document for a [`ModelRegistry`]. The output order is fixed:
//!
//! 1. the `_inputStringOperator` declaration
//! 2. per entity, in registry order: object type, create input, update input
//! 3. caller-supplied type fragments
//! 4. `type Query`: generated fields, then caller-supplied query fragments
//! 5. `type Mutation`: generated fields, then caller-supplied mutation fragments
//!
//! Building is a pure function of the registry, configuration and
//! extensions, so repeated builds produce byte-identical text. Generated and
//! caller-supplied names are not checked for collisions.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SchemaConfig;
use crate::error::{RegistryIssue, SchemaError};
use crate::registry::{Entity, ModelRegistry};
use crate::sdl::{Definition, Document, SdlWriter, TypeDefinition};

use super::input_types::operator_input_type;
use super::mutation::mutation_fields;
use super::query::query_fields;
use super::type_generator::EntityTypes;

/// Pre-formatted SDL fragments spliced into the generated schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaExtensions {
    /// Whole declarations, emitted after the generated entity types.
    #[serde(default)]
    pub types: Vec<String>,
    /// Fields appended to `type Query`.
    #[serde(default)]
    pub queries: Vec<String>,
    /// Fields appended to `type Mutation`.
    #[serde(default)]
    pub mutations: Vec<String>,
}

impl SchemaExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, fragment: impl Into<String>) -> Self {
        self.types.push(fragment.into());
        self
    }

    #[must_use]
    pub fn with_query(mut self, fragment: impl Into<String>) -> Self {
        self.queries.push(fragment.into());
        self
    }

    #[must_use]
    pub fn with_mutation(mut self, fragment: impl Into<String>) -> Self {
        self.mutations.push(fragment.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.queries.is_empty() && self.mutations.is_empty()
    }
}

/// Builds SDL text from a model registry.
///
/// # Example
///
/// ```
/// use modelgql_schema::{AttributeSpec, Entity, ModelRegistry, SchemaBuilder};
///
/// let registry = ModelRegistry::new().with(
///     Entity::new("task")
///         .attribute("id", AttributeSpec::new("INTEGER").primary_key().auto_increment())
///         .attribute("title", AttributeSpec::new("STRING").not_null()),
/// );
///
/// let sdl = SchemaBuilder::new(&registry).build();
/// assert!(sdl.contains("type Task {"));
/// ```
#[derive(Debug, Clone)]
pub struct SchemaBuilder<'a> {
    /// Registry the schema is generated from.
    registry: &'a ModelRegistry,

    /// Configuration options, including extension fragments.
    config: SchemaConfig,

    /// Entity names exposed through Query and Mutation. `None` exposes all.
    exposed: Option<IndexSet<String>>,
}

impl<'a> SchemaBuilder<'a> {
    /// Creates a new schema builder with the default configuration.
    #[must_use]
    pub fn new(registry: &'a ModelRegistry) -> Self {
        Self {
            registry,
            config: SchemaConfig::default(),
            exposed: None,
        }
    }

    /// Replaces the configuration, extensions included.
    #[must_use]
    pub fn config(mut self, config: SchemaConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the extension fragments.
    #[must_use]
    pub fn extensions(mut self, extensions: SchemaExtensions) -> Self {
        self.config.extensions = extensions;
        self
    }

    /// Restricts and orders the entities that get root Query and Mutation
    /// fields.
    ///
    /// Object and input types are still generated for every registered
    /// entity so association fields keep resolving. Names missing from the
    /// registry are skipped. Repeated names count once, at their first
    /// position.
    #[must_use]
    pub fn expose<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Entities exposed through the root types, in exposure order.
    fn exposed_entities(&self) -> Vec<&'a Entity> {
        match &self.exposed {
            None => self.registry.iter().collect(),
            Some(names) => names
                .iter()
                .filter_map(|name| self.registry.get(name))
                .collect(),
        }
    }

    /// Exposed names with no registered entity.
    fn unknown_exposed(&self) -> Vec<RegistryIssue> {
        self.exposed
            .iter()
            .flatten()
            .filter(|name| !self.registry.contains(name))
            .map(|name| RegistryIssue::UnknownEntity {
                entity: name.clone(),
            })
            .collect()
    }

    /// All inconsistencies the default build omits silently.
    pub fn issues(&self) -> Vec<RegistryIssue> {
        let mut issues = self.registry.diagnose();
        issues.extend(self.unknown_exposed());
        issues
    }

    /// Builds the structured document.
    pub fn document(&self) -> Document {
        let extensions = &self.config.extensions;
        let mut document = Document::new();

        document.push(operator_input_type());

        for entity in self.registry.iter() {
            document
                .definitions
                .extend(EntityTypes::generate(self.registry, entity).into_definitions());
        }

        document
            .definitions
            .extend(extensions.types.iter().cloned().map(Definition::Raw));

        let exposed = self.exposed_entities();

        let query = TypeDefinition::object("Query")
            .fields(exposed.iter().flat_map(|entity| query_fields(entity)))
            .raw_fields(extensions.queries.iter().cloned());
        let mutation = TypeDefinition::object("Mutation")
            .fields(exposed.iter().flat_map(|entity| mutation_fields(entity)))
            .raw_fields(extensions.mutations.iter().cloned());

        debug!(
            entities = self.registry.len(),
            exposed = exposed.len(),
            query_fields = query.fields.len(),
            mutation_fields = mutation.fields.len(),
            "Assembled schema document"
        );

        document.push(query);
        document.push(mutation);
        document
    }

    /// Builds the SDL text.
    ///
    /// Registry inconsistencies are logged as warnings. Unresolved parts
    /// are left out of the output.
    pub fn build(&self) -> String {
        for issue in self.issues() {
            warn!(%issue, "Registry inconsistency");
        }
        self.render()
    }

    /// Builds the SDL text, failing on any registry inconsistency.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InconsistentRegistry`] listing every issue.
    pub fn build_strict(&self) -> Result<String, SchemaError> {
        let issues = self.issues();
        if !issues.is_empty() {
            return Err(SchemaError::InconsistentRegistry(issues));
        }
        Ok(self.render())
    }

    /// Builds with [`build_strict`](Self::build_strict) when the
    /// configuration asks for it, [`build`](Self::build) otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error only in strict mode.
    pub fn generate(&self) -> Result<String, SchemaError> {
        if self.config.strict {
            self.build_strict()
        } else {
            Ok(self.build())
        }
    }

    fn render(&self) -> String {
        SdlWriter::new(self.config.indent).render(&self.document())
    }
}

/// Generates the SDL for `registry` with default settings.
pub fn generate_schema(registry: &ModelRegistry, extensions: SchemaExtensions) -> String {
    SchemaBuilder::new(registry).extensions(extensions).build()
}
