//! Model registry consumed by the schema generator.
//!
//! The registry is the ORM layer's view of the data model: entities with
//! ordered attributes, associations and per-entity generation flags. It is
//! built once, either programmatically or from a JSON registry file, and is
//! read-only afterwards. Derived data (default naming forms, managed
//! timestamp flags, association aliases) is resolved at registration time so
//! generators never have to probe for it.
//!
//! # Registry file format
//!
//! ```json
//! {
//!   "models": {
//!     "task": {
//!       "naming": { "singular": "task", "plural": "tasks" },
//!       "attributes": {
//!         "id": { "type": "INTEGER", "primaryKey": true, "autoIncrement": true },
//!         "title": { "type": "STRING", "allowNull": false },
//!         "secret": { "type": "STRING", "gqSearch": false }
//!       },
//!       "associations": {
//!         "owner": { "target": "user", "multiplicity": "one" }
//!       },
//!       "timestamps": {},
//!       "generateGqDelete": false
//!     }
//!   }
//! }
//! ```

use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{RegistryIssue, SchemaError};
use crate::naming;
use crate::types::storage_type_to_graphql;

fn default_true() -> bool {
    true
}

fn default_created_at() -> Option<String> {
    Some("createdAt".to_string())
}

fn default_updated_at() -> Option<String> {
    Some("updatedAt".to_string())
}

/// Singular and plural forms used for root field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingForms {
    #[serde(default)]
    pub singular: String,
    #[serde(default)]
    pub plural: String,
}

impl NamingForms {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }
}

/// Per-entity generation switches. Every flag defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFlags {
    /// Expose list/count/single root queries.
    #[serde(default = "default_true", rename = "generateGqSearch")]
    pub search: bool,
    /// Generate the `create<Singular>` mutation.
    #[serde(default = "default_true", rename = "generateGqCreate")]
    pub create: bool,
    /// Generate the `update<Singular>` mutation.
    #[serde(default = "default_true", rename = "generateGqUpdate")]
    pub update: bool,
    /// Generate the `delete<Singular>` mutation.
    #[serde(default = "default_true", rename = "generateGqDelete")]
    pub delete: bool,
    /// Filter with the operator input type instead of exact scalar matches.
    #[serde(default = "default_true", rename = "generateGqSearchOperation")]
    pub search_operation: bool,
    /// Append `_offset`/`_limit`/`_orderBy`/`_group` to search arguments.
    #[serde(default = "default_true", rename = "generateGqTableHandler")]
    pub table_handler: bool,
}

impl Default for EntityFlags {
    fn default() -> Self {
        Self {
            search: true,
            create: true,
            update: true,
            delete: true,
            search_operation: true,
            table_handler: true,
        }
    }
}

/// Names of the ORM-managed timestamp columns. `None` disables a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampColumns {
    #[serde(default = "default_created_at")]
    pub created_at: Option<String>,
    #[serde(default = "default_updated_at")]
    pub updated_at: Option<String>,
}

impl Default for TimestampColumns {
    fn default() -> Self {
        Self {
            created_at: default_created_at(),
            updated_at: default_updated_at(),
        }
    }
}

impl TimestampColumns {
    /// Checks if `attribute` is one of the managed columns.
    pub fn contains(&self, attribute: &str) -> bool {
        self.created_at.as_deref() == Some(attribute)
            || self.updated_at.as_deref() == Some(attribute)
    }
}

/// Metadata of one entity attribute (column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSpec {
    /// Storage type key, e.g. `INTEGER` or `VIRTUAL`.
    #[serde(rename = "type")]
    pub storage_type: String,

    #[serde(default)]
    pub primary_key: bool,

    #[serde(default)]
    pub auto_increment: bool,

    /// Column accepts NULL. Defaults to `true` like the ORM does.
    #[serde(default = "default_true")]
    pub allow_null: bool,

    /// Explicit schema type, used instead of `storage_type`.
    #[serde(default, rename = "gqType", skip_serializing_if = "Option::is_none")]
    pub override_type: Option<String>,

    #[serde(default = "default_true", rename = "gqSearch")]
    pub searchable: bool,

    #[serde(default = "default_true", rename = "gqCreate")]
    pub creatable: bool,

    #[serde(default = "default_true", rename = "gqUpdate")]
    pub updatable: bool,

    /// Set at registration for the entity's managed timestamp columns.
    #[serde(skip)]
    pub is_timestamp: bool,
}

impl AttributeSpec {
    /// Creates a nullable, fully visible attribute of the given storage type.
    pub fn new(storage_type: impl Into<String>) -> Self {
        Self {
            storage_type: storage_type.into(),
            primary_key: false,
            auto_increment: false,
            allow_null: true,
            override_type: None,
            searchable: true,
            creatable: true,
            updatable: true,
            is_timestamp: false,
        }
    }

    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.allow_null = false;
        self
    }

    #[must_use]
    pub fn override_type(mut self, type_name: impl Into<String>) -> Self {
        self.override_type = Some(type_name.into());
        self
    }

    #[must_use]
    pub fn not_searchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    #[must_use]
    pub fn not_creatable(mut self) -> Self {
        self.creatable = false;
        self
    }

    #[must_use]
    pub fn not_updatable(mut self) -> Self {
        self.updatable = false;
        self
    }

    /// GraphQL type name of this attribute on the object type, without
    /// nullability.
    ///
    /// The override type wins over the storage type; both go through the
    /// storage type table, so `gqType: "INTEGER"` still yields `Int`.
    pub fn graphql_type(&self) -> &str {
        storage_type_to_graphql(self.override_type.as_deref().unwrap_or(&self.storage_type))
    }

    /// Scalar used for this attribute in input types and exact-match
    /// search arguments. Always derived from the storage type, since an
    /// override may name an output-only object type.
    pub fn input_type(&self) -> &str {
        storage_type_to_graphql(&self.storage_type)
    }
}

/// Whether an association points at one or many target rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Multiplicity {
    One,
    Many,
}

/// A relationship from one entity to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationSpec {
    /// Field name on the parent type. Taken from the map key in files.
    #[serde(default, skip_serializing)]
    pub alias: String,

    /// Raw name of the target entity.
    pub target: String,

    /// Declared association name, tried before `target` during resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub multiplicity: Multiplicity,
}

impl AssociationSpec {
    pub fn new(
        alias: impl Into<String>,
        target: impl Into<String>,
        multiplicity: Multiplicity,
    ) -> Self {
        Self {
            alias: alias.into(),
            target: target.into(),
            name: None,
            multiplicity,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Registry keys tried, in order, when resolving the target.
    pub fn candidate_names(&self) -> impl Iterator<Item = &str> {
        [self.name.as_deref().unwrap_or(&self.alias), self.target.as_str()].into_iter()
    }
}

/// One model of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Registry key. Taken from the map key in files.
    #[serde(default, skip_serializing)]
    pub name: String,

    #[serde(default)]
    pub naming: NamingForms,

    #[serde(default)]
    pub attributes: IndexMap<String, AttributeSpec>,

    #[serde(default)]
    pub associations: IndexMap<String, AssociationSpec>,

    #[serde(flatten)]
    pub flags: EntityFlags,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<TimestampColumns>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            naming: NamingForms::default(),
            attributes: IndexMap::new(),
            associations: IndexMap::new(),
            flags: EntityFlags::default(),
            timestamps: None,
        }
    }

    #[must_use]
    pub fn naming(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.naming = NamingForms::new(singular, plural);
        self
    }

    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, spec: AttributeSpec) -> Self {
        self.attributes.insert(name.into(), spec);
        self
    }

    #[must_use]
    pub fn association(mut self, spec: AssociationSpec) -> Self {
        self.associations.insert(spec.alias.clone(), spec);
        self
    }

    #[must_use]
    pub fn has_many(self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.association(AssociationSpec::new(alias, target, Multiplicity::Many))
    }

    #[must_use]
    pub fn has_one(self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.association(AssociationSpec::new(alias, target, Multiplicity::One))
    }

    #[must_use]
    pub fn flags(mut self, flags: EntityFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn timestamps(mut self, columns: TimestampColumns) -> Self {
        self.timestamps = Some(columns);
        self
    }

    /// GraphQL type name: the capitalized entity name.
    pub fn type_name(&self) -> String {
        naming::type_name(&self.name)
    }

    pub fn singular(&self) -> &str {
        &self.naming.singular
    }

    pub fn plural(&self) -> &str {
        &self.naming.plural
    }

    pub fn get_attribute(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.get(name)
    }

    /// Primary key attributes in declaration order.
    pub fn primary_keys(&self) -> impl Iterator<Item = (&str, &AttributeSpec)> {
        self.attributes
            .iter()
            .filter(|(_, attr)| attr.primary_key)
            .map(|(name, attr)| (name.as_str(), attr))
    }

    /// Fills in derived data. Called once when the entity is registered.
    fn resolve(mut self) -> Self {
        if self.naming.singular.is_empty() {
            self.naming.singular = self.name.clone();
        }
        if self.naming.plural.is_empty() {
            self.naming.plural = naming::pluralize(&self.naming.singular);
        }

        for (name, attr) in &mut self.attributes {
            attr.is_timestamp = self
                .timestamps
                .as_ref()
                .is_some_and(|columns| columns.contains(name));
        }

        for (alias, assoc) in &mut self.associations {
            if assoc.alias.is_empty() {
                assoc.alias = alias.clone();
            }
        }

        self
    }
}

/// An association target found in the registry.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedAssociation<'a> {
    /// Registry key the association resolved to.
    pub key: &'a str,
    pub entity: &'a Entity,
}

impl ResolvedAssociation<'_> {
    /// Type name of the target, derived from the matched key.
    pub fn type_name(&self) -> String {
        naming::type_name(self.key)
    }
}

/// On-disk registry document.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    models: IndexMap<String, Entity>,
}

/// Ordered map of entity name to [`Entity`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRegistry {
    entities: IndexMap<String, Entity>,
}

impl ModelRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity under its name, resolving derived data.
    ///
    /// Registering a name twice replaces the earlier entity in place.
    pub fn register(&mut self, entity: Entity) {
        let entity = entity.resolve();
        trace!(
            entity = %entity.name,
            attributes = entity.attributes.len(),
            associations = entity.associations.len(),
            "Registered entity"
        );
        self.entities.insert(entity.name.clone(), entity);
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, entity: Entity) -> Self {
        self.register(entity);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// Entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Entity names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Resolves an association target.
    ///
    /// Tries the declared association name (or the alias when none is
    /// declared), then the raw target name. Returns `None` when neither is a
    /// registry key.
    pub fn resolve_association<'a>(
        &'a self,
        assoc: &AssociationSpec,
    ) -> Option<ResolvedAssociation<'a>> {
        assoc
            .candidate_names()
            .find_map(|name| self.entities.get_key_value(name))
            .map(|(key, entity)| ResolvedAssociation {
                key: key.as_str(),
                entity,
            })
    }

    /// Lists inconsistencies that generation would otherwise skip silently.
    pub fn diagnose(&self) -> Vec<RegistryIssue> {
        let mut issues = Vec::new();

        for entity in self.iter() {
            match entity.primary_keys().count() {
                0 => issues.push(RegistryIssue::MissingPrimaryKey {
                    entity: entity.name.clone(),
                }),
                1 => {}
                count => issues.push(RegistryIssue::MultiplePrimaryKeys {
                    entity: entity.name.clone(),
                    count,
                }),
            }

            for assoc in entity.associations.values() {
                if self.resolve_association(assoc).is_none() {
                    issues.push(RegistryIssue::UnresolvedAssociation {
                        entity: entity.name.clone(),
                        alias: assoc.alias.clone(),
                        target: assoc.target.clone(),
                    });
                }
            }

            for field in self.duplicate_fields(entity) {
                issues.push(RegistryIssue::DuplicateField {
                    entity: entity.name.clone(),
                    field,
                });
            }
        }

        issues
    }

    /// Object type field names `entity` would emit more than once.
    ///
    /// Attributes and resolved associations share one namespace, and a
    /// to-many association also claims its `<alias>Count` field.
    fn duplicate_fields(&self, entity: &Entity) -> Vec<String> {
        let mut names: Vec<String> = entity.attributes.keys().cloned().collect();
        for assoc in entity.associations.values() {
            if self.resolve_association(assoc).is_none() {
                continue;
            }
            names.push(assoc.alias.clone());
            if assoc.multiplicity == Multiplicity::Many {
                names.push(naming::count_field_name(&assoc.alias));
            }
        }

        let mut seen = IndexSet::new();
        let mut duplicates = IndexSet::new();
        for name in names {
            if !seen.insert(name.clone()) {
                duplicates.insert(name);
            }
        }
        duplicates.into_iter().collect()
    }

    /// Parses a registry document.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid registry document.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let file: RegistryFile = serde_json::from_str(json)?;

        let mut registry = Self::new();
        for (name, mut entity) in file.models {
            entity.name = name;
            registry.register(entity);
        }

        debug!(count = registry.len(), "Loaded model registry");
        Ok(registry)
    }

    /// Reads and parses a registry file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::io(path, e))?;
        Self::from_json_str(&content)
    }
}

impl FromIterator<Entity> for ModelRegistry {
    fn from_iter<T: IntoIterator<Item = Entity>>(iter: T) -> Self {
        let mut registry = Self::new();
        for entity in iter {
            registry.register(entity);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Entity {
        Entity::new("post")
            .attribute("id", AttributeSpec::new("INTEGER").primary_key().auto_increment())
            .attribute("title", AttributeSpec::new("STRING"))
    }

    #[test]
    fn test_attribute_defaults() {
        let attr = AttributeSpec::new("STRING");
        assert!(attr.allow_null);
        assert!(attr.searchable && attr.creatable && attr.updatable);
        assert!(!attr.primary_key && !attr.auto_increment && !attr.is_timestamp);
    }

    #[test]
    fn test_graphql_type_prefers_override() {
        assert_eq!(AttributeSpec::new("STRING").graphql_type(), "String");
        assert_eq!(
            AttributeSpec::new("STRING").override_type("Role").graphql_type(),
            "Role"
        );
        assert_eq!(
            AttributeSpec::new("STRING").override_type("INTEGER").graphql_type(),
            "Int"
        );
    }

    #[test]
    fn test_register_derives_naming_forms() {
        let registry = ModelRegistry::new().with(Entity::new("category"));
        let entity = registry.get("category").unwrap();
        assert_eq!(entity.singular(), "category");
        assert_eq!(entity.plural(), "categories");
        assert_eq!(entity.type_name(), "Category");
    }

    #[test]
    fn test_register_keeps_explicit_naming() {
        let registry = ModelRegistry::new().with(Entity::new("person").naming("person", "people"));
        assert_eq!(registry.get("person").unwrap().plural(), "people");
    }

    #[test]
    fn test_register_marks_timestamps() {
        let registry = ModelRegistry::new().with(
            Entity::new("task")
                .attribute("createdAt", AttributeSpec::new("DATE").not_null())
                .attribute("updatedAt", AttributeSpec::new("DATE").not_null())
                .attribute("dueAt", AttributeSpec::new("DATE"))
                .timestamps(TimestampColumns::default()),
        );
        let task = registry.get("task").unwrap();
        assert!(task.get_attribute("createdAt").unwrap().is_timestamp);
        assert!(task.get_attribute("updatedAt").unwrap().is_timestamp);
        assert!(!task.get_attribute("dueAt").unwrap().is_timestamp);
    }

    #[test]
    fn test_timestamps_without_option_are_not_managed() {
        let registry = ModelRegistry::new()
            .with(Entity::new("task").attribute("createdAt", AttributeSpec::new("DATE")));
        assert!(!registry.get("task").unwrap().get_attribute("createdAt").unwrap().is_timestamp);
    }

    #[test]
    fn test_resolve_association_by_alias() {
        let registry = ModelRegistry::new()
            .with(post())
            .with(Entity::new("user").has_one("post", "article"));
        let user = registry.get("user").unwrap();
        let resolved = registry.resolve_association(&user.associations["post"]).unwrap();
        assert_eq!(resolved.key, "post");
        assert_eq!(resolved.type_name(), "Post");
    }

    #[test]
    fn test_resolve_association_falls_back_to_target() {
        let registry = ModelRegistry::new()
            .with(post())
            .with(Entity::new("user").has_many("posts", "post"));
        let user = registry.get("user").unwrap();
        let resolved = registry.resolve_association(&user.associations["posts"]).unwrap();
        assert_eq!(resolved.key, "post");
    }

    #[test]
    fn test_resolve_association_prefers_declared_name() {
        let registry = ModelRegistry::new()
            .with(post())
            .with(Entity::new("article"))
            .with(Entity::new("user").association(
                AssociationSpec::new("writing", "article", Multiplicity::Many).named("post"),
            ));
        let user = registry.get("user").unwrap();
        let resolved = registry.resolve_association(&user.associations["writing"]).unwrap();
        assert_eq!(resolved.key, "post");
    }

    #[test]
    fn test_resolve_association_unresolved() {
        let registry = ModelRegistry::new().with(Entity::new("user").has_many("posts", "post"));
        let user = registry.get("user").unwrap();
        assert!(registry.resolve_association(&user.associations["posts"]).is_none());
    }

    #[test]
    fn test_diagnose() {
        let registry = ModelRegistry::new()
            .with(post())
            .with(
                Entity::new("pair")
                    .attribute("a", AttributeSpec::new("INTEGER").primary_key())
                    .attribute("b", AttributeSpec::new("INTEGER").primary_key()),
            )
            .with(Entity::new("user").has_many("comments", "comment"));

        assert_eq!(
            registry.diagnose(),
            vec![
                RegistryIssue::MultiplePrimaryKeys {
                    entity: "pair".into(),
                    count: 2
                },
                RegistryIssue::MissingPrimaryKey {
                    entity: "user".into()
                },
                RegistryIssue::UnresolvedAssociation {
                    entity: "user".into(),
                    alias: "comments".into(),
                    target: "comment".into()
                },
            ]
        );
    }

    #[test]
    fn test_diagnose_duplicate_fields() {
        let registry = ModelRegistry::new()
            .with(post())
            .with(
                Entity::new("user")
                    .attribute("id", AttributeSpec::new("INTEGER").primary_key())
                    .attribute("posts", AttributeSpec::new("VIRTUAL"))
                    .attribute("draftsCount", AttributeSpec::new("INTEGER"))
                    .has_many("posts", "post")
                    .has_many("drafts", "post")
                    .has_many("comments", "comment"),
            );

        let issues = registry.diagnose();
        assert_eq!(
            issues,
            vec![
                RegistryIssue::UnresolvedAssociation {
                    entity: "user".into(),
                    alias: "comments".into(),
                    target: "comment".into()
                },
                RegistryIssue::DuplicateField {
                    entity: "user".into(),
                    field: "posts".into()
                },
                RegistryIssue::DuplicateField {
                    entity: "user".into(),
                    field: "draftsCount".into()
                },
            ]
        );
    }

    #[test]
    fn test_diagnose_ignores_unresolved_alias_collisions() {
        let registry = ModelRegistry::new().with(
            Entity::new("user")
                .attribute("id", AttributeSpec::new("INTEGER").primary_key())
                .attribute("avatar", AttributeSpec::new("STRING"))
                .has_one("avatar", "image"),
        );
        assert!(
            !registry
                .diagnose()
                .iter()
                .any(|issue| matches!(issue, RegistryIssue::DuplicateField { .. }))
        );
    }

    #[test]
    fn test_input_type_ignores_override() {
        let attr = AttributeSpec::new("VIRTUAL").override_type("Stats");
        assert_eq!(attr.graphql_type(), "Stats");
        assert_eq!(attr.input_type(), "String");
        assert_eq!(AttributeSpec::new("INTEGER").override_type("Count").input_type(), "Int");
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "models": {
                "user": {
                    "attributes": {
                        "id": { "type": "INTEGER", "primaryKey": true, "autoIncrement": true },
                        "email": { "type": "STRING", "allowNull": false, "gqUpdate": false },
                        "createdAt": { "type": "DATE", "allowNull": false }
                    },
                    "associations": {
                        "posts": { "target": "post", "multiplicity": "many" }
                    },
                    "timestamps": { "updatedAt": null },
                    "generateGqDelete": false
                },
                "post": {
                    "naming": { "singular": "post", "plural": "posts" },
                    "attributes": {
                        "id": { "type": "UUID", "primaryKey": true }
                    }
                }
            }
        }"#;

        let registry = ModelRegistry::from_json_str(json).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["user", "post"]);

        let user = registry.get("user").unwrap();
        assert_eq!(user.name, "user");
        assert_eq!(user.plural(), "users");
        assert!(!user.flags.delete);
        assert!(user.flags.create);
        assert_eq!(
            user.attributes.keys().collect::<Vec<_>>(),
            vec!["id", "email", "createdAt"]
        );
        assert!(!user.attributes["email"].allow_null);
        assert!(!user.attributes["email"].updatable);
        assert!(user.attributes["createdAt"].is_timestamp);
        assert_eq!(user.associations["posts"].alias, "posts");
        assert_eq!(user.associations["posts"].multiplicity, Multiplicity::Many);
    }

    #[test]
    fn test_from_json_str_rejects_bad_multiplicity() {
        let json = r#"{ "models": { "user": { "associations": {
            "posts": { "target": "post", "multiplicity": "several" }
        } } } }"#;
        assert!(matches!(
            ModelRegistry::from_json_str(json),
            Err(SchemaError::InvalidRegistry(_))
        ));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = ModelRegistry::from_json_file("/nonexistent/registry.json").unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
    }
}
