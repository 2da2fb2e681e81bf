//! Root mutation fields.
//!
//! ```graphql
//! createTask(input: _createInputTask): Task!
//! updateTask(id: _inputStringOperator!, input: _updateInputTask): [Int]!
//! deleteTask(id: _inputStringOperator!): Int!
//! ```
//!
//! Update returns the affected-row array of the ORM's bulk update, delete
//! returns the affected-row count. Both address rows through required
//! operator filters on the primary key.

use tracing::trace;

use crate::naming::{capitalize_first, create_input_name, update_input_name};
use crate::registry::Entity;
use crate::sdl::{FieldDefinition, InputValue, TypeRef};

use super::fields::primary_key_filters;

/// Mutation fields for `entity`, each gated by its own flag.
pub fn mutation_fields(entity: &Entity) -> Vec<FieldDefinition> {
    let type_name = entity.type_name();
    let singular = capitalize_first(entity.singular());
    let mut fields = Vec::with_capacity(3);

    if entity.flags.create {
        fields.push(
            FieldDefinition::new(format!("create{singular}"), TypeRef::named_nn(&type_name))
                .argument(InputValue::new("input", TypeRef::named(create_input_name(&type_name)))),
        );
    }

    if entity.flags.update {
        fields.push(
            FieldDefinition::new(format!("update{singular}"), TypeRef::named_list_nn(TypeRef::INT))
                .arguments(primary_key_filters(entity, true))
                .argument(InputValue::new("input", TypeRef::named(update_input_name(&type_name)))),
        );
    }

    if entity.flags.delete {
        fields.push(
            FieldDefinition::new(format!("delete{singular}"), TypeRef::named_nn(TypeRef::INT))
                .arguments(primary_key_filters(entity, true)),
        );
    }

    trace!(entity = %entity.name, count = fields.len(), "Generated mutation fields");
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{AttributeSpec, EntityFlags, ModelRegistry};

    fn rendered(entity: &Entity) -> Vec<String> {
        mutation_fields(entity).iter().map(ToString::to_string).collect()
    }

    fn task(flags: EntityFlags) -> ModelRegistry {
        ModelRegistry::new().with(
            Entity::new("task")
                .attribute("id", AttributeSpec::new("INTEGER").primary_key().auto_increment())
                .attribute("title", AttributeSpec::new("STRING"))
                .flags(flags),
        )
    }

    #[test]
    fn test_mutation_fields() {
        let registry = task(EntityFlags::default());
        assert_eq!(
            rendered(registry.get("task").unwrap()),
            vec![
                "createTask(input: _createInputTask): Task!",
                "updateTask(id: _inputStringOperator!, input: _updateInputTask): [Int]!",
                "deleteTask(id: _inputStringOperator!): Int!",
            ]
        );
    }

    #[test]
    fn test_delete_disabled() {
        let registry = task(EntityFlags {
            delete: false,
            ..EntityFlags::default()
        });
        let names: Vec<_> = mutation_fields(registry.get("task").unwrap())
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["createTask", "updateTask"]);
    }

    #[test]
    fn test_all_disabled() {
        let registry = task(EntityFlags {
            create: false,
            update: false,
            delete: false,
            ..EntityFlags::default()
        });
        assert!(mutation_fields(registry.get("task").unwrap()).is_empty());
    }

    #[test]
    fn test_singular_form_names_mutations() {
        let registry = ModelRegistry::new().with(
            Entity::new("userProfile")
                .naming("profile", "profiles")
                .attribute("userId", AttributeSpec::new("INTEGER").primary_key()),
        );
        assert_eq!(
            rendered(registry.get("userProfile").unwrap()),
            vec![
                "createProfile(input: _createInputUserProfile): UserProfile!",
                "updateProfile(userId: _inputStringOperator!, input: _updateInputUserProfile): [Int]!",
                "deleteProfile(userId: _inputStringOperator!): Int!",
            ]
        );
    }
}
