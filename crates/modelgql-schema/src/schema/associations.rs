//! Association fields on object types.
//!
//! A to-one association becomes a required reference field. A to-many
//! association becomes a filterable list plus a companion count field, both
//! taking the target entity's search arguments:
//!
//! ```graphql
//! type User {
//!   posts(title: _inputStringOperator, id: _inputStringOperator, ...): [Post!]!
//!   postsCount(title: _inputStringOperator, id: _inputStringOperator, ...): Int!
//! }
//! ```

use tracing::{debug, trace};

use crate::naming::count_field_name;
use crate::registry::{AssociationSpec, Entity, ModelRegistry, Multiplicity};
use crate::sdl::{FieldDefinition, TypeRef};

use super::fields::search_fields;

/// Fields for a single association, or an empty list when its target does
/// not resolve.
pub fn association_fields(
    registry: &ModelRegistry,
    entity: &Entity,
    assoc: &AssociationSpec,
) -> Vec<FieldDefinition> {
    let Some(resolved) = registry.resolve_association(assoc) else {
        debug!(
            entity = %entity.name,
            alias = %assoc.alias,
            target = %assoc.target,
            "Skipping association with unresolved target"
        );
        return Vec::new();
    };

    let target_type = resolved.type_name();
    trace!(alias = %assoc.alias, target = %target_type, "Expanding association");

    match assoc.multiplicity {
        Multiplicity::One => {
            let field = FieldDefinition::new(&assoc.alias, TypeRef::named_nn(target_type));
            vec![field]
        }
        Multiplicity::Many => {
            let args = search_fields(resolved.entity);
            let count = count_field_name(&assoc.alias);
            vec![
                FieldDefinition::new(&assoc.alias, TypeRef::named_nn_list_nn(target_type))
                    .arguments(args.clone()),
                FieldDefinition::new(count, TypeRef::named_nn(TypeRef::INT))
                    .arguments(args),
            ]
        }
    }
}

/// Fields for all associations of `entity`, in declaration order.
pub fn expand_associations(registry: &ModelRegistry, entity: &Entity) -> Vec<FieldDefinition> {
    entity
        .associations
        .values()
        .flat_map(|assoc| association_fields(registry, entity, assoc))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{AttributeSpec, EntityFlags};

    fn registry() -> ModelRegistry {
        ModelRegistry::new()
            .with(
                Entity::new("post")
                    .attribute("title", AttributeSpec::new("STRING"))
                    .attribute("id", AttributeSpec::new("INTEGER").primary_key().auto_increment())
                    .flags(EntityFlags {
                        table_handler: false,
                        ..EntityFlags::default()
                    }),
            )
            .with(
                Entity::new("user")
                    .attribute("id", AttributeSpec::new("INTEGER").primary_key().auto_increment())
                    .has_many("posts", "post")
                    .has_one("post", "post")
                    .has_many("followers", "follower"),
            )
    }

    fn rendered(fields: &[FieldDefinition]) -> Vec<String> {
        fields.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_many_association_yields_list_and_count() {
        let registry = registry();
        let user = registry.get("user").unwrap();
        let fields = association_fields(&registry, user, &user.associations["posts"]);
        assert_eq!(
            rendered(&fields),
            vec![
                "posts(title: _inputStringOperator, id: _inputStringOperator): [Post!]!",
                "postsCount(title: _inputStringOperator, id: _inputStringOperator): Int!",
            ]
        );
    }

    #[test]
    fn test_one_association_yields_reference() {
        let registry = registry();
        let user = registry.get("user").unwrap();
        let fields = association_fields(&registry, user, &user.associations["post"]);
        assert_eq!(rendered(&fields), vec!["post: Post!"]);
    }

    #[test]
    fn test_unresolved_association_is_omitted() {
        let registry = registry();
        let user = registry.get("user").unwrap();
        assert!(association_fields(&registry, user, &user.associations["followers"]).is_empty());
    }

    #[test]
    fn test_expand_associations_keeps_declaration_order() {
        let registry = registry();
        let user = registry.get("user").unwrap();
        let names: Vec<_> = expand_associations(&registry, user)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["posts", "postsCount", "post"]);
    }
}
