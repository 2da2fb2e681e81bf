//! Per-attribute field rules.
//!
//! Each attribute is looked at in four contexts: the object type, search
//! arguments, the create input and the update input. A rule returns the
//! field signature for that context or `None` when the attribute is left
//! out of it.
//!
//! An attribute's override type only shows up on the object type. Input
//! contexts use the scalar mapped from the storage type, because an override
//! commonly names an output object type that is not valid as input.

use crate::registry::{AttributeSpec, Entity};
use crate::sdl::{FieldDefinition, InputValue, TypeRef};
use crate::types::is_virtual;

use super::input_types::operator_filter;

/// Applies `!` when the column is NOT NULL.
fn with_nullability(type_name: &str, allow_null: bool) -> TypeRef {
    if allow_null {
        TypeRef::named(type_name)
    } else {
        TypeRef::named_nn(type_name)
    }
}

/// Object type field for an attribute.
///
/// Primary keys are always `ID!`.
pub fn type_field(name: &str, attr: &AttributeSpec) -> FieldDefinition {
    if attr.primary_key {
        return FieldDefinition::new(name, TypeRef::named_nn(TypeRef::ID));
    }
    FieldDefinition::new(name, with_nullability(attr.graphql_type(), attr.allow_null))
}

/// Search argument for an attribute.
///
/// Primary keys are skipped here; [`primary_key_filters`] appends them so
/// each key appears exactly once in the argument list.
pub fn search_field(entity: &Entity, name: &str, attr: &AttributeSpec) -> Option<InputValue> {
    if !attr.searchable || is_virtual(&attr.storage_type) || attr.primary_key {
        return None;
    }

    let ty = if entity.flags.search_operation {
        operator_filter(false)
    } else {
        TypeRef::named(attr.input_type())
    };
    Some(InputValue::new(name, ty))
}

/// Operator filters on the primary key attributes.
///
/// Optional when narrowing a search, required when addressing rows to
/// update or delete.
pub fn primary_key_filters(entity: &Entity, required: bool) -> Vec<InputValue> {
    entity
        .primary_keys()
        .map(|(name, _)| InputValue::new(name, operator_filter(required)))
        .collect()
}

/// Pagination, ordering and grouping controls for search arguments.
pub fn table_handler_fields() -> Vec<InputValue> {
    vec![
        InputValue::new("_offset", TypeRef::named(TypeRef::INT)),
        InputValue::new("_limit", TypeRef::named(TypeRef::INT)),
        InputValue::new("_orderBy", TypeRef::named_nn_list_nn(TypeRef::STRING).list()),
        InputValue::new("_group", TypeRef::named_nn_list(TypeRef::STRING)),
    ]
}

/// Full search argument list of an entity.
///
/// Attribute filters in declaration order, then primary key filters, then
/// the table handler controls unless the entity turns them off.
pub fn search_fields(entity: &Entity) -> Vec<InputValue> {
    let mut fields: Vec<InputValue> = entity
        .attributes
        .iter()
        .filter_map(|(name, attr)| search_field(entity, name, attr))
        .collect();

    fields.extend(primary_key_filters(entity, false));

    if entity.flags.table_handler {
        fields.extend(table_handler_fields());
    }

    fields
}

/// Create input field for an attribute.
pub fn create_field(name: &str, attr: &AttributeSpec) -> Option<InputValue> {
    if !attr.creatable {
        return None;
    }

    if attr.primary_key {
        // Auto-increment keys are assigned by the store
        if attr.auto_increment {
            return None;
        }
        return Some(InputValue::new(name, TypeRef::named_nn(TypeRef::ID)));
    }

    // Managed timestamps are filled in by the ORM
    let allow_null = attr.allow_null || attr.is_timestamp;
    Some(InputValue::new(name, with_nullability(attr.input_type(), allow_null)))
}

/// Update input field for an attribute. Always optional.
pub fn update_field(name: &str, attr: &AttributeSpec) -> Option<InputValue> {
    if !attr.updatable || attr.primary_key {
        return None;
    }
    Some(InputValue::new(name, TypeRef::named(attr.input_type())))
}

/// Create input fields of an entity, in declaration order.
pub fn create_fields(entity: &Entity) -> Vec<InputValue> {
    entity
        .attributes
        .iter()
        .filter_map(|(name, attr)| create_field(name, attr))
        .collect()
}

/// Update input fields of an entity, in declaration order.
pub fn update_fields(entity: &Entity) -> Vec<InputValue> {
    entity
        .attributes
        .iter()
        .filter_map(|(name, attr)| update_field(name, attr))
        .collect()
}
