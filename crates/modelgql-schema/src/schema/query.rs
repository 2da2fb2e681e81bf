//! Root query fields.
//!
//! Each searchable entity contributes a list, a count and a single-row
//! lookup, all sharing the entity's search arguments:
//!
//! ```graphql
//! tasks(title: _inputStringOperator, ...): [Task!]!
//! tasksCount(title: _inputStringOperator, ...): Int
//! task(title: _inputStringOperator, ...): Task
//! ```

use tracing::trace;

use crate::naming::count_field_name;
use crate::registry::Entity;
use crate::sdl::{FieldDefinition, TypeRef};

use super::fields::search_fields;

/// Query fields for `entity`, empty when its search flag is off.
pub fn query_fields(entity: &Entity) -> Vec<FieldDefinition> {
    if !entity.flags.search {
        trace!(entity = %entity.name, "Search disabled, no query fields");
        return Vec::new();
    }

    let type_name = entity.type_name();
    let args = search_fields(entity);

    vec![
        FieldDefinition::new(entity.plural(), TypeRef::named_nn_list_nn(&type_name))
            .arguments(args.clone()),
        FieldDefinition::new(count_field_name(entity.plural()), TypeRef::named(TypeRef::INT))
            .arguments(args.clone()),
        FieldDefinition::new(entity.singular(), TypeRef::named(type_name)).arguments(args),
    ]
}
