//! Entity type generator.
//!
//! For every entity this produces three declarations:
//!
//! - the object type, named after the capitalized entity name, holding the
//!   attribute fields followed by the association fields
//! - `_createInput<Type>`, holding the creatable attributes
//! - `_updateInput<Type>`, holding the updatable attributes

use tracing::trace;

use crate::naming::{create_input_name, update_input_name};
use crate::registry::{Entity, ModelRegistry};
use crate::sdl::{Definition, TypeDefinition};

use super::associations::expand_associations;
use super::fields::{create_fields, type_field, update_fields};

/// The declarations generated for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTypes {
    pub object: TypeDefinition,
    pub create_input: TypeDefinition,
    pub update_input: TypeDefinition,
}

impl EntityTypes {
    /// Generates the declarations for `entity`.
    pub fn generate(registry: &ModelRegistry, entity: &Entity) -> Self {
        let type_name = entity.type_name();
        trace!(entity = %entity.name, type_name = %type_name, "Generating entity types");

        let object = TypeDefinition::object(&type_name)
            .fields(
                entity
                    .attributes
                    .iter()
                    .map(|(name, attr)| type_field(name, attr)),
            )
            .fields(expand_associations(registry, entity));

        let create_input = TypeDefinition::input(create_input_name(&type_name))
            .fields(create_fields(entity));
        let update_input = TypeDefinition::input(update_input_name(&type_name))
            .fields(update_fields(entity));

        Self {
            object,
            create_input,
            update_input,
        }
    }

    /// The three declarations in emission order.
    pub fn into_definitions(self) -> [Definition; 3] {
        [
            self.object.into(),
            self.create_input.into(),
            self.update_input.into(),
        ]
    }
}
