//! The operator filter input type.
//!
//! Every searchable attribute is filtered through one shared input type
//! exposing the ORM's comparison operators:
//!
//! ```graphql
//! input _inputStringOperator {
//!   eq: String
//!   in: [String]
//!   between: [String]
//!   ...
//! }
//! ```
//!
//! The declaration does not depend on the registry and is emitted once per
//! schema.

use crate::sdl::{InputValue, TypeDefinition, TypeRef};

/// Name of the operator filter input type.
pub const OPERATOR_INPUT: &str = "_inputStringOperator";

/// Operators taking a single value.
const SCALAR_OPERATORS: &[&str] = &["eq", "ne", "gte", "gt", "lte", "lt", "not"];

/// Set membership operators.
const SET_OPERATORS: &[&str] = &["is", "in", "notIn"];

/// Pattern operators, including case-insensitive and negated variants.
const PATTERN_OPERATORS: &[&str] = &[
    "like",
    "notLike",
    "iLike",
    "notILike",
    "startsWith",
    "endsWith",
    "substring",
    "regexp",
    "notRegexp",
    "iRegexp",
    "notIRegexp",
];

/// Range, geometric, logical, existential and raw passthrough operators.
const LIST_OPERATORS: &[&str] = &[
    "between",
    "notBetween",
    "overlap",
    "contains",
    "contained",
    "adjacent",
    "strictLeft",
    "strictRight",
    "noExtendRight",
    "noExtendLeft",
    "and",
    "or",
    "any",
    "all",
    "values",
    "col",
    "placeholder",
];

/// Builds the `_inputStringOperator` declaration.
pub fn operator_input_type() -> TypeDefinition {
    let single = SCALAR_OPERATORS
        .iter()
        .map(|op| InputValue::new(*op, TypeRef::named(TypeRef::STRING)));
    let sets = SET_OPERATORS
        .iter()
        .map(|op| InputValue::new(*op, TypeRef::named_list(TypeRef::STRING)));
    let patterns = PATTERN_OPERATORS
        .iter()
        .map(|op| InputValue::new(*op, TypeRef::named(TypeRef::STRING)));
    let lists = LIST_OPERATORS
        .iter()
        .map(|op| InputValue::new(*op, TypeRef::named_list(TypeRef::STRING)));

    TypeDefinition::input(OPERATOR_INPUT)
        .fields(single.chain(sets).chain(patterns).chain(lists))
}

/// Type reference for an operator filter argument.
pub fn operator_filter(required: bool) -> TypeRef {
    if required {
        TypeRef::named_nn(OPERATOR_INPUT)
    } else {
        TypeRef::named(OPERATOR_INPUT)
    }
}
