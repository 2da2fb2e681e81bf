//! Structured SDL representation and text emission.
//!
//! Generators never concatenate SDL strings directly. They build
//! [`TypeDefinition`]s out of [`FieldDefinition`]s and [`TypeRef`]s, and a
//! single [`SdlWriter`] turns a [`Document`] into text. Ordering, indentation
//! and separators therefore live in one place.
//!
//! # Output shape
//!
//! ```graphql
//! type Task {
//!   id: ID!
//!   title: String!
//! }
//!
//! type Query {
//!   tasks(title: _inputStringOperator, _limit: Int): [Task!]!
//! }
//! ```

use std::fmt::{self, Write as _};

/// A reference to a GraphQL type, possibly wrapped in list / non-null.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A bare named type, e.g. `String`.
    Named(String),
    /// Non-null wrapper, rendered with a trailing `!`.
    NonNull(Box<TypeRef>),
    /// List wrapper, rendered with surrounding brackets.
    List(Box<TypeRef>),
}

impl TypeRef {
    pub const ID: &'static str = "ID";
    pub const STRING: &'static str = "String";
    pub const INT: &'static str = "Int";
    pub const FLOAT: &'static str = "Float";
    pub const BOOLEAN: &'static str = "Boolean";

    /// `T`
    pub fn named(type_name: impl Into<String>) -> Self {
        Self::Named(type_name.into())
    }

    /// `T!`
    pub fn named_nn(type_name: impl Into<String>) -> Self {
        Self::named(type_name).non_null()
    }

    /// `[T]`
    pub fn named_list(type_name: impl Into<String>) -> Self {
        Self::List(Box::new(Self::named(type_name)))
    }

    /// `[T]!`
    pub fn named_list_nn(type_name: impl Into<String>) -> Self {
        Self::named_list(type_name).non_null()
    }

    /// `[T!]`
    pub fn named_nn_list(type_name: impl Into<String>) -> Self {
        Self::List(Box::new(Self::named_nn(type_name)))
    }

    /// `[T!]!`
    pub fn named_nn_list_nn(type_name: impl Into<String>) -> Self {
        Self::named_nn_list(type_name).non_null()
    }

    /// Wraps `self` as non-null. Already non-null refs are returned as is.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Wraps `self` in a list.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Returns true for a `!`-suffixed reference.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Name of the innermost named type.
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::NonNull(inner) | Self::List(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::NonNull(inner) => write!(f, "{inner}!"),
            Self::List(inner) => write!(f, "[{inner}]"),
        }
    }
}

/// An argument or input-object field: `name: Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValue {
    pub name: String,
    pub ty: TypeRef,
}

impl InputValue {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

/// A field of an object or input type, with optional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub arguments: Vec<InputValue>,
    pub ty: TypeRef,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            ty,
        }
    }

    /// Adds a single argument.
    #[must_use]
    pub fn argument(mut self, arg: InputValue) -> Self {
        self.arguments.push(arg);
        self
    }

    /// Appends a list of arguments, preserving their order.
    #[must_use]
    pub fn arguments(mut self, args: impl IntoIterator<Item = InputValue>) -> Self {
        self.arguments.extend(args);
        self
    }
}

impl From<InputValue> for FieldDefinition {
    fn from(value: InputValue) -> Self {
        Self::new(value.name, value.ty)
    }
}

impl fmt::Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.arguments.is_empty() {
            f.write_char('(')?;
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_char(')')?;
        }
        write!(f, ": {}", self.ty)
    }
}

/// Which SDL keyword a [`TypeDefinition`] is introduced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    Object,
    InputObject,
}

impl DefinitionKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Object => "type",
            Self::InputObject => "input",
        }
    }
}

/// An object or input type declaration.
///
/// `raw_fields` are caller-supplied field fragments written verbatim after
/// the generated fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    pub kind: DefinitionKind,
    pub name: String,
    pub fields: Vec<FieldDefinition>,
    pub raw_fields: Vec<String>,
}

impl TypeDefinition {
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(DefinitionKind::Object, name)
    }

    pub fn input(name: impl Into<String>) -> Self {
        Self::new(DefinitionKind::InputObject, name)
    }

    fn new(kind: DefinitionKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            fields: Vec::new(),
            raw_fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<FieldDefinition>) -> Self {
        self.fields.push(field.into());
        self
    }

    #[must_use]
    pub fn fields<F: Into<FieldDefinition>>(mut self, fields: impl IntoIterator<Item = F>) -> Self {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn raw_fields(mut self, fragments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.raw_fields.extend(fragments.into_iter().map(Into::into));
        self
    }

    /// Looks up a generated field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.raw_fields.is_empty()
    }
}

/// One top-level declaration of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Type(TypeDefinition),
    /// A caller-supplied declaration, emitted without reinterpretation.
    Raw(String),
}

impl From<TypeDefinition> for Definition {
    fn from(value: TypeDefinition) -> Self {
        Self::Type(value)
    }
}

/// An ordered list of SDL declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, definition: impl Into<Definition>) {
        self.definitions.push(definition.into());
    }

    /// Finds a generated type declaration by name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.definitions.iter().find_map(|def| match def {
            Definition::Type(ty) if ty.name == name => Some(ty),
            _ => None,
        })
    }

    /// Renders the document with the default two-space indent.
    pub fn to_sdl(&self) -> String {
        SdlWriter::default().render(self)
    }
}

/// Renders [`Document`]s to SDL text.
#[derive(Debug, Clone)]
pub struct SdlWriter {
    indent: String,
}

impl Default for SdlWriter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl SdlWriter {
    pub fn new(indent: usize) -> Self {
        Self {
            indent: " ".repeat(indent),
        }
    }

    pub fn render(&self, document: &Document) -> String {
        let mut out = String::new();
        for (i, definition) in document.definitions.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            match definition {
                Definition::Type(ty) => self.write_type(&mut out, ty),
                Definition::Raw(fragment) => {
                    out.push_str(fragment);
                    if !fragment.ends_with('\n') {
                        out.push('\n');
                    }
                }
            }
        }
        out
    }

    /// Renders a single declaration, terminated by a newline.
    pub fn render_type(&self, ty: &TypeDefinition) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty);
        out
    }

    fn write_type(&self, out: &mut String, ty: &TypeDefinition) {
        out.push_str(ty.kind.keyword());
        out.push(' ');
        out.push_str(&ty.name);

        // `type X` without a body is still a valid declaration
        if ty.is_empty() {
            out.push('\n');
            return;
        }

        out.push_str(" {\n");
        for field in &ty.fields {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{}{field}", self.indent);
        }
        for fragment in &ty.raw_fields {
            let _ = writeln!(out, "{}{}", self.indent, fragment.trim_end());
        }
        out.push_str("}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_display() {
        assert_eq!(TypeRef::named("String").to_string(), "String");
        assert_eq!(TypeRef::named_nn("ID").to_string(), "ID!");
        assert_eq!(TypeRef::named_list("String").to_string(), "[String]");
        assert_eq!(TypeRef::named_list_nn("Int").to_string(), "[Int]!");
        assert_eq!(TypeRef::named_nn_list("String").to_string(), "[String!]");
        assert_eq!(TypeRef::named_nn_list_nn("Post").to_string(), "[Post!]!");
        assert_eq!(
            TypeRef::named_nn_list_nn("String").list().to_string(),
            "[[String!]!]"
        );
    }

    #[test]
    fn test_non_null_is_idempotent() {
        let ty = TypeRef::named_nn("ID").non_null();
        assert_eq!(ty.to_string(), "ID!");
        assert!(ty.is_non_null());
        assert_eq!(ty.base_name(), "ID");
    }

    #[test]
    fn test_field_without_arguments_has_no_parens() {
        let field = FieldDefinition::new("author", TypeRef::named_nn("User"));
        assert_eq!(field.to_string(), "author: User!");
    }

    #[test]
    fn test_field_arguments_joined_with_comma() {
        let field = FieldDefinition::new("tasks", TypeRef::named_nn_list_nn("Task"))
            .argument(InputValue::new("title", TypeRef::named("_inputStringOperator")))
            .argument(InputValue::new("_limit", TypeRef::named("Int")));
        assert_eq!(
            field.to_string(),
            "tasks(title: _inputStringOperator, _limit: Int): [Task!]!"
        );
    }

    #[test]
    fn test_render_document() {
        let mut doc = Document::new();
        doc.push(
            TypeDefinition::object("Task")
                .field(FieldDefinition::new("id", TypeRef::named_nn("ID")))
                .field(FieldDefinition::new("done", TypeRef::named("Boolean"))),
        );
        doc.push(TypeDefinition::input("_createInputTask").field(InputValue::new(
            "done",
            TypeRef::named("Boolean"),
        )));

        assert_eq!(
            doc.to_sdl(),
            "type Task {\n  id: ID!\n  done: Boolean\n}\n\ninput _createInputTask {\n  done: Boolean\n}\n"
        );
    }

    #[test]
    fn test_render_empty_type_as_bare_declaration() {
        let writer = SdlWriter::default();
        assert_eq!(
            writer.render_type(&TypeDefinition::input("_createInputTag")),
            "input _createInputTag\n"
        );
    }

    #[test]
    fn test_raw_fragments_follow_generated_fields() {
        let ty = TypeDefinition::object("Query")
            .field(FieldDefinition::new("tasks", TypeRef::named_nn_list_nn("Task")))
            .raw_fields(["ping: String"]);
        assert_eq!(
            SdlWriter::new(4).render_type(&ty),
            "type Query {\n    tasks: [Task!]!\n    ping: String\n}\n"
        );
    }

    #[test]
    fn test_raw_definition_gets_trailing_newline() {
        let mut doc = Document::new();
        doc.push(Definition::Raw("scalar Date".to_string()));
        doc.push(TypeDefinition::object("Query"));
        assert_eq!(doc.to_sdl(), "scalar Date\n\ntype Query\n");
    }
}
