//! Schema-level field metadata.

use std::{borrow::Cow, fmt};

use crate::directive::DisplayDirective;

// =============================================================================
// ValueKind - protobuf-style kind of a field value
// =============================================================================

/// Kind of a field's value, named after the protobuf scalar and composite kinds.
///
/// For list and map fields this is the kind of the contained values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Float,
    Double,
    String,
    Bytes,
    Enum,
    Message,
    Group,
}

impl ValueKind {
    /// Returns the lowercase protobuf name of the kind (e.g. `"string"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Sint32 => "sint32",
            Self::Sint64 => "sint64",
            Self::Fixed32 => "fixed32",
            Self::Fixed64 => "fixed64",
            Self::Sfixed32 => "sfixed32",
            Self::Sfixed64 => "sfixed64",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Enum => "enum",
            Self::Message => "message",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FieldShape / FieldClass
// =============================================================================

/// Cardinality of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldShape {
    #[default]
    Singular,
    List,
    Map,
}

/// Coarse classification of a field, combining its shape and kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldClass {
    Scalar,
    Bytes,
    Message,
    List,
    Map,
    /// Group-like fields; they never produce tags when shown.
    Ignorable,
}

// =============================================================================
// FieldDescriptor
// =============================================================================

/// Read-only description of one field of a message schema.
///
/// Descriptors come from the schema (derive-generated code or a protobuf
/// descriptor pool), never from a single instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: Cow<'static, str>,
    kind: ValueKind,
    shape: FieldShape,
    directive: DisplayDirective,
}

impl FieldDescriptor {
    /// Describes a singular field shown by default.
    #[must_use]
    pub fn new<N>(name: N, kind: ValueKind) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            kind,
            shape: FieldShape::Singular,
            directive: DisplayDirective::Show,
        }
    }

    /// Describes a list field whose elements are of `kind`.
    #[must_use]
    pub fn list<N>(name: N, kind: ValueKind) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self::new(name, kind).with_shape(FieldShape::List)
    }

    /// Describes a map field whose values are of `kind`.
    #[must_use]
    pub fn map<N>(name: N, kind: ValueKind) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self::new(name, kind).with_shape(FieldShape::Map)
    }

    /// Sets the shape.
    #[must_use]
    pub fn with_shape(mut self, shape: FieldShape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the display directive.
    #[must_use]
    pub fn with_directive(mut self, directive: DisplayDirective) -> Self {
        self.directive = directive;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn shape(&self) -> FieldShape {
        self.shape
    }

    pub fn directive(&self) -> &DisplayDirective {
        &self.directive
    }

    /// Classifies the field by shape first, then by value kind.
    pub fn class(&self) -> FieldClass {
        match (self.shape, self.kind) {
            (FieldShape::List, _) => FieldClass::List,
            (FieldShape::Map, _) => FieldClass::Map,
            (FieldShape::Singular, ValueKind::Group) => FieldClass::Ignorable,
            (FieldShape::Singular, ValueKind::Message) => FieldClass::Message,
            (FieldShape::Singular, ValueKind::Bytes) => FieldClass::Bytes,
            (FieldShape::Singular, _) => FieldClass::Scalar,
        }
    }
}
