//! Entity records stored in a [`SchemaGraph`](crate::SchemaGraph).

use std::fmt;

/// Handle to an entity inside a [`SchemaGraph`](crate::SchemaGraph).
///
/// A handle remembers the graph it was issued by, so a graph never resolves
/// a handle taken from another graph even when the positions coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    pub(crate) graph: u32,
    pub(crate) index: u32,
}

impl EntityId {
    pub(crate) fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.graph, self.index)
    }
}

/// The kind of a schema entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    File,
    Package,
    Message,
    /// A message field. `oneof` is set when the field belongs to a oneof group.
    Field { oneof: Option<EntityId> },
    OneofGroup,
    Enum,
    EnumValue,
    Service,
    Method,
}

impl EntityKind {
    /// Get the lowercase label used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::File => "file",
            EntityKind::Package => "package",
            EntityKind::Message => "message",
            EntityKind::Field { .. } => "field",
            EntityKind::OneofGroup => "oneof",
            EntityKind::Enum => "enum",
            EntityKind::EnumValue => "enum value",
            EntityKind::Service => "service",
            EntityKind::Method => "method",
        }
    }

    /// Returns true for kinds that can contain nested messages and enums.
    pub fn is_type_scope(&self) -> bool {
        matches!(self, EntityKind::File | EntityKind::Message)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared schema entity.
#[derive(Debug, Clone)]
pub struct Entity {
    pub(crate) kind: EntityKind,
    pub(crate) name: String,
    pub(crate) full_name: String,
    pub(crate) parent: Option<EntityId>,
    pub(crate) package: Option<EntityId>,
    pub(crate) children: Vec<EntityId>,
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The declared name, exactly as written in the schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified name, e.g. `.names.entities.Nested.Message`.
    ///
    /// Files are keyed by their path instead.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The immediately enclosing entity. `None` for files and packages.
    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    /// The package this entity is declared in. `None` for packages.
    pub fn package(&self) -> Option<EntityId> {
        self.package
    }

    /// Declared children in declaration order.
    pub fn children(&self) -> &[EntityId] {
        &self.children
    }

    /// The oneof group of a field, if any.
    pub fn oneof(&self) -> Option<EntityId> {
        match self.kind {
            EntityKind::Field { oneof } => oneof,
            _ => None,
        }
    }
}
