//! Validating construction of a [`SchemaGraph`].

use std::sync::atomic::{AtomicU32, Ordering};

use indexmap::IndexMap;
use thiserror::Error;

use crate::{Entity, EntityId, EntityKind, SchemaGraph};

/// Result type for graph construction.
pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("entity {0} does not belong to this graph")]
    UnknownEntity(EntityId),

    #[error("a {child} cannot be declared inside a {parent}")]
    InvalidParent {
        child: &'static str,
        parent: &'static str,
    },

    #[error("'{0}' is already declared")]
    Duplicate(String),

    #[error("{0} name must not be empty")]
    EmptyName(&'static str),

    #[error("a schema graph cannot hold more than {} entities", u32::MAX)]
    TooManyEntities,
}

/// Source of graph ids. Zero is left to [`SchemaGraph::default`].
static NEXT_GRAPH_ID: AtomicU32 = AtomicU32::new(1);

/// Builds a [`SchemaGraph`] top-down.
///
/// Every method checks that the parent is of a kind that may contain the new
/// entity and that its fully-qualified name is not already taken.
///
/// # Example
///
/// ```
/// use protoname_ir::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// let pkg = b.package("acme.billing")?;
/// let file = b.file("billing.proto", pkg)?;
/// let invoice = b.message(file, "Invoice")?;
/// b.field(invoice, "total_cents")?;
/// let graph = b.build();
///
/// assert!(graph.lookup(".acme.billing.Invoice.total_cents").is_some());
/// # Ok::<(), protoname_ir::GraphError>(())
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
    id: u32,
    entities: Vec<Entity>,
    index: IndexMap<String, EntityId>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            entities: Vec::new(),
            index: IndexMap::new(),
        }
    }

    /// Declare a package. `name` is the dotted package path.
    pub fn package(&mut self, name: &str) -> Result<EntityId> {
        let full_name = format!(".{name}");
        self.insert(EntityKind::Package, name, full_name, None, None)
    }

    /// Declare a file belonging to `package`. Files are indexed by path.
    pub fn file(&mut self, path: &str, package: EntityId) -> Result<EntityId> {
        self.expect_parent(package, "file", |k| matches!(k, EntityKind::Package))?;
        self.insert(EntityKind::File, path, path.to_string(), None, Some(package))
    }

    /// Declare a message inside a file or another message.
    pub fn message(&mut self, parent: EntityId, name: &str) -> Result<EntityId> {
        self.child(parent, EntityKind::Message, name, EntityKind::is_type_scope)
    }

    /// Declare an enum inside a file or a message.
    pub fn enumeration(&mut self, parent: EntityId, name: &str) -> Result<EntityId> {
        self.child(parent, EntityKind::Enum, name, EntityKind::is_type_scope)
    }

    pub fn enum_value(&mut self, parent: EntityId, name: &str) -> Result<EntityId> {
        self.child(parent, EntityKind::EnumValue, name, |k| {
            matches!(k, EntityKind::Enum)
        })
    }

    /// Declare a plain (non-oneof) field.
    pub fn field(&mut self, message: EntityId, name: &str) -> Result<EntityId> {
        self.child(message, EntityKind::Field { oneof: None }, name, |k| {
            matches!(k, EntityKind::Message)
        })
    }

    pub fn oneof(&mut self, message: EntityId, name: &str) -> Result<EntityId> {
        self.child(message, EntityKind::OneofGroup, name, |k| {
            matches!(k, EntityKind::Message)
        })
    }

    /// Declare a field that belongs to `oneof`.
    ///
    /// The field's parent is the message that owns the oneof group, so its
    /// fully-qualified name is `.pkg.Message.field`.
    pub fn oneof_field(&mut self, oneof: EntityId, name: &str) -> Result<EntityId> {
        let group = self.expect_parent(oneof, "field", |k| matches!(k, EntityKind::OneofGroup))?;
        let message = group.parent.ok_or(GraphError::UnknownEntity(oneof))?;
        let id = self.child(
            message,
            EntityKind::Field { oneof: Some(oneof) },
            name,
            |k| matches!(k, EntityKind::Message),
        )?;
        self.entities[oneof.index()].children.push(id);
        Ok(id)
    }

    /// Declare a service inside a file.
    pub fn service(&mut self, file: EntityId, name: &str) -> Result<EntityId> {
        self.child(file, EntityKind::Service, name, |k| matches!(k, EntityKind::File))
    }

    pub fn method(&mut self, service: EntityId, name: &str) -> Result<EntityId> {
        self.child(service, EntityKind::Method, name, |k| {
            matches!(k, EntityKind::Service)
        })
    }

    pub fn build(self) -> SchemaGraph {
        SchemaGraph {
            id: self.id,
            entities: self.entities,
            index: self.index,
        }
    }

    fn expect_parent(
        &self,
        parent: EntityId,
        child: &'static str,
        allowed: impl Fn(&EntityKind) -> bool,
    ) -> Result<&Entity> {
        let entity = self
            .entities
            .get(parent.index())
            .filter(|_| parent.graph == self.id)
            .ok_or(GraphError::UnknownEntity(parent))?;
        if !allowed(&entity.kind) {
            return Err(GraphError::InvalidParent {
                child,
                parent: entity.kind.as_str(),
            });
        }
        Ok(entity)
    }

    fn child(
        &mut self,
        parent: EntityId,
        kind: EntityKind,
        name: &str,
        allowed: impl Fn(&EntityKind) -> bool,
    ) -> Result<EntityId> {
        let scope = self.expect_parent(parent, kind.as_str(), allowed)?;
        // Top-level declarations are scoped by the file's package.
        let (prefix, package) = match scope.kind {
            EntityKind::File => {
                let package = scope.package.ok_or(GraphError::UnknownEntity(parent))?;
                (self.entities[package.index()].full_name.clone(), package)
            }
            _ => (
                scope.full_name.clone(),
                scope.package.ok_or(GraphError::UnknownEntity(parent))?,
            ),
        };
        let full_name = format!("{prefix}.{name}");
        let id = self.insert(kind, name, full_name, Some(parent), Some(package))?;
        // Oneof members are listed under their group; the message keeps them too.
        self.entities[parent.index()].children.push(id);
        Ok(id)
    }

    fn insert(
        &mut self,
        kind: EntityKind,
        name: &str,
        full_name: String,
        parent: Option<EntityId>,
        package: Option<EntityId>,
    ) -> Result<EntityId> {
        if name.is_empty() {
            return Err(GraphError::EmptyName(kind.as_str()));
        }
        if self.index.contains_key(&full_name) {
            return Err(GraphError::Duplicate(full_name));
        }

        let id = self.next_id()?;
        self.index.insert(full_name.clone(), id);
        self.entities.push(Entity {
            kind,
            name: name.to_string(),
            full_name,
            parent,
            package,
            children: Vec::new(),
        });
        Ok(id)
    }

    fn next_id(&self) -> Result<EntityId> {
        let index = u32::try_from(self.entities.len()).map_err(|_| GraphError::TooManyEntities)?;
        Ok(EntityId {
            graph: self.id,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_names() {
        let mut b = GraphBuilder::new();
        let pkg = b.package("names.entities").unwrap();
        let file = b.file("entities.proto", pkg).unwrap();
        let en = b.enumeration(file, "Color").unwrap();
        let red = b.enum_value(en, "RED").unwrap();
        let svc = b.service(file, "Greeter").unwrap();
        let hello = b.method(svc, "SayHello").unwrap();
        let graph = b.build();

        assert_eq!(graph.get(pkg).unwrap().full_name(), ".names.entities");
        assert_eq!(graph.get(red).unwrap().full_name(), ".names.entities.Color.RED");
        assert_eq!(
            graph.get(hello).unwrap().full_name(),
            ".names.entities.Greeter.SayHello"
        );
        assert_eq!(graph.get(file).unwrap().parent(), None);
        assert_eq!(graph.get(hello).unwrap().parent(), Some(svc));
    }

    #[test]
    fn test_oneof_field() {
        let mut b = GraphBuilder::new();
        let pkg = b.package("demo").unwrap();
        let file = b.file("demo.proto", pkg).unwrap();
        let msg = b.message(file, "Oneofs").unwrap();
        let group = b.oneof(msg, "choice").unwrap();
        let field = b.oneof_field(group, "reset").unwrap();
        let graph = b.build();

        let entity = graph.get(field).unwrap();
        assert_eq!(entity.kind(), EntityKind::Field { oneof: Some(group) });
        assert_eq!(entity.oneof(), Some(group));
        assert_eq!(entity.parent(), Some(msg));
        assert_eq!(entity.full_name(), ".demo.Oneofs.reset");
        assert_eq!(graph.get(group).unwrap().children(), &[field]);
        assert_eq!(graph.get(msg).unwrap().children(), &[group, field]);
    }

    #[test]
    fn test_invalid_parent() {
        let mut b = GraphBuilder::new();
        let pkg = b.package("demo").unwrap();
        let file = b.file("demo.proto", pkg).unwrap();
        let svc = b.service(file, "Greeter").unwrap();

        assert_eq!(
            b.message(svc, "Request"),
            Err(GraphError::InvalidParent {
                child: "message",
                parent: "service"
            })
        );
        assert_eq!(
            b.field(file, "orphan"),
            Err(GraphError::InvalidParent {
                child: "field",
                parent: "file"
            })
        );
        assert!(matches!(
            b.file("other.proto", file),
            Err(GraphError::InvalidParent { .. })
        ));
    }

    #[test]
    fn test_duplicate_and_empty() {
        let mut b = GraphBuilder::new();
        let pkg = b.package("demo").unwrap();
        let file = b.file("demo.proto", pkg).unwrap();
        b.message(file, "Thing").unwrap();

        assert_eq!(
            b.enumeration(file, "Thing"),
            Err(GraphError::Duplicate(".demo.Thing".to_string()))
        );
        assert_eq!(b.message(file, ""), Err(GraphError::EmptyName("message")));
        let missing = EntityId {
            graph: b.id,
            index: 99,
        };
        assert_eq!(
            b.method(missing, "Call"),
            Err(GraphError::UnknownEntity(missing))
        );
    }

    #[test]
    fn test_foreign_parent() {
        let mut other = GraphBuilder::new();
        let foreign_pkg = other.package("other").unwrap();
        let foreign_file = other.file("other.proto", foreign_pkg).unwrap();

        let mut b = GraphBuilder::new();
        let pkg = b.package("demo").unwrap();
        b.file("demo.proto", pkg).unwrap();

        // `foreign_file` has the same position as this builder's file
        assert_eq!(
            b.message(foreign_file, "Thing"),
            Err(GraphError::UnknownEntity(foreign_file))
        );
        assert!(matches!(
            b.file("again.proto", foreign_pkg),
            Err(GraphError::UnknownEntity(_))
        ));
    }

    #[test]
    fn test_builders_issue_distinct_graph_ids() {
        let a = GraphBuilder::new();
        let b = GraphBuilder::default();
        assert_ne!(a.id, b.id);
        assert_ne!(a.id, SchemaGraph::default().id);
        assert_eq!(a.next_id(), Ok(EntityId { graph: a.id, index: 0 }));
    }

    #[test]
    fn test_too_many_entities_message() {
        assert_eq!(
            GraphError::TooManyEntities.to_string(),
            "a schema graph cannot hold more than 4294967295 entities"
        );
    }
}
