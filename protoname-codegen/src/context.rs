//! Canonical identifiers for schema entities.
//!
//! Names are composed bottom-up: a nested message or enum is prefixed with
//! the name of every enclosing message, joined with `_`. Fields, oneofs and
//! methods are never prefixed. Services carry the server suffix.

use protoname_core::{Identifier, Suffix, to_upper_camel};
use protoname_ir::{Entity, EntityId, EntityKind, SchemaGraph};

use crate::{NamingConvention, NamingError, Result};

/// Resolves identifiers for entities of one schema graph.
///
/// The context is immutable and holds no per-call state: resolving the same
/// entity twice yields the same identifier, and one context can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct NamingContext<'g> {
    graph: &'g SchemaGraph,
    convention: NamingConvention,
}

impl<'g> NamingContext<'g> {
    /// Create a context using the Go convention.
    pub fn new(graph: &'g SchemaGraph) -> Self {
        Self::with_convention(graph, NamingConvention::go())
    }

    pub fn with_convention(graph: &'g SchemaGraph, convention: NamingConvention) -> Self {
        Self { graph, convention }
    }

    pub fn graph(&self) -> &'g SchemaGraph {
        self.graph
    }

    pub fn convention(&self) -> &NamingConvention {
        &self.convention
    }

    /// The canonical identifier of an entity.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to the graph. Use [`try_name`] to
    /// receive the error instead.
    ///
    /// [`try_name`]: Self::try_name
    pub fn name(&self, id: EntityId) -> Identifier {
        usage(self.try_name(id))
    }

    pub fn try_name(&self, id: EntityId) -> Result<Identifier> {
        let entity = self.entity(id)?;
        let name = match entity.kind() {
            // A file is named after its package.
            EntityKind::File => self.try_name(package_of(id, entity)?)?,
            EntityKind::Package => namespace(entity.name())?,
            EntityKind::Message | EntityKind::Enum => self.type_name(entity)?,
            // Enum values keep their declared casing.
            EntityKind::EnumValue => {
                let value = declared(entity.name())?;
                self.try_name(parent_of(id, entity)?)?.join(&value)
            }
            EntityKind::Field { .. } | EntityKind::OneofGroup => {
                self.convention.safe_field_name(to_upper_camel(entity.name()))
            }
            EntityKind::Service => {
                to_upper_camel(entity.name()).with_suffix(&self.convention.server_suffix)
            }
            EntityKind::Method => to_upper_camel(entity.name()),
        };
        tracing::trace!(entity = entity.full_name(), %name, "resolved name");
        Ok(name)
    }

    /// The wrapper type name for one alternative of a oneof:
    /// the owning message's name joined with the field's name.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a oneof member of this graph.
    pub fn oneof_option(&self, field: EntityId) -> Identifier {
        usage(self.try_oneof_option(field))
    }

    pub fn try_oneof_option(&self, field: EntityId) -> Result<Identifier> {
        let entity = self.expect_kind(field, "oneof_option", "field", |k| {
            matches!(k, EntityKind::Field { .. })
        })?;
        if entity.oneof().is_none() {
            return Err(NamingError::NotOneofMember(entity.full_name().to_string()));
        }
        let message = self.try_name(parent_of(field, entity)?)?;
        let option = self.convention.safe_field_name(to_upper_camel(entity.name()));
        Ok(message.join(&option))
    }

    /// The client stub name of a service.
    ///
    /// # Panics
    ///
    /// Panics if `service` is not a service of this graph.
    pub fn client_name(&self, service: EntityId) -> Identifier {
        usage(self.try_client_name(service))
    }

    pub fn try_client_name(&self, service: EntityId) -> Result<Identifier> {
        self.service_name(service, "client_name", &self.convention.client_suffix)
    }

    /// The server interface name of a service. Same as [`name`](Self::name).
    ///
    /// # Panics
    ///
    /// Panics if `service` is not a service of this graph.
    pub fn server_name(&self, service: EntityId) -> Identifier {
        usage(self.try_server_name(service))
    }

    pub fn try_server_name(&self, service: EntityId) -> Result<Identifier> {
        self.service_name(service, "server_name", &self.convention.server_suffix)
    }

    fn service_name(
        &self,
        id: EntityId,
        operation: &'static str,
        suffix: &Suffix,
    ) -> Result<Identifier> {
        let entity = self.expect_kind(id, operation, "service", |k| {
            matches!(k, EntityKind::Service)
        })?;
        Ok(to_upper_camel(entity.name()).with_suffix(suffix))
    }

    /// Messages and enums, prefixed by every enclosing message.
    fn type_name(&self, entity: &Entity) -> Result<Identifier> {
        let own = self.convention.safe_type_name(to_upper_camel(entity.name()));
        match entity.parent() {
            Some(parent) if self.entity(parent)?.kind() == EntityKind::Message => {
                Ok(self.try_name(parent)?.join(&own))
            }
            _ => Ok(own),
        }
    }

    fn entity(&self, id: EntityId) -> Result<&'g Entity> {
        self.graph.get(id).ok_or(NamingError::UnknownEntity(id))
    }

    fn expect_kind(
        &self,
        id: EntityId,
        operation: &'static str,
        expected: &'static str,
        allowed: impl Fn(&EntityKind) -> bool,
    ) -> Result<&'g Entity> {
        let entity = self.entity(id)?;
        if !allowed(&entity.kind()) {
            return Err(NamingError::WrongKind {
                operation,
                expected,
                found: entity.kind().as_str(),
            });
        }
        Ok(entity)
    }
}

/// The namespace identifier of a package: its last path segment, verbatim.
fn namespace(package: &str) -> Result<Identifier> {
    let last = package.rsplit('.').next().unwrap_or(package);
    declared(last)
}

/// A declared name used without case conversion.
fn declared(name: &str) -> Result<Identifier> {
    Identifier::parse(name).map_err(|source| NamingError::InvalidIdentifier {
        name: name.to_string(),
        source,
    })
}

fn parent_of(id: EntityId, entity: &Entity) -> Result<EntityId> {
    entity.parent().ok_or(NamingError::UnknownEntity(id))
}

fn package_of(id: EntityId, entity: &Entity) -> Result<EntityId> {
    entity.package().ok_or(NamingError::UnknownEntity(id))
}

fn usage<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("naming usage error: {err}"),
    }
}
