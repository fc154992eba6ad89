//! Bulk resolution of every entity in a graph.

use indexmap::IndexMap;
use protoname_core::Identifier;
use protoname_ir::EntityKind;
use serde::Serialize;

use crate::{NamingContext, Result};

/// Resolved identifiers keyed by fully-qualified name, in declaration order.
///
/// This is what renderers consume: every name is computed once up front and
/// the table serializes to JSON for out-of-process templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameTable {
    names: IndexMap<String, Identifier>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    oneof_options: IndexMap<String, Identifier>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    clients: IndexMap<String, Identifier>,
}

impl NameTable {
    /// Resolve every entity of the context's graph.
    pub fn resolve(ctx: &NamingContext<'_>) -> Result<Self> {
        let mut table = Self::default();
        for (id, entity) in ctx.graph().iter() {
            let key = entity.full_name().to_string();
            match entity.kind() {
                EntityKind::Field { oneof: Some(_) } => {
                    table.oneof_options.insert(key.clone(), ctx.try_oneof_option(id)?);
                }
                EntityKind::Service => {
                    table.clients.insert(key.clone(), ctx.try_client_name(id)?);
                }
                _ => {}
            }
            table.names.insert(key, ctx.try_name(id)?);
        }
        Ok(table)
    }

    /// The canonical name of an entity (or file path).
    pub fn get(&self, full_name: &str) -> Option<&Identifier> {
        self.names.get(full_name)
    }

    pub fn oneof_option(&self, full_name: &str) -> Option<&Identifier> {
        self.oneof_options.get(full_name)
    }

    pub fn client_name(&self, full_name: &str) -> Option<&Identifier> {
        self.clients.get(full_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Identifier)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
