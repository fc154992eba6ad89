use indexmap::IndexMap;

use crate::{Entity, EntityId};

/// A read-only schema graph.
///
/// Built once with [`GraphBuilder`](crate::GraphBuilder) and never mutated
/// afterwards, so it can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct SchemaGraph {
    /// Issued by the builder; zero (the default graph) matches no handle.
    pub(crate) id: u32,
    pub(crate) entities: Vec<Entity>,
    /// Fully-qualified names (and file paths) to entities.
    pub(crate) index: IndexMap<String, EntityId>,
}

impl SchemaGraph {
    /// Get an entity, or `None` if `id` does not belong to this graph.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        if id.graph != self.id {
            return None;
        }
        self.entities.get(id.index())
    }

    /// Get an entity of this graph.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued for another graph. Use [`get`](Self::get)
    /// for a fallible lookup.
    pub fn entity(&self, id: EntityId) -> &Entity {
        match self.get(id) {
            Some(entity) => entity,
            None => panic!("entity {id} does not belong to this graph"),
        }
    }

    /// Look up an entity by fully-qualified name (`.pkg.Message.field`) or,
    /// for files, by path (`entities.proto`).
    pub fn lookup(&self, full_name: &str) -> Option<EntityId> {
        self.index.get(full_name).copied()
    }

    /// Walk parent links from `id` up to its root, excluding `id` itself.
    pub fn ancestors(&self, id: EntityId) -> impl Iterator<Item = EntityId> + '_ {
        std::iter::successors(self.get(id).and_then(Entity::parent), |&p| {
            self.get(p).and_then(Entity::parent)
        })
    }

    /// Iterate over all entities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        // every entity is indexed once, in insertion order
        self.index
            .values()
            .map(|&id| (id, &self.entities[id.index()]))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
