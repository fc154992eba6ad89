//! Schema graph types for protoname.
//!
//! The graph is an arena of [`Entity`] records. Each entity owns its
//! declared children; `parent` and `package` are plain [`EntityId`]
//! back-references used only to walk upward during name composition.
//!
//! # Architecture
//!
//! ```text
//! schema parser → GraphBuilder → SchemaGraph (read-only) → NamingContext
//! ```

mod builder;
mod entity;
mod graph;

pub use builder::{GraphBuilder, GraphError};
pub use entity::{Entity, EntityId, EntityKind};
pub use graph::SchemaGraph;
