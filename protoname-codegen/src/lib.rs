//! Deterministic identifier naming for protocol schema code generators.
//!
//! Given a read-only [`SchemaGraph`](protoname_ir::SchemaGraph), a
//! [`NamingContext`] produces canonical, collision-safe identifiers for
//! every entity.
//!
//! # Module Organization
//!
//! - [`config`] - TOML configuration for reserved names and suffixes
//! - [`convention`] - Target naming rules (reserved sets, suffixes)
//! - [`context`] - The resolver (`name`, `oneof_option`, `client_name`)
//! - [`table`] - Bulk resolution handed to renderers
//!
//! # Example
//!
//! ```
//! use protoname_codegen::NamingContext;
//! use protoname_ir::GraphBuilder;
//!
//! let mut b = GraphBuilder::new();
//! let pkg = b.package("names.entities").unwrap();
//! let file = b.file("entities.proto", pkg).unwrap();
//! let svc = b.service(file, "reset").unwrap();
//! let graph = b.build();
//!
//! let ctx = NamingContext::new(&graph);
//! assert_eq!(ctx.name(svc), "ResetServer");
//! assert_eq!(ctx.client_name(svc), "ResetClient");
//! ```

pub mod config;
pub mod context;
pub mod convention;
mod error;
pub mod table;

pub use config::NamingConfig;
pub use context::NamingContext;
pub use convention::{GO_RESERVED_FIELDS, NamingConvention};
pub use error::{ConfigError, ConfigResult, NamingError, Result};
pub use table::NameTable;
