//! Naming conventions for generated stubs.

use indexmap::IndexSet;
use protoname_core::{Identifier, Suffix};

/// Methods generated on every message by the Go RPC-stub convention.
///
/// A field or oneof whose converted name equals one of these would shadow
/// the generated method, so it is escaped instead.
pub const GO_RESERVED_FIELDS: &[&str] = &[
    "Reset",
    "String",
    "ProtoMessage",
    "Marshal",
    "Unmarshal",
    "ExtensionRangeArray",
    "ExtensionMap",
    "Descriptor",
];

/// Target-specific naming rules applied after composition.
///
/// Defines the reserved sets consulted by the escape pass and the suffixes
/// attached to service names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    /// Names fields and oneof groups may not take.
    pub reserved_fields: IndexSet<String>,
    /// Names messages and enums may not take.
    pub reserved_types: IndexSet<String>,
    /// Appended to a service name for the server interface (e.g. "Server")
    pub server_suffix: Suffix,
    /// Appended to a service name for the client stub (e.g. "Client")
    pub client_suffix: Suffix,
    /// Appended to a reserved name (e.g. "String" -> "String_")
    pub escape_suffix: Suffix,
}

impl NamingConvention {
    /// The Go RPC-stub convention.
    pub fn go() -> Self {
        Self {
            reserved_fields: GO_RESERVED_FIELDS.iter().map(|s| s.to_string()).collect(),
            reserved_types: IndexSet::new(),
            server_suffix: Suffix::from_static("Server"),
            client_suffix: Suffix::from_static("Client"),
            escape_suffix: Suffix::from_static("_"),
        }
    }

    pub fn is_reserved_field(&self, name: &str) -> bool {
        self.reserved_fields.contains(name)
    }

    pub fn is_reserved_type(&self, name: &str) -> bool {
        self.reserved_types.contains(name)
    }

    /// Escape a field or oneof name if it collides with a generated member.
    pub fn safe_field_name(&self, name: Identifier) -> Identifier {
        if self.is_reserved_field(&name) {
            self.escape(name)
        } else {
            name
        }
    }

    /// Escape a message or enum name if it is reserved.
    pub fn safe_type_name(&self, name: Identifier) -> Identifier {
        if self.is_reserved_type(&name) {
            self.escape(name)
        } else {
            name
        }
    }

    fn escape(&self, name: Identifier) -> Identifier {
        let escaped = name.with_suffix(&self.escape_suffix);
        tracing::debug!(%name, %escaped, "escaped reserved identifier");
        escaped
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::go()
    }
}
