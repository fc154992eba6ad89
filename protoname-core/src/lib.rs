//! Core types for protoname.
//!
//! This crate provides the [`Identifier`] value handed to renderers and the
//! upper-camel case converter applied to every declared schema name.

mod case;
mod ident;

// Case conversion
pub use case::{NameSegment, SegmentKind, segments, to_upper_camel};
// Identifiers
pub use ident::{Identifier, IdentifierError, Suffix, is_valid_identifier};
