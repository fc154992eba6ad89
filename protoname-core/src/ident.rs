use std::{borrow::Cow, fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a string was rejected as an [`Identifier`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("identifier must not be empty")]
    Empty,

    #[error("identifier cannot start with '{ch}'")]
    InvalidStart { ch: char },

    #[error("invalid character '{ch}' at position {index}")]
    InvalidChar { ch: char, index: usize },
}

/// Returns true if `s` is a legal target identifier: an ASCII letter or
/// underscore followed by ASCII letters, digits and underscores.
pub fn is_valid_identifier(s: &str) -> bool {
    check(s, false).is_ok()
}

fn check(s: &str, dotted: bool) -> Result<(), IdentifierError> {
    let mut chars = s.chars();
    match chars.next() {
        None => return Err(IdentifierError::Empty),
        Some(ch) if !(ch.is_ascii_alphabetic() || ch == '_') => {
            return Err(IdentifierError::InvalidStart { ch });
        }
        Some(_) => {}
    }
    match chars
        .enumerate()
        .find(|&(_, ch)| !(ch.is_ascii_alphanumeric() || ch == '_' || (dotted && ch == '.')))
    {
        Some((i, ch)) => Err(IdentifierError::InvalidChar { ch, index: i + 1 }),
        None => Ok(()),
    }
}

/// A resolved name, ready to be emitted by a renderer.
///
/// Every `Identifier` starts with an ASCII letter or underscore and is
/// otherwise made of ASCII letters, digits, underscores and `.`. The dot only
/// appears when a declared name contained one (`my.field` -> `My.field`);
/// [`is_valid_identifier`] tells whether an identifier is also a plain target
/// identifier.
///
/// Identifiers are immutable. Renderers must not re-case or re-escape them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Parse a plain target identifier.
    pub fn parse(s: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = s.into();
        check(&s, false)?;
        Ok(Self(s))
    }

    /// Parse an identifier that may contain `.` after its first character,
    /// as the case converter produces for dotted declared names.
    pub fn parse_dotted(s: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = s.into();
        check(&s, true)?;
        Ok(Self(s))
    }

    /// Output of the case converter, which only emits the dotted grammar.
    pub(crate) fn from_converted(s: String) -> Self {
        debug_assert_eq!(check(&s, true), Ok(()), "converter produced {s:?}");
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Join another identifier with `_` (e.g. "Outer" + "Inner" -> "Outer_Inner").
    pub fn join(&self, segment: &Identifier) -> Self {
        Self(format!("{}_{}", self.0, segment.0))
    }

    /// Append a suffix directly (e.g. "Greeter" + "Server" -> "GreeterServer").
    pub fn with_suffix(&self, suffix: &Suffix) -> Self {
        Self(format!("{}{}", self.0, suffix.as_str()))
    }
}

/// Accepts everything an `Identifier` can hold, so serialized identifiers
/// always read back.
impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_dotted(s)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Identifier> for String {
    fn from(ident: Identifier) -> Self {
        ident.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Identifier> for &str {
    fn eq(&self, other: &Identifier) -> bool {
        *self == other.0
    }
}

/// Text appended to an identifier: ASCII letters, digits and underscores,
/// possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Suffix(Cow<'static, str>);

impl Suffix {
    /// Parse and validate a suffix.
    pub fn parse(s: impl Into<String>) -> Result<Self, IdentifierError> {
        let s = s.into();
        if let Some((index, ch)) = s.chars().enumerate().find(|&(_, ch)| !is_suffix_char(ch)) {
            return Err(IdentifierError::InvalidChar { ch, index });
        }
        Ok(Self(Cow::Owned(s)))
    }

    /// A suffix from a literal.
    ///
    /// # Panics
    ///
    /// Panics if `s` contains anything but ASCII letters, digits and
    /// underscores. In a `const` item this is a compile error.
    pub const fn from_static(s: &'static str) -> Self {
        let bytes = s.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            assert!(
                bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_',
                "invalid character in suffix"
            );
            i += 1;
        }
        Self(Cow::Borrowed(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_suffix_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

impl TryFrom<String> for Suffix {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl FromStr for Suffix {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Suffix> for String {
    fn from(suffix: Suffix) -> Self {
        suffix.0.into_owned()
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Suffix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Suffix {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Identifier::parse("FooBar").unwrap(), "FooBar");
        assert_eq!(Identifier::parse("_x1").unwrap(), "_x1");
        assert!(is_valid_identifier("Oneofs_Reset_"));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Identifier::parse(""), Err(IdentifierError::Empty));
        assert_eq!(
            Identifier::parse("2fast"),
            Err(IdentifierError::InvalidStart { ch: '2' })
        );
        assert_eq!(
            Identifier::parse("my.field"),
            Err(IdentifierError::InvalidChar { ch: '.', index: 2 })
        );
        assert!(!is_valid_identifier("héllo"));
    }

    #[test]
    fn test_dotted() {
        assert_eq!(Identifier::parse_dotted("My.field").unwrap(), "My.field");
        assert_eq!(
            Identifier::parse_dotted(".field"),
            Err(IdentifierError::InvalidStart { ch: '.' })
        );
        assert_eq!(
            Identifier::parse_dotted("not an ident!"),
            Err(IdentifierError::InvalidChar { ch: ' ', index: 3 })
        );
        assert!(!is_valid_identifier("My.field"));
    }

    #[test]
    fn test_join_and_suffix() {
        let outer = Identifier::parse("Nested").unwrap();
        let inner = Identifier::parse("Message").unwrap();
        assert_eq!(outer.join(&inner), "Nested_Message");
        assert_eq!(outer.with_suffix(&Suffix::from_static("Server")), "NestedServer");
        assert_eq!(outer.with_suffix(&Suffix::default()), "Nested");
        assert_eq!(outer, "Nested");
    }

    #[test]
    fn test_suffix() {
        assert_eq!(Suffix::parse("_Type").unwrap(), "_Type");
        assert!(Suffix::parse("").unwrap().is_empty());
        assert_eq!(
            Suffix::parse("-stub"),
            Err(IdentifierError::InvalidChar { ch: '-', index: 0 })
        );
        assert_eq!(Suffix::from_static("Client").to_string(), "Client");
    }

    #[test]
    #[should_panic(expected = "invalid character in suffix")]
    fn test_suffix_from_static_rejects_invalid() {
        Suffix::from_static("Server!");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let ident = Identifier::parse("Oneofs_Reset_").unwrap();
        let json = serde_json::to_string(&ident).unwrap();
        assert_eq!(json, "\"Oneofs_Reset_\"");

        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ident);
        assert!(serde_json::from_str::<Identifier>("\"not valid\"").is_err());
        assert!(serde_json::from_str::<Identifier>("\"2fast\"").is_err());
    }

    #[test]
    fn test_serde_keeps_converted_names() {
        for input in ["my.field", "a.b.c", ".leading", "2fast", "my-field"] {
            let ident = crate::to_upper_camel(input);
            let json = serde_json::to_string(&ident).unwrap();
            let back: Identifier = serde_json::from_str(&json)
                .unwrap_or_else(|e| panic!("{ident} did not read back: {e}"));
            assert_eq!(back, ident);
        }
    }

    #[test]
    fn test_suffix_serde() {
        let suffix: Suffix = serde_json::from_str("\"Stub\"").unwrap();
        assert_eq!(suffix, "Stub");
        assert!(serde_json::from_str::<Suffix>("\"a b\"").is_err());
    }
}
