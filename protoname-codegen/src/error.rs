use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use protoname_core::IdentifierError;
use protoname_ir::EntityId;
use thiserror::Error;

/// Result type for name resolution.
pub type Result<T> = std::result::Result<T, NamingError>;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type ConfigResult<T> = std::result::Result<T, Box<ConfigError>>;

/// A name was requested for an entity the caller should never have passed.
///
/// These are contract violations by the calling stage, not recoverable
/// conditions. The panicking resolver methods report them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("entity {0} does not belong to the schema graph")]
    UnknownEntity(EntityId),

    #[error("{operation} expects a {expected}, found {found}")]
    WrongKind {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field '{0}' is not a member of a oneof")]
    NotOneofMember(String),

    /// A declared name that is kept verbatim is not a target identifier.
    #[error("'{name}' cannot be used verbatim as an identifier")]
    InvalidIdentifier {
        name: String,
        #[source]
        source: IdentifierError,
    },
}

/// Source context for configuration error reporting.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    pub(crate) fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    /// Create a NamedSource for miette error reporting.
    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Find the span of a quoted string value in the source.
    fn find_span(&self, value: &str) -> Option<SourceSpan> {
        let quoted = format!("\"{value}\"");
        self.src
            .find(&quoted)
            .map(|pos| SourceSpan::from((pos + 1, value.len())))
    }

    pub(crate) fn parse_error(&self, source: toml::de::Error) -> Box<ConfigError> {
        let span = source.span().map(SourceSpan::from);
        Box::new(ConfigError::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub(crate) fn invalid_suffix_error(&self, which: &'static str, value: &str) -> Box<ConfigError> {
        Box::new(ConfigError::InvalidSuffix {
            src: self.named_source(),
            span: self.find_span(value),
            which,
            value: value.to_string(),
        })
    }

    pub(crate) fn invalid_reserved_error(
        &self,
        name: &str,
        source: IdentifierError,
    ) -> Box<ConfigError> {
        Box::new(ConfigError::InvalidReserved {
            src: self.named_source(),
            span: self.find_span(name),
            name: name.to_string(),
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse naming config")]
    #[diagnostic(code(protoname::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {which} suffix '{value}'")]
    #[diagnostic(
        code(protoname::invalid_suffix),
        help("the escape suffix must not be empty")
    )]
    InvalidSuffix {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid suffix")]
        span: Option<SourceSpan>,
        which: &'static str,
        value: String,
    },

    #[error("reserved name '{name}' is not a valid identifier")]
    #[diagnostic(code(protoname::invalid_reserved))]
    InvalidReserved {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a valid identifier")]
        span: Option<SourceSpan>,
        name: String,
        #[source]
        source: IdentifierError,
    },
}
