//! Naming configuration loaded from TOML.
//!
//! ```toml
//! [reserved]
//! extend = true
//! fields = ["Validate"]
//!
//! [suffixes]
//! server = "Server"
//! client = "Client"
//! escape = "_"
//! ```

use std::{path::Path, str::FromStr};

use protoname_core::{Identifier, Suffix};
use serde::Deserialize;

use crate::{
    NamingConvention,
    error::{ConfigError, ConfigResult, SourceContext},
};

/// Reserved identifier sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReservedConfig {
    /// Add to the built-in sets instead of replacing them
    #[serde(default = "default_true")]
    pub extend: bool,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl Default for ReservedConfig {
    fn default() -> Self {
        Self {
            extend: true,
            fields: Vec::new(),
            types: Vec::new(),
        }
    }
}

/// Service and escape suffixes. Values are checked while parsing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuffixConfig {
    pub server: Suffix,
    pub client: Suffix,
    pub escape: Suffix,
}

impl Default for SuffixConfig {
    fn default() -> Self {
        let go = NamingConvention::go();
        Self {
            server: go.server_suffix,
            client: go.client_suffix,
            escape: go.escape_suffix,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Root of a naming config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    #[serde(default)]
    pub reserved: ReservedConfig,
    #[serde(default)]
    pub suffixes: SuffixConfig,
}

impl FromStr for NamingConfig {
    type Err = Box<ConfigError>;

    fn from_str(s: &str) -> ConfigResult<Self> {
        Self::from_str_with_filename(s, "protoname.toml")
    }
}

impl NamingConfig {
    /// Parse a config file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> ConfigResult<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: NamingConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext<'_>) -> ConfigResult<()> {
        if self.suffixes.escape.is_empty() {
            return Err(ctx.invalid_suffix_error("escape", self.suffixes.escape.as_str()));
        }

        for name in self.reserved.fields.iter().chain(&self.reserved.types) {
            Identifier::parse(name.as_str()).map_err(|e| ctx.invalid_reserved_error(name, e))?;
        }
        Ok(())
    }

    /// Build the convention described by this config.
    pub fn into_convention(self) -> NamingConvention {
        let mut convention = NamingConvention::go();
        if !self.reserved.extend {
            convention.reserved_fields.clear();
            convention.reserved_types.clear();
        }
        convention.reserved_fields.extend(self.reserved.fields);
        convention.reserved_types.extend(self.reserved.types);
        convention.server_suffix = self.suffixes.server;
        convention.client_suffix = self.suffixes.client;
        convention.escape_suffix = self.suffixes.escape;
        convention
    }
}
