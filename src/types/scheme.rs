use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::InitError;

/// Maximum number of custom schemes one window registers.
pub const MAX_CUSTOM_SCHEMES: usize = 16;
/// Maximum byte length of a custom scheme name.
pub const MAX_SCHEME_NAME_LEN: usize = 50;

/// Schemes the web engine answers itself; registering them would shadow
/// ordinary navigation.
const RESERVED_SCHEMES: &[&str] = &[
    "about",
    "blob",
    "data",
    "file",
    "ftp",
    "http",
    "https",
    "javascript",
    "ws",
    "wss",
];

/// A validated, lower-cased custom URI scheme name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchemeName(String);

impl SchemeName {
    /// Parses a scheme name per RFC 3986: a letter followed by letters,
    /// digits, `+`, `-` or `.`.
    pub fn parse(name: &str) -> Result<Self, InitError> {
        if name.is_empty() || name.len() > MAX_SCHEME_NAME_LEN {
            return Err(InitError::InvalidSchemeName(name.to_string()));
        }

        let mut chars = name.chars();
        let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !first_ok || !rest_ok {
            return Err(InitError::InvalidSchemeName(name.to_string()));
        }

        let lowered = name.to_ascii_lowercase();
        if RESERVED_SCHEMES.contains(&lowered.as_str()) {
            return Err(InitError::ReservedScheme(lowered));
        }

        Ok(Self(lowered))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SchemeName {
    type Error = InitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SchemeName> for String {
    fn from(value: SchemeName) -> Self {
        value.0
    }
}

/// The answer to one custom-scheme request. Ownership of the body moves
/// to the host for the duration of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl SchemeResponse {
    pub fn new(body: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self::new(body.into().into_bytes(), "text/html; charset=utf-8")
    }

    /// Empty 404, used when no handler is installed.
    pub fn not_found() -> Self {
        Self {
            status: 404,
            content_type: "text/plain".to_string(),
            body: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}
