use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::errors::InitError;

pub const MAX_TITLE_LEN: usize = 256;
pub const MAX_URL_LEN: usize = 2048;
pub const MAX_PATH_LEN: usize = 256;

/// Owned text whose UTF-8 length never exceeds `N` bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoundedText<const N: usize>(String);

/// Window title.
pub type Title = BoundedText<MAX_TITLE_LEN>;
/// Start URL.
pub type StartUrl = BoundedText<MAX_URL_LEN>;
/// Temporary files directory.
pub type TempPath = BoundedText<MAX_PATH_LEN>;

impl<const N: usize> BoundedText<N> {
    pub const LIMIT: usize = N;

    pub fn new(value: impl Into<String>) -> Result<Self, InitError> {
        let value = value.into();
        if value.len() > N {
            return Err(InitError::TextTooLong {
                limit: N,
                actual: value.len(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> Deref for BoundedText<N> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> fmt::Display for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const N: usize> TryFrom<String> for BoundedText<N> {
    type Error = InitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const N: usize> TryFrom<&str> for BoundedText<N> {
    type Error = InitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const N: usize> From<BoundedText<N>> for String {
    fn from(value: BoundedText<N>) -> Self {
        value.0
    }
}
