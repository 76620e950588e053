//! Shared type definitions.

use std::fmt;

/// Identifier of the party signing a request.
///
/// The identifier travels in clear text as the left half of the credential
/// token (`<principal>:<signature>`) and is the last field of the canonical
/// form, so it must be non-empty visible ASCII and must not contain `:`.
/// Surrounding whitespace is rejected because the token reader trims it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrincipalId(String);

impl PrincipalId {
    /// Create a new principal identifier.
    ///
    /// # Errors
    /// Returns [`GavError::InvalidPrincipal`](crate::GavError::InvalidPrincipal)
    /// if the identifier is empty, contains `:`, contains characters outside
    /// visible ASCII, or has leading/trailing spaces.
    pub fn new(id: impl Into<String>) -> crate::GavResult<Self> {
        let id = id.into();
        if !Self::is_valid(&id) {
            return Err(crate::GavError::InvalidPrincipal(id));
        }
        Ok(Self(id))
    }

    /// Check whether `id` can be used as a principal identifier.
    #[must_use]
    pub fn is_valid(id: &str) -> bool {
        !id.is_empty()
            && id.trim() == id
            && id.bytes().all(|b| (b' '..=b'~').contains(&b) && b != b':')
    }

    /// Get the principal identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PrincipalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PrincipalId {
    type Error = crate::GavError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PrincipalId> for String {
    fn from(value: PrincipalId) -> Self {
        value.0
    }
}
