//! Shared-secret lookup.
//!
//! This module defines the [`CredentialProvider`] trait for resolving the
//! secret shared with a principal, along with a [`StaticCredentialProvider`]
//! for testing and development use cases.

use std::collections::HashMap;
use std::fmt;

use crate::error::AuthError;

/// Trait for looking up shared secrets by principal identifier.
///
/// Implementations may back this with a database, configuration file,
/// or any other secret store. Secrets are fetched per request and must not be
/// cached by callers in this crate.
pub trait CredentialProvider: Send + Sync {
    /// Retrieve the secret shared with `principal_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PrincipalNotFound`] if the principal is not recognized.
    fn get_secret(&self, principal_id: &str) -> Result<Vec<u8>, AuthError>;
}

/// A simple in-memory credential provider backed by a `HashMap`.
///
/// Suitable for testing and development environments. Its `Debug` output
/// lists principals only, never secrets.
///
/// # Examples
///
/// ```
/// use gav_auth::credentials::{CredentialProvider, StaticCredentialProvider};
///
/// let provider = StaticCredentialProvider::new(vec![
///     ("123".to_owned(), b"abcde".to_vec()),
/// ]);
///
/// let secret = provider.get_secret("123").unwrap();
/// assert_eq!(secret, b"abcde");
/// ```
#[derive(Clone)]
pub struct StaticCredentialProvider {
    secrets: HashMap<String, Vec<u8>>,
}

impl StaticCredentialProvider {
    /// Create a new `StaticCredentialProvider` from an iterable of (principal_id, secret) pairs.
    pub fn new(secrets: impl IntoIterator<Item = (String, Vec<u8>)>) -> Self {
        Self {
            secrets: secrets.into_iter().collect(),
        }
    }
}

impl fmt::Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut principals: Vec<&str> = self.secrets.keys().map(String::as_str).collect();
        principals.sort_unstable();
        f.debug_struct("StaticCredentialProvider")
            .field("principals", &principals)
            .finish_non_exhaustive()
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn get_secret(&self, principal_id: &str) -> Result<Vec<u8>, AuthError> {
        self.secrets
            .get(principal_id)
            .cloned()
            .ok_or_else(|| AuthError::PrincipalNotFound(principal_id.to_owned()))
    }
}
