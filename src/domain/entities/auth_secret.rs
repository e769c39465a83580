//! Shared secret used to authorize mutating API calls.

use std::fmt;
use std::sync::Arc;

use subtle::ConstantTimeEq;

/// The bearer secret configured for a registry.
///
/// An empty secret never validates anything, including an empty token.
/// `Debug` output is redacted so the value cannot leak through logs.
#[derive(Clone, Default)]
pub struct AuthSecret(Arc<str>);

impl AuthSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Arc::from(secret.into()))
    }

    /// A secret that rejects every token. Used by tooling that never serves HTTP.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Returns true if a non-empty secret is set.
    pub fn is_configured(&self) -> bool {
        !self.0.is_empty()
    }

    /// Compares `presented` with the secret in constant time.
    pub fn verify(&self, presented: &str) -> bool {
        if !self.is_configured() {
            return false;
        }

        presented.as_bytes().ct_eq(self.0.as_bytes()).into()
    }
}

impl fmt::Debug for AuthSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_configured() {
            f.write_str("AuthSecret(***)")
        } else {
            f.write_str("AuthSecret(<unset>)")
        }
    }
}
