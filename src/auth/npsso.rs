//! The npsso bootstrap credential.

use std::fmt;

/// The long-lived npsso cookie obtained from the PSN website.
///
/// This is the only secret the caller ever supplies. It is presented to the
/// authorization endpoint exactly once per token-pair acquisition and is
/// never retransmitted on ordinary API calls.
///
/// # Security
///
/// The cookie value is never exposed in Debug output to prevent accidental
/// logging.
///
/// # Example
///
/// ```
/// use psn_api::Npsso;
///
/// let npsso = Npsso::new("64-character-cookie-value");
/// ```
#[derive(Clone)]
pub struct Npsso(String);

impl Npsso {
    /// Wrap an npsso cookie value.
    pub fn new(cookie: impl Into<String>) -> Self {
        Self(cookie.into())
    }

    /// Returns the cookie value for the authorization request.
    ///
    /// # Security
    ///
    /// Use only when constructing the Cookie header of the authorize call.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the wrapped value is empty or whitespace.
    pub(crate) fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Npsso {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Npsso {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// Intentionally hide the cookie in Debug output
impl fmt::Debug for Npsso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Npsso").field(&"[REDACTED]").finish()
    }
}
