//! OAuth token types.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// A bearer access token for authorized API requests.
///
/// Access tokens are short-lived (about an hour) JWTs.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct AccessToken(pub(crate) String);

impl AccessToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in Authorization headers.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// A refresh token for obtaining new access tokens.
///
/// Refresh tokens last about two months; once one expires a new npsso cookie
/// is required.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct RefreshToken(pub(crate) String);

impl RefreshToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in refresh requests.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}

/// Wire format of the token endpoint response.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    /// Refresh token lifetime in seconds.
    pub refresh_token_expires_in: i64,
}

/// A complete token pair with expiry metadata.
///
/// Replaced as a whole on every exchange or refresh; the access token and its
/// expiry instant are never observable independently of each other.
pub(crate) struct TokenSet {
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
    /// Absolute instant after which the access token is stale.
    pub access_token_expires_at: DateTime<Utc>,
    /// Remaining refresh token lifetime as reported at exchange time.
    pub refresh_token_expires_in: Duration,
}

impl TokenSet {
    /// Build a token set from the wire response, anchoring relative
    /// lifetimes at `now`.
    pub(crate) fn from_response(response: TokenResponse, now: DateTime<Utc>) -> Self {
        Self {
            access_token: AccessToken::new(response.access_token),
            refresh_token: RefreshToken::new(response.refresh_token),
            access_token_expires_at: now + Duration::seconds(response.expires_in),
            refresh_token_expires_in: Duration::seconds(response.refresh_token_expires_in),
        }
    }

    /// True while the access token can still be used as-is. Strict
    /// comparison: the service grants whatever skew tolerance exists.
    pub(crate) fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.access_token_expires_at > now
    }

    /// True when the refresh token is within three days of expiry and the
    /// npsso cookie should be renewed.
    pub(crate) fn refresh_token_expiring_soon(&self) -> bool {
        self.refresh_token_expires_in <= Duration::days(3)
    }
}

// Hide token material in Debug output, keep the expiry visible
impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSet")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("access_token_expires_at", &self.access_token_expires_at)
            .finish()
    }
}
