//! The PSN authentication lifecycle.
//!
//! Token acquisition is a two-step OAuth dance against Sony's authorization
//! service: present the npsso cookie to the authorize endpoint, harvest the
//! authorization code from the redirect it answers with (the redirect is
//! never followed), then trade the code for an access/refresh token pair at
//! the token endpoint. Refreshes go straight to the token endpoint.

use chrono::Utc;
use reqwest::header;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::error::Error;
use crate::http::Endpoints;

use super::npsso::Npsso;
use super::tokens::{AccessToken, RefreshToken, TokenResponse, TokenSet};

// Registered client identity of the official PSN Android app. These literals
// must match the service's client registration exactly.
const CLIENT_ID: &str = "09515159-7237-4370-9b40-3806e67c0891";
const SCOPE: &str = "psn:mobile.v2.core psn:clientapp";
const REDIRECT_URI: &str = "com.scee.psxandroid.scecompcall://redirect";
const BASIC_AUTH: &str =
    "Basic MDk1MTUxNTktNzIzNy00MzcwLTliNDAtMzgwNmU2N2MwODkxOnVjUGprYTV0bnRCMktxc1A=";

// Error code the authorize endpoint reports for an expired or wrong cookie.
const EXPIRED_NPSSO_CODE: &str = "4165";

/// Produces a currently-valid bearer token on demand, performing the minimum
/// network work necessary.
///
/// The token pair lives in a `Mutex<Option<TokenSet>>` that is held across
/// the whole exchange. Any number of callers may request a token at once:
/// whoever takes the lock first performs the (single) exchange, and the rest
/// re-check the stored set under the lock and reuse it. At most one
/// token-exchange or refresh is ever in flight.
pub(crate) struct Authenticator {
    npsso: Npsso,
    http: reqwest::Client,
    endpoints: Endpoints,
    token_set: Mutex<Option<TokenSet>>,
}

impl Authenticator {
    pub(crate) fn new(npsso: Npsso, http: reqwest::Client, endpoints: Endpoints) -> Self {
        Self {
            npsso,
            http,
            endpoints,
            token_set: Mutex::new(None),
        }
    }

    /// Returns a bearer token whose expiry is still in the future.
    ///
    /// Resolution order: reuse the cached token while it is fresh; refresh
    /// once it has expired; fall back to the full cookie flow when the
    /// refresh token itself is rejected or no token pair exists yet.
    ///
    /// # Errors
    ///
    /// [`Error::Authentication`] when the cookie is expired/incorrect or the
    /// service rejects an exchange; [`Error::Transport`] when the network
    /// fails.
    #[instrument(skip(self))]
    pub(crate) async fn obtain_fresh_access_token(&self) -> Result<AccessToken, Error> {
        let mut token_set = self.token_set.lock().await;

        if let Some(current) = token_set.as_ref() {
            if current.is_fresh(Utc::now()) {
                return Ok(current.access_token.clone());
            }
        }

        let next = match token_set.as_ref() {
            None => self.authenticate().await?,
            Some(current) => match self.refresh(&current.refresh_token).await {
                Ok(next) => next,
                Err(Error::Authentication(reason)) => {
                    // Refresh token rejected server-side: start over from the cookie.
                    warn!(%reason, "token refresh rejected, re-running full authentication");
                    self.authenticate().await?
                }
                Err(other) => return Err(other),
            },
        };

        let access_token = next.access_token.clone();
        *token_set = Some(next);
        Ok(access_token)
    }

    /// Run the full cookie → code → token-pair flow.
    async fn authenticate(&self) -> Result<TokenSet, Error> {
        info!("exchanging npsso cookie for an authorization code");

        let response = self
            .http
            .get(self.endpoints.oauth_authorize())
            .header(header::COOKIE, format!("npsso={}", self.npsso.as_str()))
            .query(&[
                ("access_type", "offline"),
                ("client_id", CLIENT_ID),
                ("scope", SCOPE),
                ("redirect_uri", REDIRECT_URI),
                ("response_type", "code"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "authorize request failed with HTTP {}: {body}",
                status.as_u16()
            )));
        }

        // The code travels in the query string of the redirect target.
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                Error::Authentication("authorize response carried no redirect location".to_string())
            })?;
        let code = parse_authorization_code(location)?;
        debug!("authorization code obtained");

        self.request_token(&[
            ("code", code.as_str()),
            ("grant_type", "authorization_code"),
            ("redirect_uri", REDIRECT_URI),
            ("scope", SCOPE),
            ("token_format", "jwt"),
        ])
        .await
    }

    /// Trade the refresh token for a new pair.
    #[instrument(skip_all)]
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<TokenSet, Error> {
        info!("refreshing access token");
        self.request_token(&[
            ("refresh_token", refresh_token.as_str()),
            ("grant_type", "refresh_token"),
            ("scope", SCOPE),
            ("token_format", "jwt"),
        ])
        .await
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenSet, Error> {
        let response = self
            .http
            .post(self.endpoints.oauth_token())
            .header(header::AUTHORIZATION, BASIC_AUTH)
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "token request failed with HTTP {}: {body}",
                status.as_u16()
            )));
        }

        let wire: TokenResponse = response.json().await?;
        let token_set = TokenSet::from_response(wire, Utc::now());
        if token_set.refresh_token_expiring_soon() {
            warn!("refresh token expires in less than 3 days, renew the npsso cookie");
        }
        Ok(token_set)
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("npsso", &self.npsso)
            .field("token_set", &"[..]")
            .finish()
    }
}

/// Pull the authorization code out of the redirect target's query string.
///
/// An `error` query parameter means the service declined: `error_code`
/// containing [`EXPIRED_NPSSO_CODE`] identifies an expired or incorrect
/// cookie, anything else is an unknown authentication failure.
fn parse_authorization_code(location: &str) -> Result<String, Error> {
    let url = Url::parse(location)
        .map_err(|e| Error::Authentication(format!("malformed redirect location: {e}")))?;

    let mut code = None;
    let mut error = None;
    let mut error_code = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            "error_code" => error_code = Some(value.into_owned()),
            _ => {}
        }
    }

    if error.is_some() {
        if error_code
            .as_deref()
            .is_some_and(|c| c.contains(EXPIRED_NPSSO_CODE))
        {
            return Err(Error::Authentication(
                "npsso cookie has expired or is incorrect, generate a new one".to_string(),
            ));
        }
        return Err(Error::Authentication(
            "something went wrong while authenticating".to_string(),
        ));
    }

    code.ok_or_else(|| {
        Error::Authentication("redirect location carried no authorization code".to_string())
    })
}
