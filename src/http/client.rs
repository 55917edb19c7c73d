//! The authorized request pipeline.
//!
//! Every facade call funnels through [`RequestBuilder`]: a fresh bearer token
//! is obtained (refreshing transparently if needed), headers are merged,
//! the request is dispatched on the shared pooled client, and non-2xx
//! responses are re-typed into the crate's error taxonomy. This layer never
//! retries; failures surface to the caller as-is.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::auth::Authenticator;
use crate::error::Error;

/// One outbound call, described before dispatch.
///
/// Transient: constructed per call, consumed by [`RequestBuilder::request`].
#[derive(Debug)]
pub(crate) struct RequestSpec {
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl RequestSpec {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
            timeout: None,
        }
    }

    pub(crate) fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub(crate) fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub(crate) fn patch(url: impl Into<String>) -> Self {
        Self::new(Method::PATCH, url)
    }

    pub(crate) fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Append one query parameter.
    pub(crate) fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Set the JSON request body.
    pub(crate) fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a per-call header override. Overrides win over defaults and the
    /// Authorization header.
    pub(crate) fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Override the per-request deadline for this call only.
    #[allow(dead_code)]
    pub(crate) fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Dispatches [`RequestSpec`]s as authorized HTTP calls.
///
/// Owns the default header set and the per-request deadline; borrows the
/// process-wide pooled [`reqwest::Client`] and the [`Authenticator`].
pub(crate) struct RequestBuilder {
    http: reqwest::Client,
    authenticator: Authenticator,
    default_headers: HeaderMap,
    timeout: Duration,
}

impl RequestBuilder {
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] when `accept_language` or `country` are not
    /// valid header values.
    pub(crate) fn new(
        http: reqwest::Client,
        authenticator: Authenticator,
        accept_language: &str,
        country: &str,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                 AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.212 Safari/537.36",
            ),
        );
        default_headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        default_headers.insert(header::ACCEPT_LANGUAGE, parse_value(accept_language)?);
        default_headers.insert(HeaderName::from_static("country"), parse_value(country)?);

        Ok(Self {
            http,
            authenticator,
            default_headers,
            timeout,
        })
    }

    /// Dispatch a spec and return the status-checked response.
    ///
    /// 2xx responses pass through with the body untouched; everything else is
    /// mapped through [`Error::from_status`] with the body text preserved.
    pub(crate) async fn request(&self, spec: RequestSpec) -> Result<reqwest::Response, Error> {
        debug!(method = %spec.method, url = %spec.url, "dispatching request");
        trace!(query = ?spec.query, "query parameters");

        let headers = self.auth_headers(&spec.headers).await?;
        let mut request = self
            .http
            .request(spec.method, &spec.url)
            .headers(headers)
            .timeout(spec.timeout.unwrap_or(self.timeout));
        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        check_response(response).await
    }

    /// Dispatch a spec and decode the 2xx body as JSON.
    pub(crate) async fn request_json<R: DeserializeOwned>(
        &self,
        spec: RequestSpec,
    ) -> Result<R, Error> {
        let response = self.request(spec).await?;
        Ok(response.json::<R>().await?)
    }

    /// Multipart POST: the JSON body travels as a single named file part
    /// instead of a plain body.
    pub(crate) async fn request_multipart_json<R: DeserializeOwned>(
        &self,
        url: &str,
        part_name: &str,
        body: serde_json::Value,
    ) -> Result<R, Error> {
        debug!(url, part_name, "dispatching multipart request");

        // reqwest must supply the boundary-bearing content type itself.
        let mut headers = self.auth_headers(&[]).await?;
        headers.remove(header::CONTENT_TYPE);

        let part = Part::text(body.to_string()).mime_str("application/json; charset=utf-8")?;
        let form = Form::new().part(part_name.to_string(), part);

        let response = self
            .http
            .post(url)
            .headers(headers)
            .timeout(self.timeout)
            .multipart(form)
            .send()
            .await?;
        let response = check_response(response).await?;
        Ok(response.json::<R>().await?)
    }

    /// Merge headers for an authorized call. Precedence, later wins:
    /// defaults < `Authorization: Bearer <token>` < caller overrides.
    async fn auth_headers(&self, overrides: &[(String, String)]) -> Result<HeaderMap, Error> {
        let token = self.authenticator.obtain_fresh_access_token().await?;

        let mut headers = self.default_headers.clone();
        headers.insert(
            header::AUTHORIZATION,
            parse_value(&format!("Bearer {}", token.as_str()))?,
        );
        for (name, value) in overrides {
            headers.insert(parse_name(name)?, parse_value(value)?);
        }
        Ok(headers)
    }
}

async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    trace!(status = %status, "response received");
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::from_status(status, body))
}

fn parse_name(name: &str) -> Result<HeaderName, Error> {
    HeaderName::try_from(name)
        .map_err(|_| Error::IllegalArgument(format!("invalid header name: {name}")))
}

fn parse_value(value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::IllegalArgument(format!("invalid header value: {value}")))
}
