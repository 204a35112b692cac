//! Mailinator async client implementation: configuration, request
//! dispatch, and response decoding.

use crate::{Error, Result};
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE, USER_AGENT,
};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Async client for the Mailinator email/SMS testing API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom
/// settings like a private base URL, a proxy, or a different timeout.
/// The client is immutable after construction and safe to share across
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    api_token: String,
    base_url: String,
}

/// Wire shape of a server-reported error body.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    code: Option<i64>,
    message: String,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Mailinator client with the given API token.
    ///
    /// An empty token produces a fully unauthenticated client, which is
    /// only useful for the public webhook endpoints.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailinator_client::Client;
    /// let client = Client::new("your-api-token")?;
    /// # Ok::<(), mailinator_client::Error>(())
    /// ```
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_token(api_token).build()
    }

    /// Send a request and decode the JSON response into `T`.
    pub(crate) async fn send_request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let res = self.execute(method, path, query, body).await?;
        self.decode_json(res).await
    }

    /// Send a request and return the response body verbatim as a string,
    /// bypassing JSON decoding entirely. Used by the raw message-source
    /// endpoints and the custom-service webhooks.
    pub(crate) async fn send_request_raw<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let res = self.execute(method, path, query, body).await?;
        let status = res.status();
        let body = res.bytes().await?;

        if status != StatusCode::OK {
            return Err(Self::status_error(status, &body));
        }

        if body.is_empty() {
            return Ok(String::new());
        }

        Ok(String::from_utf8(body.to_vec())?)
    }

    /// Build and perform the HTTP call. The body is serialized here so
    /// that failures surface before any network I/O and the explicit
    /// `charset=utf-8` content type is never overridden.
    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut req = self.http.request(method, &url).headers(self.headers());

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(body) = body {
            req = req.body(serde_json::to_vec(body)?);
        }

        Ok(req.send().await?)
    }

    /// Decode a completed response according to the state machine:
    /// status check, then content-type branch, then disposition handling.
    async fn decode_json<T: DeserializeOwned>(&self, res: reqwest::Response) -> Result<T> {
        let status = res.status();
        let content_type = header_value(res.headers(), CONTENT_TYPE.as_str());
        let disposition = header_value(res.headers(), CONTENT_DISPOSITION.as_str());
        let body = res.bytes().await?;

        if status != StatusCode::OK {
            return Err(Self::status_error(status, &body));
        }

        // Exact match on purpose: the service sends a bare media type for
        // JSON payloads and anything else signals a binary download.
        if content_type.as_deref() == Some("application/json") {
            return Ok(serde_json::from_slice(&body)?);
        }

        let disposition = disposition
            .ok_or_else(|| Error::ContentDisposition("missing header".to_string()))?;
        let (kind, filename) = parse_content_disposition(&disposition)?;

        if kind != "attachment" {
            return Err(Error::ContentDisposition(format!(
                "unexpected disposition `{kind}`"
            )));
        }

        // Reuse the generic JSON-target mechanism for the binary payload:
        // wrap the body in the attachment shape and deserialize into `T`.
        let content = serde_json::json!({
            "bytes": body.to_vec(),
            "content-type": content_type.unwrap_or_default(),
            "filename": filename.unwrap_or_default(),
        });

        Ok(serde_json::from_value(content)?)
    }

    /// Normalize a non-200 response into an error: the server's own
    /// `{code, message}` when the body decodes, a synthesized
    /// status-code error otherwise.
    fn status_error(status: StatusCode, body: &[u8]) -> Error {
        match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(err) => Error::Api {
                code: err.code,
                message: err.message,
            },
            Err(_) => Error::UnknownStatus(status.as_u16()),
        }
    }

    /// Build headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        // No Authorization header at all when the token is empty; the
        // public webhook endpoints are called unauthenticated.
        if !self.api_token.is_empty() {
            if let Ok(value) = HeaderValue::from_str(&self.api_token) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }
}

/// Read a header as an owned string, ignoring non-UTF-8 values.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Parse a `Content-Disposition` value into its disposition token and
/// optional `filename` parameter. Quotes around the filename are
/// stripped; the disposition token is lowercased.
fn parse_content_disposition(value: &str) -> Result<(String, Option<String>)> {
    let mut parts = value.split(';');

    let kind = parts
        .next()
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::ContentDisposition(value.to_string()))?;

    let mut filename = None;
    for param in parts {
        let Some((key, val)) = param.split_once('=') else {
            return Err(Error::ContentDisposition(value.to_string()));
        };
        if key.trim().eq_ignore_ascii_case("filename") {
            filename = Some(val.trim().trim_matches('"').to_string());
        }
    }

    Ok((kind, filename))
}

const BASE_URL: &str = "https://api.mailinator.com/api/v2";
const USER_AGENT_VALUE: &str = concat!("mailinator-client/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Builder for configuring a Mailinator client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_token: String,
    base_url: String,
    timeout: Duration,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Empty API token (unauthenticated requests)
    /// - Production API base URL
    /// - Five minute per-call timeout
    /// - No proxy, strict TLS validation
    pub fn new() -> Self {
        Self {
            api_token: String::new(),
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            danger_accept_invalid_certs: false,
        }
    }

    /// Set the API token sent in the `Authorization` header.
    ///
    /// Leave unset (or empty) for unauthenticated requests, which only
    /// the public webhook endpoints accept.
    pub fn api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = api_token.into();
        self
    }

    /// Override the API base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-call timeout (default: five minutes).
    ///
    /// The timeout bounds the whole round trip of each request; it is
    /// not a connection-pool setting.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Build the client.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailinator_client::Client;
    /// let client = Client::builder()
    ///     .api_token("your-api-token")
    ///     .build()?;
    /// # Ok::<(), mailinator_client::Error>(())
    /// ```
    pub fn build(self) -> Result<Client> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            api_token: self.api_token,
            base_url: self.base_url,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
