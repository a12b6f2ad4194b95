//! Elastic Email async client and request transport.

use crate::envelope::{self, Envelope};
use crate::multipart;
use crate::params::ParameterMap;
use crate::{Error, FilePayload, Result};
use reqwest::header::{ACCEPT, CONTENT_DISPOSITION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Async client for the Elastic Email v2 API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom settings
/// like the base URL, proxies and timeouts. The configuration is fixed once
/// the client is built; cloning is cheap and clones share a connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    proxy: Option<String>,
    user_agent: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a client for `api_key` with default settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use elasticemail_client::Client;
    /// # fn main() -> Result<(), elasticemail_client::Error> {
    /// let client = Client::new("my-api-key")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Base URL every request path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the proxy URL if one was configured.
    ///
    /// Returns `None` when no proxy was set on the builder.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// POST a form-encoded request and decode the JSON envelope.
    ///
    /// `path` is relative to the base URL (e.g. `"contact/load"`). The API key
    /// is appended to `params` as `apikey`.
    ///
    /// # Errors
    /// [`Error::Transport`] for non-2xx statuses, [`Error::Decode`] for
    /// unreadable bodies, [`Error::Api`] when the service reports failure.
    #[instrument(skip(self, params), fields(params = params.len()))]
    pub async fn request<T: DeserializeOwned>(&self, path: &str, params: ParameterMap) -> Result<T> {
        let response = self
            .http
            .post(self.endpoint(path))
            .headers(self.headers())
            .form(&self.authenticated(params))
            .send()
            .await?;

        let body = ensure_success(response).await?.bytes().await?;
        debug!(bytes = body.len(), "received response");
        envelope::decode(&body)
    }

    /// Upload files as `multipart/form-data` and return the raw response body.
    ///
    /// Each entry of `params` becomes a form field; each file becomes a part
    /// named `filefoobarname`. Upload endpoints still answer with the JSON
    /// envelope, so callers normally pass the result to [`envelope::decode`].
    ///
    /// # Errors
    /// [`Error::Transport`] carrying the server's description for non-2xx statuses.
    #[instrument(skip(self, files, params), fields(files = files.len()))]
    pub async fn upload_files(
        &self,
        path: &str,
        files: &[FilePayload],
        params: ParameterMap,
    ) -> Result<Vec<u8>> {
        let boundary = multipart::boundary();
        let body = multipart::encode(&boundary, &self.authenticated(params), files);

        let mut headers = self.headers();
        let content_type = HeaderValue::from_str(&multipart::content_type(&boundary))
            .map_err(|e| Error::Config(format!("invalid multipart boundary: {e}")))?;
        headers.insert(CONTENT_TYPE, content_type);

        let response = self
            .http
            .post(self.endpoint(path))
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let body = ensure_success(response).await?.bytes().await?;
        debug!(bytes = body.len(), "upload complete");
        Ok(body.to_vec())
    }

    /// Download a file with a GET request.
    ///
    /// An empty body is always [`Error::NotFound`], whatever the headers say.
    /// A non-empty body without `Content-Disposition` is read as an envelope:
    /// a failure becomes [`Error::Api`], a success means there was no file and
    /// yields `Ok(None)`.
    #[instrument(skip(self, params), fields(params = params.len()))]
    pub async fn download_file(
        &self,
        path: &str,
        params: ParameterMap,
    ) -> Result<Option<FilePayload>> {
        let response = self
            .http
            .get(self.endpoint(path))
            .headers(self.headers())
            .query(&self.authenticated(params))
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let disposition = header_string(response.headers(), CONTENT_DISPOSITION);
        let content_type = header_string(response.headers(), CONTENT_TYPE);
        let content = response.bytes().await?.to_vec();

        if content.is_empty() {
            debug!("download returned an empty body");
            return Err(Error::NotFound);
        }

        let Some(disposition) = disposition else {
            let envelope: Envelope<serde_json::Value> = serde_json::from_slice(&content)?;
            envelope.into_result()?;
            debug!("download succeeded without a file");
            return Ok(None);
        };

        let file_name = multipart::extract_filename(&disposition).unwrap_or_default();
        debug!(%file_name, bytes = content.len(), "downloaded file");
        Ok(Some(FilePayload {
            content,
            content_type,
            file_name,
        }))
    }

    /// Resolve an API path against the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the API key to a parameter set.
    fn authenticated(&self, params: ParameterMap) -> ParameterMap {
        params.param("apikey", &self.api_key)
    }

    /// Build headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, application/octet-stream, */*"),
        );
        headers
    }
}

/// Read a header as text, replacing invalid bytes.
fn header_string(headers: &HeaderMap, name: reqwest::header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
}

/// Turn a non-2xx response into [`Error::Transport`].
///
/// The description prefers the server's own text over a generic phrase.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let headers = response.headers().clone();
    let body = match response.bytes().await {
        Ok(body) => body.to_vec(),
        Err(err) => {
            warn!(status = status.as_u16(), error = %err, "failed to read error response body");
            Vec::new()
        }
    };
    let text = String::from_utf8_lossy(&body);
    let description = match text.trim() {
        "" => status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
        text => text.to_string(),
    };

    warn!(status = status.as_u16(), %description, "request failed");
    Err(Error::Transport {
        status: status.as_u16(),
        description,
        headers,
        body,
    })
}

const BASE_URL: &str = "https://api.elasticemail.com/v2";
const USER_AGENT_VALUE: &str = concat!("elasticemail-client-rs/", env!("CARGO_PKG_VERSION"));
const API_KEY_VAR: &str = "ELASTICEMAIL_API_KEY";
const BASE_URL_VAR: &str = "ELASTICEMAIL_BASE_URL";

/// Builder for configuring an Elastic Email client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    user_agent: String,
    proxy: Option<String>,
    timeout: Option<Duration>,
    danger_accept_invalid_certs: bool,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("proxy", &self.proxy)
            .field("timeout", &self.timeout)
            .field(
                "danger_accept_invalid_certs",
                &self.danger_accept_invalid_certs,
            )
            .finish()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - `https://api.elasticemail.com/v2` as the base URL
    /// - No proxy
    /// - No timeout beyond reqwest's own
    /// - `danger_accept_invalid_certs = false`
    /// - `elasticemail-client-rs/<version>` as the user agent
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT_VALUE.to_string(),
            proxy: None,
            timeout: None,
            danger_accept_invalid_certs: false,
        }
    }

    /// Create a builder from `ELASTICEMAIL_API_KEY` and, if set,
    /// `ELASTICEMAIL_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| Error::Config(format!("{API_KEY_VAR} is not set")))?;
        let mut builder = Self::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            builder = builder.base_url(base_url);
        }
        Ok(builder)
    }

    /// Override the API base URL.
    ///
    /// Useful for testing or for a regional endpoint.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Limit the total time of each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Build the client.
    ///
    /// No request is made; the settings are only validated.
    ///
    /// # Examples
    /// ```no_run
    /// # use elasticemail_client::Client;
    /// # fn main() -> Result<(), elasticemail_client::Error> {
    /// let client = Client::builder("my-api-key")
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config("API key is empty".to_string()));
        }
        let base_url = self.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base URL must be http(s): {base_url}"
            )));
        }

        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs)
            .user_agent(self.user_agent.as_str());

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build()?;
        debug!(%base_url, "client built");

        Ok(Client {
            http,
            api_key: self.api_key,
            base_url,
            proxy: self.proxy,
            user_agent: self.user_agent,
        })
    }
}
