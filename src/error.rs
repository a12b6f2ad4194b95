//! Error types for Elastic Email operations.

use reqwest::header::HeaderMap;
use thiserror::Error;

/// Errors that can occur while talking to the Elastic Email API.
///
/// The four service-facing cases stay distinct so callers can tell "the
/// service said no" ([`Error::Api`]) from "the response made no sense"
/// ([`Error::Decode`]), "the HTTP exchange failed" ([`Error::Transport`]) and
/// "there was no file to download" ([`Error::NotFound`]).
#[derive(Debug, Error)]
pub enum Error {
    /// The service answered with `success: false`.
    ///
    /// The payload is the server's `error` string, verbatim.
    #[error("{0}")]
    Api(String),

    /// The response body was not valid JSON or did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered with a non-2xx status.
    #[error("{description}")]
    Transport {
        /// HTTP status code.
        status: u16,
        /// Server-provided diagnostic text, falling back to the reason phrase.
        description: String,
        /// Response headers, kept for diagnostics.
        headers: HeaderMap,
        /// Raw response body, kept for diagnostics.
        body: Vec<u8>,
    },

    /// A request parameter could not be serialized (e.g. a JSON document parameter).
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// A download returned an empty body.
    #[error("no file is available for the requested identifier")]
    NotFound,

    /// The request never produced a status (connection, TLS, timeout, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The client was configured with invalid settings.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code for [`Error::Transport`], or for an [`Error::Request`]
    /// that carries one; `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => Some(*status),
            Error::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` when the service itself rejected the call.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api(_))
    }
}
