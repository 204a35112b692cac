//! Error types returned by the Mailinator client.

use thiserror::Error;

/// Errors produced while building, sending, or decoding an API call.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure from the underlying HTTP client
    /// (connection, TLS, timeout), surfaced verbatim.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-200 status and a decodable
    /// `{code, message}` error body. The display text is exactly the
    /// server's message; the numeric code stays available on the variant.
    #[error("{message}")]
    Api {
        /// Server-side error code, when the error body carried one.
        code: Option<i64>,
        /// Server-side error message.
        message: String,
    },

    /// The server answered with a non-200 status and a body that is not
    /// a recognizable error shape.
    #[error("unknown error, status code: {0}")]
    UnknownStatus(u16),

    /// A request body could not be serialized, or a 200 response body
    /// could not be deserialized into the expected shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A non-JSON 200 response carried a missing, malformed, or
    /// non-`attachment` `Content-Disposition` header.
    #[error("invalid Content-Disposition header: {0}")]
    ContentDisposition(String),

    /// A raw-body response was not valid UTF-8.
    #[error("response body is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
