//! Error types for the posts API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the editor reports
//! "the resource does not exist" differently from any other status.
//! All other non-2xx responses land in `HttpError` with the raw status
//! code and body for debugging.

use thiserror::Error;

/// Errors returned by `PostClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than the expected one and 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// An item request was built for a post that has no id yet.
    #[error("post has no id")]
    MissingId,
}
