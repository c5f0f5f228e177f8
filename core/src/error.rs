//! Error types for the link API client.
//!
//! # Design
//! `ApiError` covers everything that can go wrong between building a request
//! and parsing its response. A malformed types list is deliberately absent:
//! `ResourceClient::parse_list_types` downgrades it to an empty catalog.
//! `DraftError` is raised before any request exists, when the creation form
//! is not submittable.

use thiserror::Error;

/// Errors returned by `ResourceClient` and `Transport` implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a status the operation does not accept.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Reasons a `LinkDraft` is rejected client-side.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("select at least one type")]
    NoTypes,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}
