//! Domain DTOs for the link API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A persisted learning resource returned by the API.
///
/// `created_at` is kept as the backend's string; the client only displays it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub url: String,
    pub types: Vec<String>,
    pub created_at: String,
}
