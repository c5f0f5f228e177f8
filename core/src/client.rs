//! Stateless HTTP request builder and response parser for the link API.
//!
//! # Design
//! `ResourceClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the round-trip, keeping the core
//! deterministic and free of I/O dependencies. Every call is a single
//! attempt; nothing is cached.

use serde_json::Value;
use url::form_urlencoded;

use crate::config::ClientConfig;
use crate::draft::LinkDraft;
use crate::error::ApiError;
use crate::filter::FilterState;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Link;

/// Synchronous, stateless client for the link API.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    base_url: String,
}

impl ResourceClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /api/links`, carrying only the non-empty filter fields.
    pub fn build_list_links(&self, filter: &FilterState) -> HttpRequest {
        let pairs = filter.query_pairs();
        let mut path = format!("{}/api/links", self.base_url);
        if !pairs.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish();
            path.push('?');
            path.push_str(&query);
        }
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_types(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/types", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_link(&self, draft: &LinkDraft) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(draft).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/links", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_link(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/api/links/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_links(&self, response: HttpResponse) -> Result<Vec<Link>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Distinct tags in server order. A JSON body that is not an array yields
    /// an empty catalog instead of an error; non-string entries are dropped.
    pub fn parse_list_types(&self, response: HttpResponse) -> Result<Vec<String>, ApiError> {
        check_status(&response, 200)?;
        let value: Value =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        let Value::Array(items) = value else {
            tracing::warn!(body = %response.body, "types response is not an array, using empty catalog");
            return Ok(Vec::new());
        };

        let mut types: Vec<String> = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(tag) if !types.contains(&tag) => types.push(tag),
                Value::String(_) => {}
                other => tracing::warn!(entry = %other, "dropping non-string type entry"),
            }
        }
        Ok(types)
    }

    pub fn parse_create_link(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }

    pub fn parse_delete_link(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }
}

/// Require exactly `expected`.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(status_error(response))
}

/// Accept any 2xx.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(status_error(response))
}

fn status_error(response: &HttpResponse) -> ApiError {
    ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    }
}
