//! Synchronization core for the linkshelf bookmark client.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `SyncController` drives those
//! requests through a host-supplied `Transport` and keeps the fetched link
//! list, the type catalog, the filter and the creation draft consistent.
//!
//! # Design
//! - `ResourceClient` is stateless: it holds only `base_url`.
//! - Each API operation is split into `build_*` and `parse_*` so the I/O
//!   boundary is explicit.
//! - `SyncController` is the single owner of client-side state; errors stop
//!   at its boundary and surface through a `NotificationSink`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod draft;
pub mod error;
pub mod filter;
pub mod http;
pub mod notify;
pub mod sync;
pub mod types;

pub use client::ResourceClient;
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use draft::{DraftSession, LinkDraft};
pub use error::{ApiError, DraftError};
pub use filter::FilterState;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use notify::{Notice, NoticeLevel, NotificationSink, RecordingSink};
pub use sync::{LoadingFlag, SyncController};
pub use types::Link;
