//! Client-side synchronization of the link list and type catalog.
//!
//! # Design
//! `SyncController` owns the authoritative `links` and `types` collections
//! and is the only thing that mutates them. Every trigger is an explicit
//! method call:
//!
//! - filter setters re-fetch links when the value changed,
//! - `submit_draft` creates, then re-fetches links and types,
//! - `delete_link` deletes, then re-fetches links.
//!
//! Failures never escape: they are logged, turned into an error `Notice`,
//! and the collections keep their previous contents. Operations run to
//! completion on the caller's thread, so a controller never has two requests
//! in flight.

use std::cell::Cell;
use std::rc::Rc;

use crate::client::ResourceClient;
use crate::draft::{DraftSession, LinkDraft};
use crate::error::{ApiError, DraftError};
use crate::filter::FilterState;
use crate::http::Transport;
use crate::notify::{Notice, NotificationSink};
use crate::types::Link;

const FETCH_LINKS_FAILED: &str = "Failed to fetch links. Please try again.";
const FETCH_TYPES_FAILED: &str = "Failed to fetch resource types. Please try again.";
const CREATE_SUCCEEDED: &str = "Learning resource added successfully!";
const CREATE_FAILED: &str = "Failed to add learning resource. Please try again.";
const DELETE_SUCCEEDED: &str = "Learning resource deleted successfully!";
const DELETE_FAILED: &str = "Failed to delete learning resource. Please try again.";

/// Shared view of the controller's busy state.
///
/// Cloning yields another handle to the same flag, so a renderer (or a
/// transport) can watch the span of an operation while it runs.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Rc<Cell<bool>>);

impl LoadingFlag {
    pub fn is_busy(&self) -> bool {
        self.0.get()
    }

    fn enter(&self) -> BusyGuard {
        self.0.set(true);
        BusyGuard(self.clone())
    }
}

/// Returns the flag to idle when the operation ends, however it ends.
struct BusyGuard(LoadingFlag);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        (self.0).0.set(false);
    }
}

pub struct SyncController<T, N> {
    client: ResourceClient,
    transport: T,
    sink: N,
    filter: FilterState,
    draft: DraftSession,
    links: Vec<Link>,
    types: Vec<String>,
    loading: LoadingFlag,
}

impl<T: Transport, N: NotificationSink> SyncController<T, N> {
    pub fn new(client: ResourceClient, transport: T, sink: N) -> Self {
        Self {
            client,
            transport,
            sink,
            filter: FilterState::default(),
            draft: DraftSession::default(),
            links: Vec::new(),
            types: Vec::new(),
            loading: LoadingFlag::default(),
        }
    }

    /// Start from `filter` instead of the empty one. Nothing is fetched until
    /// `start` or a refresh.
    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn draft(&self) -> &DraftSession {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftSession {
        &mut self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_busy()
    }

    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// Initial load: links for the current filter, then the type catalog.
    /// Returns false if either fetch failed.
    pub fn start(&mut self) -> bool {
        tracing::debug!("starting sync");
        let links_ok = self.refresh_links();
        let types_ok = self.refresh_types();
        links_ok && types_ok
    }

    /// Returns false only when a triggered fetch failed.
    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        if !self.filter.set_search(search) {
            return true;
        }
        self.refresh_links()
    }

    /// Returns false only when a triggered fetch failed.
    pub fn select_type(&mut self, selected_type: impl Into<String>) -> bool {
        if !self.filter.select_type(selected_type) {
            return true;
        }
        self.refresh_links()
    }

    /// Returns false only when a triggered fetch failed.
    pub fn clear_type(&mut self) -> bool {
        if !self.filter.clear_type() {
            return true;
        }
        self.refresh_links()
    }

    pub fn refresh_links(&mut self) -> bool {
        let _busy = self.loading.enter();
        self.load_links()
    }

    /// Does not touch the busy flag.
    pub fn refresh_types(&mut self) -> bool {
        match self.fetch_types() {
            Ok(types) => {
                tracing::debug!(count = types.len(), "types refreshed");
                self.types = types;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch types");
                self.sink.notify(Notice::error(FETCH_TYPES_FAILED));
                false
            }
        }
    }

    /// Create a link from the current draft.
    ///
    /// Text fields are trimmed before validation and the trimmed values are
    /// what gets sent. A draft that fails validation is returned as `Err`
    /// without any request being made. Otherwise returns whether the create
    /// succeeded; on success links and types are re-fetched and the draft is
    /// reset and closed.
    pub fn submit_draft(&mut self) -> Result<bool, DraftError> {
        let payload = self.draft.draft().trimmed();
        payload.validate()?;

        let _busy = self.loading.enter();
        if let Err(e) = self.create(&payload) {
            tracing::error!(error = %e, "failed to create link");
            self.sink.notify(Notice::error(CREATE_FAILED));
            return Ok(false);
        }

        tracing::info!(title = %payload.title, "link created");
        self.sink.notify(Notice::success(CREATE_SUCCEEDED));
        self.load_links();
        self.refresh_types();
        self.draft.reset();
        Ok(true)
    }

    /// Delete `id`, then re-fetch links. The type catalog is left as is.
    pub fn delete_link(&mut self, id: i64) -> bool {
        let _busy = self.loading.enter();
        if let Err(e) = self.delete(id) {
            tracing::error!(error = %e, id, "failed to delete link");
            self.sink.notify(Notice::error(DELETE_FAILED));
            return false;
        }

        tracing::info!(id, "link deleted");
        self.sink.notify(Notice::success(DELETE_SUCCEEDED));
        self.load_links();
        true
    }

    fn load_links(&mut self) -> bool {
        match self.fetch_links() {
            Ok(links) => {
                tracing::debug!(count = links.len(), "links refreshed");
                self.links = links;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch links");
                self.sink.notify(Notice::error(FETCH_LINKS_FAILED));
                false
            }
        }
    }

    fn fetch_links(&self) -> Result<Vec<Link>, ApiError> {
        let request = self.client.build_list_links(&self.filter);
        let response = self.transport.execute(&request)?;
        self.client.parse_list_links(response)
    }

    fn fetch_types(&self) -> Result<Vec<String>, ApiError> {
        let request = self.client.build_list_types();
        let response = self.transport.execute(&request)?;
        self.client.parse_list_types(response)
    }

    fn create(&self, draft: &LinkDraft) -> Result<(), ApiError> {
        let request = self.client.build_create_link(draft)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_create_link(response)
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        let request = self.client.build_delete_link(id);
        let response = self.transport.execute(&request)?;
        self.client.parse_delete_link(response)
    }
}
