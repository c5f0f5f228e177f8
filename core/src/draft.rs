//! Creation-form state: the draft being edited and whether its dialog is open.

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Unsaved input for a link that does not exist yet.
///
/// Serializes to the create payload `{title, overview, url, types}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkDraft {
    pub title: String,
    pub overview: String,
    pub url: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl LinkDraft {
    /// Add `tag` at the end if absent, remove it if present.
    pub fn toggle_type(&mut self, tag: &str) {
        match self.types.iter().position(|t| t == tag) {
            Some(index) => {
                self.types.remove(index);
            }
            None => self.types.push(tag.to_string()),
        }
    }

    /// Copy with surrounding whitespace stripped from the text fields. This is
    /// what gets validated and sent.
    pub fn trimmed(&self) -> LinkDraft {
        LinkDraft {
            title: self.title.trim().to_string(),
            overview: self.overview.trim().to_string(),
            url: self.url.trim().to_string(),
            types: self.types.clone(),
        }
    }

    /// Check the draft is submittable. A rejected draft must never reach the
    /// network.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingField("title"));
        }
        if self.overview.trim().is_empty() {
            return Err(DraftError::MissingField("overview"));
        }
        if self.url.trim().is_empty() {
            return Err(DraftError::MissingField("url"));
        }
        url::Url::parse(self.url.trim()).map_err(|e| DraftError::InvalidUrl(e.to_string()))?;
        if self.types.is_empty() {
            return Err(DraftError::NoTypes);
        }
        Ok(())
    }
}

/// The creation dialog: open flag plus the draft it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSession {
    open: bool,
    draft: LinkDraft,
}

impl DraftSession {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &LinkDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut LinkDraft {
        &mut self.draft
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Discard the input and close the dialog.
    pub fn cancel(&mut self) {
        self.reset();
    }

    pub(crate) fn reset(&mut self) {
        self.open = false;
        self.draft = LinkDraft::default();
    }
}
