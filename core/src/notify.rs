//! User-visible success and error messages.
//!
//! The controller only produces `Notice` values; how they are displayed is
//! up to the host's `NotificationSink`.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: "Success".to_string(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Displays notices. Implementations must not fail; a notice that cannot be
/// shown is dropped.
pub trait NotificationSink {
    fn notify(&self, notice: Notice);
}

impl<S: NotificationSink + ?Sized> NotificationSink for &S {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Rc<S> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}

/// Keeps every notice in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn errors(&self) -> Vec<Notice> {
        self.notices.borrow().iter().filter(|n| n.is_error()).cloned().collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
