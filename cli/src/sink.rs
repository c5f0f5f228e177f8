use linkshelf_core::{Notice, NotificationSink};

/// Prints notices to stderr.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl TerminalSink {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for TerminalSink {
    fn notify(&self, notice: Notice) {
        eprintln!("{}: {}", notice.title, notice.description);
    }
}
