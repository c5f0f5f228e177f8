//! Terminal front-end for linkshelf.
//!
//! Supplies the host side of the core: a ureq `Transport`, a stderr
//! `NotificationSink`, and clap subcommands that drive `SyncController`.

pub mod commands;
pub mod handlers;
pub mod sink;
pub mod transport;

pub use commands::{Cli, Commands};
pub use handlers::{handle_add, handle_delete, handle_list, handle_types, Context};
