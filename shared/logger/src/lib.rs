//! Logging setup shared by every crate in the workspace.
//!
//! Code logs through the `tracing` macros; this crate installs the subscriber
//! that filters by [`LogLevel`], stamps local time and hands formatted lines to
//! a dedicated writer thread so the UI thread never blocks on file I/O.

pub mod error;
mod event_format;
mod log_level;
mod log_writer;
mod logger;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use log_writer::FileMakeWriter;
pub use logger::{LogSettings, init};
