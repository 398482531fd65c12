//! Leveled JSON-lines logging to a single synchronous sink.
//!
//! Every accepted call writes one line:
//!
//! ```text
//! {"level":"WARN","timestamp":"2023-10-15T14:30:45.123456Z","message":"Disk at 91%"}
//! ```
//!
//! Messages are either formatted strings ([`Logger::warn`], [`warn!`]) or any
//! `serde::Serialize` value passed through [`Logger::entry`], which is written
//! as native JSON.

mod entry;
mod error;
mod fallback;
mod level;
mod logger;
mod macros;


use std::io::Write;

pub use entry::Entry;
pub use error::LogError;
pub use fallback::Fallback;
pub use level::{Level, ParseLevelError};
pub use logger::Logger;

/// Install a new logger as the `log` crate backend.
///
/// The `log` max level is derived from `threshold`. Fails when a backend is
/// already installed.
pub fn init<W: Write + Send + 'static>(
    threshold: Level,
    sink: W,
) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(Logger::new(threshold, sink)))
        .map(|()| log::set_max_level(threshold.to_level_filter()))
}
