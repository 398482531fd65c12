use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::io::Write;
use std::process;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::entry::Entry;
use crate::error::LogError;
use crate::fallback::Fallback;
use crate::level::Level;

const FATAL_EXIT_CODE: i32 = 1;

// Field order is the order of the JSON keys.
#[derive(Serialize)]
struct Record<'a, M: ?Sized> {
    level: &'static str,
    #[serde(serialize_with = "serialize_timestamp")]
    timestamp: DateTime<Utc>,
    message: &'a M,
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Micros, true))
}

/// Writes one JSON object per accepted log call to a single sink.
///
/// ```text
/// {"level":"INFO","timestamp":"2023-10-15T14:30:45.123456Z","message":"Started"}
/// ```
///
/// The logger never returns errors from its logging methods. Serialization
/// and write failures are reported on the [`Fallback`] channel and the record
/// is dropped.
pub struct Logger<W> {
    threshold: AtomicU8,
    sink: Mutex<W>,
    fallback: Mutex<Fallback>,
}

impl<W: Write> Logger<W> {
    /// Create a logger that reports its own failures on standard error.
    pub fn new(threshold: Level, sink: W) -> Self {
        Self::with_fallback(threshold, sink, Fallback::stderr())
    }

    pub fn with_fallback(threshold: Level, sink: W, fallback: Fallback) -> Self {
        Self {
            threshold: AtomicU8::new(threshold.ordinal()),
            sink: Mutex::new(sink),
            fallback: Mutex::new(fallback),
        }
    }

    pub fn level(&self) -> Level {
        Level::from_ordinal(self.threshold.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Level) {
        self.threshold.store(level.ordinal(), Ordering::Relaxed);
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit_formatted(Level::DEBUG, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit_formatted(Level::INFO, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.emit_formatted(Level::WARN, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit_formatted(Level::ERROR, args);
    }

    /// Log at `FATAL` and exit the process with a non-zero status once the
    /// record is written and the sink flushed.
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit_formatted(Level::FATAL, args);
        self.terminate()
    }

    /// Start a log call for a structured message. The level is picked by the
    /// method called on the returned [`Entry`].
    ///
    /// ```ignore
    /// logger.entry(json!({"id": 123, "name": "John"})).info();
    /// ```
    pub fn entry<M: Serialize>(&self, message: M) -> Entry<'_, W, M> {
        Entry::new(self, message)
    }

    /// Write `message` at `level` unless it is below the threshold.
    pub fn emit<M: Serialize + ?Sized>(&self, level: Level, message: &M) {
        if let Err(error) = self.try_emit(level, message) {
            self.report(&error);
        }
    }

    /// Same as [`Logger::emit`], returning whether the record was written.
    pub(crate) fn try_emit<M: Serialize + ?Sized>(
        &self,
        level: Level,
        message: &M,
    ) -> Result<bool, LogError> {
        if !self.is_enabled(level) {
            return Ok(false);
        }

        // Held from timestamp to newline so records stay whole and in order.
        let mut sink = self.sink.lock();
        let record = Record {
            level: level.name(),
            timestamp: Utc::now(),
            message,
        };
        let payload = serde_json::to_vec(&record).map_err(LogError::Serialization)?;
        sink.write_all(&payload).map_err(LogError::Write)?;
        sink.write_all(b"\n").map_err(LogError::Newline)?;
        Ok(true)
    }

    pub fn flush(&self) {
        let result = self.sink.lock().flush();
        if let Err(error) = result {
            self.report(&LogError::Flush(error));
        }
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    pub(crate) fn terminate(&self) -> ! {
        self.flush();
        process::exit(FATAL_EXIT_CODE)
    }

    fn emit_formatted(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.emit(level, &fmt::format(args));
        }
    }

    fn report(&self, error: &LogError) {
        self.fallback.lock().report(error);
    }
}

impl<W: Write + Send> log::Log for Logger<W> {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let level: Level = record.level().into();
        if !self.is_enabled(level) {
            return;
        }
        self.emit(level, &record.args().to_string());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}
