use serde::Serialize;
use std::io::Write;

use crate::level::Level;
use crate::logger::Logger;

/// A structured message waiting for its level.
///
/// Created by [`Logger::entry`]. Every level method consumes the entry, so a
/// message is written at most once.
#[must_use = "an entry is not logged until a level method is called"]
pub struct Entry<'a, W, M> {
    logger: &'a Logger<W>,
    message: M,
}

impl<'a, W: Write, M: Serialize> Entry<'a, W, M> {
    pub(crate) fn new(logger: &'a Logger<W>, message: M) -> Self {
        Self { logger, message }
    }

    pub fn message(&self) -> &M {
        &self.message
    }

    /// Log at any level, including ones without a name. Never exits.
    pub fn at(self, level: Level) {
        self.logger.emit(level, &self.message);
    }

    pub fn debug(self) {
        self.at(Level::DEBUG);
    }

    pub fn info(self) {
        self.at(Level::INFO);
    }

    pub fn warn(self) {
        self.at(Level::WARN);
    }

    pub fn error(self) {
        self.at(Level::ERROR);
    }

    /// Log at `FATAL`, then exit the process with a non-zero status.
    pub fn fatal(self) -> ! {
        let logger = self.logger;
        self.at(Level::FATAL);
        logger.terminate()
    }
}
