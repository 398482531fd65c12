use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Levels are plain ordinals so the threshold check is a numeric comparison.
/// Ordinals outside the five named levels are accepted everywhere and are
/// printed as `UNKNOWN`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    pub const DEBUG: Level = Level(0);
    pub const INFO: Level = Level(1);
    pub const WARN: Level = Level(2);
    pub const ERROR: Level = Level(3);
    pub const FATAL: Level = Level(4);

    pub const ALL: [Level; 5] = [
        Level::DEBUG,
        Level::INFO,
        Level::WARN,
        Level::ERROR,
        Level::FATAL,
    ];

    pub const fn from_ordinal(ordinal: u8) -> Self {
        Self(ordinal)
    }

    pub const fn ordinal(self) -> u8 {
        self.0
    }

    /// Name written to the `level` field of a record.
    pub fn name(self) -> &'static str {
        match self {
            Level::DEBUG => "DEBUG",
            Level::INFO => "INFO",
            Level::WARN => "WARN",
            Level::ERROR => "ERROR",
            Level::FATAL => "FATAL",
            _ => "UNKNOWN",
        }
    }

    /// Look up a level by its exact upper case name.
    ///
    /// Anything that is not one of the five names falls back to `DEBUG`, so
    /// a misconfigured threshold logs everything instead of failing. Use
    /// [`str::parse`] when an unknown name should be an error.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Level::DEBUG)
    }

    /// Closest `log` crate filter, used when installed as the `log` backend.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Level::DEBUG => log::LevelFilter::Trace,
            Level::INFO => log::LevelFilter::Info,
            Level::WARN => log::LevelFilter::Warn,
            Level::ERROR | Level::FATAL => log::LevelFilter::Error,
            _ => log::LevelFilter::Off,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("Unknown log level `{0}`. Expected one of DEBUG, INFO, WARN, ERROR or FATAL.")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "DEBUG" => Ok(Level::DEBUG),
            "INFO" => Ok(Level::INFO),
            "WARN" => Ok(Level::WARN),
            "ERROR" => Ok(Level::ERROR),
            "FATAL" => Ok(Level::FATAL),
            _ => Err(ParseLevelError(name.to_string())),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Level::DEBUG,
            log::Level::Info => Level::INFO,
            log::Level::Warn => Level::WARN,
            log::Level::Error => Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Level, ParseLevelError};

    #[test]
    fn test_ordering() {
        assert!(Level::DEBUG < Level::INFO);
        assert!(Level::INFO < Level::WARN);
        assert!(Level::WARN < Level::ERROR);
        assert!(Level::ERROR < Level::FATAL);
        assert!(Level::FATAL < Level::from_ordinal(5));

        let ordinals = Level::ALL.iter().map(|l| l.ordinal()).collect::<Vec<u8>>();
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_default_is_debug() {
        assert_eq!(Level::default(), Level::DEBUG);
    }

    #[test]
    fn test_name() {
        assert_eq!(Level::DEBUG.name(), "DEBUG");
        assert_eq!(Level::INFO.name(), "INFO");
        assert_eq!(Level::WARN.name(), "WARN");
        assert_eq!(Level::ERROR.name(), "ERROR");
        assert_eq!(Level::FATAL.name(), "FATAL");
        assert_eq!(Level::from_ordinal(5).name(), "UNKNOWN");
        assert_eq!(Level::from_ordinal(255).name(), "UNKNOWN");
        assert_eq!(Level::WARN.to_string(), "WARN");
    }

    #[test]
    fn test_from_name_round_trip() {
        for name in ["DEBUG", "INFO", "WARN", "ERROR", "FATAL"] {
            assert_eq!(Level::from_name(name).name(), name);
        }
    }

    #[test]
    fn test_from_name_unknown_defaults_to_debug() {
        let debug = Level::from_name("DEBUG");
        for name in ["", "info", "Warn", "ERR", "TRACE", " INFO", "UNKNOWN"] {
            assert_eq!(Level::from_name(name), debug, "`{}` did not default", name);
        }
    }

    #[test]
    fn test_parse_is_strict() {
        assert_eq!("ERROR".parse::<Level>(), Ok(Level::ERROR));
        assert_eq!(
            "error".parse::<Level>(),
            Err(ParseLevelError("error".to_string()))
        );
        assert_eq!(
            ParseLevelError("x".to_string()).to_string(),
            "Unknown log level `x`. Expected one of DEBUG, INFO, WARN, ERROR or FATAL."
        );
    }

    #[test]
    fn test_log_crate_mapping() {
        assert_eq!(Level::from(log::Level::Trace), Level::DEBUG);
        assert_eq!(Level::from(log::Level::Debug), Level::DEBUG);
        assert_eq!(Level::from(log::Level::Info), Level::INFO);
        assert_eq!(Level::from(log::Level::Warn), Level::WARN);
        assert_eq!(Level::from(log::Level::Error), Level::ERROR);

        assert_eq!(Level::DEBUG.to_level_filter(), log::LevelFilter::Trace);
        assert_eq!(Level::WARN.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(Level::FATAL.to_level_filter(), log::LevelFilter::Error);
        assert_eq!(
            Level::from_ordinal(9).to_level_filter(),
            log::LevelFilter::Off
        );
    }
}
