/// Log a formatted message at `DEBUG`.
///
/// ```ignore
/// jsonlog::debug!(logger, "User {} has {} points", "John", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at `FATAL` and exit the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::level::Level;
    use crate::logger::Logger;
    use crate::test::SharedBuffer;
    use serde_json::Value;

    #[test]
    fn test_macros_format_arguments() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(Level::DEBUG, buffer.clone());
        let name = "John";
        crate::debug!(logger, "User {} has {} points", name, 42);
        crate::info!(logger, "Ratio {:.3}", 2.0 / 3.0);
        crate::warn!(logger, "Inline {name}");
        crate::error!(&logger, "{:>5}|", 7);

        let messages = buffer
            .lines()
            .iter()
            .map(|line| {
                let value: Value = serde_json::from_str(line).expect("Invalid JSON line");
                value["message"].as_str().unwrap_or_default().to_string()
            })
            .collect::<Vec<String>>();
        assert_eq!(
            messages,
            vec!["User John has 42 points", "Ratio 0.667", "Inline John", "    7|"]
        );
    }
}
