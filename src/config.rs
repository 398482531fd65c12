use clap::{AppSettings, Parser};
use std::path::PathBuf;
use termcolor::ColorChoice;

use jsonlog::Level;

#[derive(Parser, Debug)]
#[clap(
    name = "jsonlog",
    version,
    long_version = long_version_output(),
    verbatim_doc_comment,
    setting(AppSettings::DeriveDisplayOrder)
)]
/**
Write every line read from STDIN as a JSON log record.

## Usage examples

    some-command | jsonlog
      Log each output line at INFO to STDOUT.

    some-command | jsonlog --severity WARN --level ERROR
      Drop all lines, WARN is below the ERROR threshold.

    some-command | jsonlog --json --output app.log
      Log lines containing JSON as structured messages, appending to app.log.

    echo "Out of memory" | jsonlog --severity FATAL
      Log the line and exit with status 1.

## Environment

    JSONLOG_LEVEL sets the default threshold. Unknown level names fall back
    to DEBUG.
*/
pub struct Options {
    /// Threshold below which lines are dropped
    #[clap(
        long,
        env = "JSONLOG_LEVEL",
        default_value = "DEBUG",
        value_name = "LEVEL",
        help_heading = "FILTERING"
    )]
    pub level: String,

    /// Level of every logged line: DEBUG, INFO, WARN, ERROR or FATAL
    #[clap(
        long,
        default_value = "INFO",
        value_name = "LEVEL",
        help_heading = "FILTERING"
    )]
    pub severity: Level,

    /// Log lines that parse as JSON as structured messages
    #[clap(long, help_heading = "INPUT")]
    pub json: bool,

    /// Append records to this file instead of STDOUT
    #[clap(long, parse(from_os_str), value_name = "PATH", help_heading = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Enable color for diagnostics on STDERR
    #[clap(long = "color", help_heading = "OUTPUT")]
    pub color: bool,

    /// Disable color for diagnostics on STDERR
    #[clap(long = "no-color", help_heading = "OUTPUT")]
    pub no_color: bool,
}

impl Options {
    pub fn threshold(&self) -> Level {
        Level::from_name(&self.level)
    }

    pub fn color_choice(&self) -> ColorChoice {
        if self.no_color {
            return ColorChoice::Never;
        }
        if self.color {
            return ColorChoice::Always;
        }
        ColorChoice::Auto
    }
}

// Print the long version label including the target and profile it was built for
fn long_version_output() -> &'static str {
    concat!(
        clap::crate_version!(),
        "\ntarget: ",
        env!("JSONLOG_BUILD_TARGET_TRIPLE"),
        "\nprofile: ",
        env!("JSONLOG_BUILD_PROFILE")
    )
}

#[cfg(test)]
mod tests {
    use super::Options;
    use clap::Parser;
    use jsonlog::Level;
    use termcolor::ColorChoice;

    #[test]
    fn defaults() {
        let opts = Options::parse_from(["jsonlog"]);
        assert_eq!(opts.severity, Level::INFO);
        assert!(!opts.json);
        assert_eq!(opts.output, None);
        assert_eq!(opts.color_choice(), ColorChoice::Auto);
    }

    #[test]
    fn threshold_is_permissive() {
        let opts = Options::parse_from(["jsonlog", "--level", "WARN"]);
        assert_eq!(opts.threshold(), Level::WARN);

        let opts = Options::parse_from(["jsonlog", "--level", "warn"]);
        assert_eq!(opts.threshold(), Level::DEBUG);
    }

    #[test]
    fn severity_is_strict() {
        let opts = Options::parse_from(["jsonlog", "--severity", "ERROR"]);
        assert_eq!(opts.severity, Level::ERROR);

        let result = Options::try_parse_from(["jsonlog", "--severity", "error"]);
        assert!(result.is_err());
    }

    #[test]
    fn color_flags() {
        // Both color flags set, but --no-color is leading
        let opts = Options::parse_from(["jsonlog", "--color", "--no-color"]);
        assert_eq!(opts.color_choice(), ColorChoice::Never);

        let opts = Options::parse_from(["jsonlog", "--color"]);
        assert_eq!(opts.color_choice(), ColorChoice::Always);
    }
}
