use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::LogError;

fn red_color() -> ColorSpec {
    let mut cs = ColorSpec::new();
    cs.set_fg(Some(Color::Red));
    cs.set_bold(true);
    cs
}

/// Diagnostic output for failures of the logger itself.
///
/// Reports are never filtered by the logger threshold and the channel's own
/// write errors are dropped: there is nowhere left to report them.
pub struct Fallback {
    out: Box<dyn WriteColor + Send>,
}

impl Fallback {
    pub fn new(out: impl WriteColor + Send + 'static) -> Self {
        Self { out: Box::new(out) }
    }

    /// Standard error, colored when it is a terminal.
    pub fn stderr() -> Self {
        Self::stderr_with(ColorChoice::Auto)
    }

    /// Standard error with an explicit color choice. `Auto` only colors
    /// output when standard error is a terminal.
    pub fn stderr_with(choice: ColorChoice) -> Self {
        let choice = match choice {
            ColorChoice::Auto if !io::stderr().is_terminal() => ColorChoice::Never,
            choice => choice,
        };
        Self::new(StandardStream::stderr(choice))
    }

    pub fn report(&mut self, error: &LogError) {
        let _ = self.write_report(error);
    }

    fn write_report(&mut self, error: &LogError) -> io::Result<()> {
        self.out.set_color(&red_color())?;
        write!(self.out, "ERROR")?;
        self.out.reset()?;
        writeln!(self.out, ": {}", error)?;
        self.out.flush()
    }
}
