use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use jsonlog::{Fallback, Level, Logger};

mod config;

use config::Options;

fn main() {
    let options = Options::parse();
    let sink = match open_sink(options.output.as_deref()) {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("ERROR: Unable to open log output: {}", e);
            std::process::exit(1)
        }
    };
    let fallback = Fallback::stderr_with(options.color_choice());
    let logger = Logger::with_fallback(options.threshold(), sink, fallback);

    let stdin = io::stdin();
    let result = log_lines(&logger, stdin.lock(), options.severity, options.json);
    logger.flush();
    if let Err(e) = result {
        eprintln!("ERROR: Unable to read STDIN: {}", e);
        std::process::exit(1)
    }
}

// Invalid UTF-8 is replaced rather than ending the run, so every line is logged.
fn log_lines<W: Write>(
    logger: &Logger<W>,
    mut input: impl BufRead,
    severity: Level,
    json: bool,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(strip_line_ending(&buf)).into_owned();
        if line.trim().is_empty() {
            continue;
        }
        if json {
            match serde_json::from_str::<Value>(&line) {
                Ok(value) => log_line(logger, severity, value),
                // Not JSON, keep the line as text
                Err(_) => log_line(logger, severity, line),
            }
        } else {
            log_line(logger, severity, line);
        }
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn open_sink(path: Option<&Path>) -> io::Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

fn log_line<W: Write, M: Serialize>(logger: &Logger<W>, severity: Level, message: M) {
    let entry = logger.entry(message);
    if severity == Level::FATAL {
        entry.fatal()
    } else {
        entry.at(severity)
    }
}
