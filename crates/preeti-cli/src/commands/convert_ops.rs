use std::fs;
use std::io::{self, Read, Write};
use std::process;

use preeti_core::audit::residual_legacy;
use preeti_core::convert::explain;
use preeti_core::{convert_with, Direction, PreetiTables};

use super::CliError;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Where the text to convert comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    Text(&'a str),
    File(&'a str),
    Stdin,
}

impl<'a> Source<'a> {
    /// Inline text wins over `--input`; neither means stdin.
    pub fn from_args(text: Option<&'a str>, input: Option<&'a str>) -> Self {
        match (text, input) {
            (Some(text), _) => Source::Text(text),
            (None, Some(path)) => Source::File(path),
            (None, None) => Source::Stdin,
        }
    }

    pub fn read(&self) -> Result<String, CliError> {
        match *self {
            Source::Text(text) => Ok(text.to_string()),
            Source::File(path) => fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.to_string(),
                source,
            }),
            Source::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|source| CliError::Io {
                        path: "<stdin>".to_string(),
                        source,
                    })?;
                Ok(buf)
            }
        }
    }
}

/// Write to `output`, or to stdout with a trailing newline ensured.
pub fn write_output(output: Option<&str>, content: &str) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, content).map_err(|source| CliError::Io {
            path: path.to_string(),
            source,
        }),
        None => {
            let write = || -> io::Result<()> {
                let mut stdout = io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                if !content.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()
            };
            write().map_err(|source| CliError::Io {
                path: "<stdout>".to_string(),
                source,
            })
        }
    }
}

pub struct ConvertOptions<'a> {
    pub output: Option<&'a str>,
    /// Fail when Preeti keys are left in Unicode output.
    pub strict: bool,
}

/// Format unconverted keys, one per line. Empty when the text is clean.
pub fn residual_report(converted: &str) -> Vec<String> {
    residual_legacy(converted)
        .iter()
        .map(|r| format!("unconverted key {:?} at {}", r.token, r.position))
        .collect()
}

pub fn convert_cmd(direction: Direction, source: Source<'_>, opts: &ConvertOptions<'_>) {
    let text = die!(source.read(), "Error reading input: {}");
    let converted = convert_with(PreetiTables::global(), direction, &text);
    die!(
        write_output(opts.output, &converted),
        "Error writing output: {}"
    );

    if opts.strict && direction == Direction::PreetiToUnicode {
        let report = residual_report(&converted);
        if !report.is_empty() {
            for line in &report {
                eprintln!("{line}");
            }
            eprintln!("{} unconverted key(s)", report.len());
            process::exit(1);
        }
    }
}

pub fn explain_cmd(direction: Direction, text: &str, json: bool) {
    let result = explain::explain(PreetiTables::global(), direction, text);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).expect("JSON serialization failed")
        );
    } else {
        print!("{}", explain::format_text(&result));
    }
}
