//! cqldoc CLI - Print the documented schema of a CQL script as JSON

use std::fs;
use std::io::{self, Read};
use std::ops::Range;
use std::path::PathBuf;

use clap::Parser;
use ariadne::{Color, Label, Report, ReportKind, Source};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cqldoc_schema::{parse, Error, Schema};

#[derive(Parser)]
#[command(name = "cqldoc")]
#[command(about = "Extract tables, columns and their comments from CQL schema scripts", long_about = None)]
struct Cli {
    /// Input file; standard input is read when omitted or `-`
    file: Option<PathBuf>,
    /// Print the JSON on a single line
    #[arg(long)]
    compact: bool,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let (name, source) = match read_input(cli.file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: failed to read input: {}", e);
            std::process::exit(1);
        }
    };
    debug!(input = %name, bytes = source.len(), "read input");

    let schema = match parse(&source) {
        Ok(schema) => schema,
        Err(e) => {
            report_error(&source, &name, &e);
            std::process::exit(1);
        }
    };

    match render(&schema, cli.compact) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: failed to serialize schema: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Input name for diagnostics and its full text
fn read_input(file: Option<&PathBuf>) -> io::Result<(String, String)> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            let source = fs::read_to_string(path)?;
            Ok((path.display().to_string(), source))
        }
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(("<stdin>".to_string(), source))
        }
    }
}

/// JSON with four-space indentation, or a single line when `compact`
fn render(schema: &Schema, compact: bool) -> serde_json::Result<String> {
    if compact {
        return schema.to_json(false);
    }
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    schema.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn report_error(source: &str, name: &str, error: &Error) {
    let Some(span) = error.span() else {
        eprintln!("error: {}", error);
        return;
    };
    let range: Range<usize> = span.into();
    let result = Report::build(ReportKind::Error, name.to_string(), range.start)
        .with_message(error.to_string())
        .with_label(
            Label::new((name.to_string(), range))
                .with_message(error.to_string())
                .with_color(Color::Red),
        )
        .finish()
        .eprint((name.to_string(), Source::from(source)));
    if result.is_err() {
        eprintln!("error: {}", error);
    }
}
