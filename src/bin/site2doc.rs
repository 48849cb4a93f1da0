//! CLI that compiles a cached HTML site into one Markdown document.
//!
//! Usage: `site2doc <cache-dir> [output-file]`
//!
//! Writes the document to the output file when given, otherwise to
//! stdout. A JSON build report goes to stderr either way. Log verbosity
//! follows `RUST_LOG` (default `info`).

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;
use site2doc::{build, build_to_file, BuildOptions, BuildResult};

#[derive(Serialize)]
struct Report<'a> {
    title: &'a str,
    page_count: usize,
    order_method: site2doc::order::OrderMethod,
    order_confidence: f64,
    total_text_length: usize,
    warnings: &'a [String],
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let (cache_dir, output) = match args.as_slice() {
        [cache] => (PathBuf::from(cache), None),
        [cache, output] => (PathBuf::from(cache), Some(PathBuf::from(output))),
        _ => {
            eprintln!("Usage: site2doc <cache-dir> [output-file]");
            return ExitCode::from(2);
        }
    };

    let options = BuildOptions::default();
    let result = match output {
        Some(path) => build_to_file(&cache_dir, &path, &options),
        None => build(&cache_dir, &options).inspect(|r| println!("{}", r.content)),
    };

    match result {
        Ok(result) => {
            print_report(&result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("site2doc: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so stdout stays clean for the document
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_report(result: &BuildResult) {
    let report = Report {
        title: &result.title,
        page_count: result.page_count,
        order_method: result.order_method,
        order_confidence: result.order_confidence.value(),
        total_text_length: result.statistics.total_text_length,
        warnings: &result.warnings,
    };
    eprintln!("{}", serde_json::to_string(&report).unwrap_or_default());
}
