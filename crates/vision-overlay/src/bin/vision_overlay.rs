//! Render a JSON detection request into overlay CSS and labels.
//!
//! Usage:
//!   vision-overlay request.json                 # report on stdout
//!   vision-overlay request.json -o report.json  # report to a file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};
use vision_overlay::{render, OverlayIoError, OverlayRequest};

/// Covers this binary, the facade and the core crate.
const LOG_TARGETS: &str = vision_overlay::core::DEFAULT_TARGET_PREFIX;

#[derive(Parser, Debug)]
#[command(name = "vision-overlay")]
#[command(author, version, about = "Render vision detections as percentage-positioned overlays", long_about = None)]
struct Args {
    /// Request JSON (image frame plus detections)
    request: PathBuf,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level on stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Skip per-landmark positioning
    #[arg(long)]
    no_landmarks: bool,

    /// Only emit left/top for regions
    #[arg(long)]
    no_size: bool,

    /// Exit with status 2 when any item failed to render
    #[arg(long)]
    strict: bool,

    /// Emit tracing spans as JSON (needs the `tracing` feature)
    #[arg(long)]
    trace_json: bool,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{}: {source}", path.display())]
    Request {
        path: PathBuf,
        #[source]
        source: OverlayIoError,
    },
    #[error(transparent)]
    Output(#[from] OverlayIoError),
    #[cfg(not(feature = "tracing"))]
    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),
}

fn init_logging(args: &Args) -> Result<(), CliError> {
    #[cfg(feature = "tracing")]
    {
        // the subscriber also installs the `log` bridge
        vision_overlay::core::init_tracing(args.log_level, LOG_TARGETS, args.trace_json);
    }
    #[cfg(not(feature = "tracing"))]
    {
        if args.trace_json {
            eprintln!("warning: built without the `tracing` feature, --trace-json ignored");
        }
        vision_overlay::core::init_for_targets(args.log_level, LOG_TARGETS)?;
    }
    Ok(())
}

/// Returns the number of items that failed to render.
fn run(args: &Args) -> Result<usize, CliError> {
    init_logging(args)?;

    let mut request = OverlayRequest::load_json(&args.request).map_err(|source| {
        CliError::Request {
            path: args.request.clone(),
            source,
        }
    })?;
    if args.no_landmarks {
        request.options.landmarks = false;
    }
    if args.no_size {
        request.options.include_size = false;
    }
    info!(
        "{}: {} faces, {} regions on {}x{}",
        args.request.display(),
        request.faces.len(),
        request.regions.len(),
        request.image.width,
        request.image.height
    );

    let report = render(&request);
    match &args.output {
        Some(path) => {
            report.write_json(path)?;
            info!("report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&report).map_err(OverlayIoError::from)?;
            println!("{json}");
        }
    }
    Ok(report.error_count())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(failed) if failed > 0 && args.strict => {
            eprintln!("error: {failed} item(s) could not be rendered");
            ExitCode::from(2)
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
