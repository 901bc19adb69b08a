//! Stderr logger for the CLI and examples.
//!
//! Lines look like `[  0.004s DEBUG vision_overlay_core::geometry] message`.
//! Records from other crates are only shown at `Warn` and above.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

/// Target prefix shared by every crate in this workspace.
pub const DEFAULT_TARGET_PREFIX: &str = "vision_overlay";

struct OverlayLogger {
    level: LevelFilter,
    own_prefix: &'static str,
    started: Instant,
}

impl OverlayLogger {
    fn allows(&self, level: Level, target: &str) -> bool {
        if target.starts_with(self.own_prefix) {
            level <= self.level
        } else {
            level <= Level::Warn && level <= self.level
        }
    }
}

impl Log for OverlayLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.allows(metadata.level(), metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{:7.3}s {:>5} {}] {}",
            elapsed,
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<OverlayLogger> = OnceLock::new();

/// Install the stderr logger for targets under [`DEFAULT_TARGET_PREFIX`].
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    init_for_targets(level, DEFAULT_TARGET_PREFIX)
}

/// Install the stderr logger, showing `level` for targets starting with
/// `own_prefix` and at most `Warn` for everything else.
///
/// The first call wins; later calls leave the installed logger alone.
pub fn init_for_targets(
    level: LevelFilter,
    own_prefix: &'static str,
) -> Result<(), log::SetLoggerError> {
    let mut installed_here = false;
    let logger = LOGGER.get_or_init(|| {
        installed_here = true;
        OverlayLogger {
            level,
            own_prefix,
            started: Instant::now(),
        }
    });
    if installed_here {
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// `EnvFilter` directive equivalent to the stderr logger's filtering.
#[cfg(feature = "tracing")]
fn tracing_directive(level: LevelFilter, own_prefix: &str) -> String {
    let own = level.as_str().to_ascii_lowercase();
    let other = level.min(LevelFilter::Warn).as_str().to_ascii_lowercase();
    format!("{other},{own_prefix}={own}")
}

/// Install a `tracing` subscriber on stderr.
///
/// `RUST_LOG` overrides the filter; without it the same per-target levels
/// as [`init_for_targets`] apply. Spans are reported when they close.
#[cfg(feature = "tracing")]
pub fn init_tracing(level: LevelFilter, own_prefix: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing_directive(level, own_prefix)));
    let builder = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let installed = if json {
        builder.json().flatten_event(true).finish().try_init()
    } else {
        builder
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init()
    };
    if installed.is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_targets_are_capped_at_warn() {
        let logger = OverlayLogger {
            level: LevelFilter::Trace,
            own_prefix: DEFAULT_TARGET_PREFIX,
            started: Instant::now(),
        };
        assert!(logger.allows(Level::Debug, "vision_overlay_core::geometry"));
        assert!(logger.allows(Level::Warn, "serde_json"));
        assert!(!logger.allows(Level::Debug, "serde_json"));
    }

    #[test]
    fn own_targets_follow_level() {
        let logger = OverlayLogger {
            level: LevelFilter::Info,
            own_prefix: DEFAULT_TARGET_PREFIX,
            started: Instant::now(),
        };
        assert!(logger.allows(Level::Info, "vision_overlay::io"));
        assert!(!logger.allows(Level::Debug, "vision_overlay::io"));
    }

    #[test]
    fn custom_prefix_decides_what_is_own() {
        let logger = OverlayLogger {
            level: LevelFilter::Debug,
            own_prefix: "overlay_cli",
            started: Instant::now(),
        };
        assert!(logger.allows(Level::Debug, "overlay_cli::render"));
        assert!(!logger.allows(Level::Debug, "vision_overlay_core::css"));
        assert!(logger.allows(Level::Warn, "vision_overlay_core::css"));
    }

    #[test]
    fn quiet_level_also_quiets_foreign_targets() {
        let logger = OverlayLogger {
            level: LevelFilter::Error,
            own_prefix: DEFAULT_TARGET_PREFIX,
            started: Instant::now(),
        };
        assert!(!logger.allows(Level::Warn, "serde_json"));
        assert!(logger.allows(Level::Error, "serde_json"));
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn tracing_directive_mirrors_logger_levels() {
        assert_eq!(
            tracing_directive(LevelFilter::Debug, DEFAULT_TARGET_PREFIX),
            "warn,vision_overlay=debug"
        );
        assert_eq!(
            tracing_directive(LevelFilter::Error, DEFAULT_TARGET_PREFIX),
            "error,vision_overlay=error"
        );
        assert_eq!(
            tracing_directive(LevelFilter::Off, "overlay_cli"),
            "off,overlay_cli=off"
        );
    }
}
