use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Custom logger structure
#[derive(Debug)]
struct RoverLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl RoverLogger {
    fn new(level: LevelFilter, debug_filter: Option<&str>) -> Self {
        let debug_filters = debug_filter.map(|filter_str| {
            filter_str
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<HashSet<String>>()
        });
        RoverLogger {
            level,
            debug_filters,
        }
    }
}

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1B[31m", // Red
        Level::Warn => "\x1B[33m",  // Yellow
        Level::Info => "\x1B[32m",  // Green
        Level::Debug => "\x1B[36m", // Cyan
        Level::Trace => "\x1B[35m", // Magenta
    }
}

impl log::Log for RoverLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Debug filters only narrow debug/trace records
        match &self.debug_filters {
            Some(filters) if metadata.level() >= Level::Debug => {
                filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f.as_str()))
            }
            _ => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let mut output = format!(
            "{timestamp} {color}{level:5}{reset} {target}: {message}",
            color = level_color(record.level()),
            level = record.level(),
            target = record.target(),
            message = record.args()
        );

        // Add module path if available and different from target
        if let Some(module_path) = record.module_path() {
            if module_path != record.target() {
                output.push_str(&format!(" [{}]", module_path));
            }
        }

        let mut stdout = io::stdout().lock();
        // Nowhere to report a failed log write
        let _ = writeln!(stdout, "{}", output);
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<RoverLogger> = OnceLock::new();

/// Parses a level name; unknown names fall back to Info.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Installs the global logger. When `RUST_LOG` is set, env_logger takes over and
/// `level`/`debug_filter` are ignored.
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    if std::env::var_os("RUST_LOG").is_some() {
        return env_logger::try_init();
    }

    let logger = LOGGER.get_or_init(|| RoverLogger::new(level, debug_filter.as_deref()));
    log::set_logger(logger).map(|()| log::set_max_level(logger.level))
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_drive {
    ($step:expr, $($arg:tt)*) => {
        log::debug!(target: "drive", "[S{:03}] {}", $step, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_planet {
    ($($arg:tt)*) => {
        log::debug!(target: "planet", "{}", format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn metadata(level: Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("OFF"), LevelFilter::Off);
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("Trace"), LevelFilter::Trace);
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
    }

    #[test]
    fn test_level_threshold() {
        let logger = RoverLogger::new(LevelFilter::Info, None);
        assert!(logger.enabled(&metadata(Level::Error, "drive")));
        assert!(logger.enabled(&metadata(Level::Info, "planet")));
        assert!(!logger.enabled(&metadata(Level::Debug, "drive")));
    }

    #[test]
    fn test_debug_filters_narrow_debug_records_only() {
        let logger = RoverLogger::new(LevelFilter::Trace, Some("drive, "));
        assert!(logger.enabled(&metadata(Level::Debug, "drive")));
        assert!(logger.enabled(&metadata(Level::Trace, "drive::step")));
        assert!(!logger.enabled(&metadata(Level::Debug, "planet")));
        // Info and above pass regardless of topic
        assert!(logger.enabled(&metadata(Level::Info, "planet")));
    }
}
