use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Custom logger structure
#[derive(Debug)]
struct BotSimLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl BotSimLogger {
    fn new(level: LevelFilter, debug_filter: Option<&str>) -> Self {
        let debug_filters = debug_filter.map(|filter_str| {
            filter_str
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<HashSet<String>>()
        });
        BotSimLogger {
            level,
            debug_filters,
        }
    }

    fn format_record(&self, record: &Record) -> String {
        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        format!(
            "{timestamp} {level_color}{level:5}{reset} {target}: {message}",
            timestamp = timestamp,
            level_color = level_color,
            level = record.level(),
            reset = reset,
            target = record.target(),
            message = record.args()
        )
    }
}

impl log::Log for BotSimLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Debug topics are opt-in once a filter is given
        if let Some(filters) = &self.debug_filters {
            if metadata.level() >= log::Level::Debug {
                return filters.iter().any(|f| metadata.target().starts_with(f.as_str()));
            }
        }
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let output = self.format_record(record);
            let mut stdout = io::stdout().lock();
            // A closed stdout is not worth crashing the simulation over
            let _ = writeln!(stdout, "{}", output);
            let _ = stdout.flush();
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<BotSimLogger> = OnceLock::new();

/// Installs the simulator logger, with optional comma-separated debug topics.
pub fn init_logger(level: LevelFilter, debug_filter: Option<&str>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| BotSimLogger::new(level, debug_filter));
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Parses a `--log-level` value, falling back to `Info` for unknown names.
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

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_turn {
    ($($arg:tt)*) => {
        log::debug!(target: "turn", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_drive {
    ($($arg:tt)*) => {
        log::debug!(target: "drive", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_input {
    ($($arg:tt)*) => {
        log::debug!(target: "input", "{}", format_args!($($arg)*))
    };
}
