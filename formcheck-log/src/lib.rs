//! formcheck logging
//!
//! Lightweight leveled logging for the formcheck crates, configured
//! entirely from the environment.
//!
//! # Usage
//!
//! ```rust
//! use formcheck_log::{debug, info, warn};
//!
//! info!("validating {} fields", 3);
//! debug!(target: "formcheck::rules", "field {} rejected", "email");
//! warn!("form payload had unknown field");
//! ```
//!
//! # Environment Variables
//!
//! - `FORMCHECK_DEBUG=1` - Enable debug logging
//! - `FORMCHECK_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `FORMCHECK_LOG_FORMAT=pretty|compact|json|facade` - Set output format
//! - `FORMCHECK_LOG_TIMESTAMPS=1|0` - Include timestamps
//! - `FORMCHECK_LOG_MODULE=1|0` - Include the log target

use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

// ============================================================================
// Levels and formats
// ============================================================================

/// Log level, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    /// No logging at all
    Off = 5,
}

impl Level {
    /// Upper-case level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    /// Matching `log` crate level; `None` for [`Level::Off`].
    pub fn to_log(self) -> Option<log::Level> {
        match self {
            Level::Trace => Some(log::Level::Trace),
            Level::Debug => Some(log::Level::Debug),
            Level::Info => Some(log::Level::Info),
            Level::Warn => Some(log::Level::Warn),
            Level::Error => Some(log::Level::Error),
            Level::Off => None,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }
}

impl FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "off" | "none" => Ok(Level::Off),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human readable, one line per record
    Pretty,
    /// Short single-letter level prefix
    Compact,
    /// One JSON object per line
    Json,
    /// Hand records to whatever `log` implementation the host installed
    Facade,
}

impl FromStr for Format {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Format::Pretty),
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            "facade" | "log" => Ok(Format::Facade),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

/// Logging configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub debug: bool,
    pub level: Level,
    pub format: Format,
    pub timestamps: bool,
    /// Include the log target in each line
    pub module_path: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            timestamps: true,
            module_path: true,
        }
    }
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

impl LogConfig {
    /// Build the config from `FORMCHECK_*` variables and publish the
    /// level and debug flag to the global atomics.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let debug = env_flag("FORMCHECK_DEBUG").unwrap_or(defaults.debug);

        let level = env::var("FORMCHECK_LOG_LEVEL")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { defaults.level });

        let format = env::var("FORMCHECK_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.format);

        let config = Self {
            debug,
            level,
            format,
            timestamps: env_flag("FORMCHECK_LOG_TIMESTAMPS").unwrap_or(defaults.timestamps),
            module_path: env_flag("FORMCHECK_LOG_MODULE").unwrap_or(defaults.module_path),
        };

        DEBUG_ENABLED.store(config.debug, Ordering::SeqCst);
        LOG_LEVEL.store(config.level as u8, Ordering::SeqCst);

        config
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Read the environment if that has not happened yet.
///
/// Every level check and runtime override calls this first, so the
/// environment never clobbers a later [`set_level`].
pub fn init() {
    Lazy::force(&CONFIG);
}

/// The global configuration.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

#[inline]
pub fn is_debug_enabled() -> bool {
    init();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    init();
    level != Level::Off && level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

pub fn current_level() -> Level {
    init();
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Change the minimum level at runtime.
pub fn set_level(level: Level) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Toggle debug mode at runtime. Enabling it lowers the level to debug.
pub fn set_debug(enabled: bool) {
    init();
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

// ============================================================================
// Output
// ============================================================================

#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    let config = config();
    if !is_level_enabled(level) && !(level == Level::Debug && is_debug_enabled()) {
        return;
    }

    match config.format {
        Format::Pretty => write_pretty(level, target, message, config),
        Format::Compact => write_compact(level, target, message, config),
        Format::Json => write_json(level, target, message),
        Format::Facade => {
            if let Some(lvl) = level.to_log() {
                log::log!(target: target, lvl, "{}", message);
            }
        }
    }
}

fn write_pretty(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let now = chrono::Local::now();
        let _ = write!(stderr, "{} ", now.format("%Y-%m-%d %H:%M:%S%.3f"));
    }
    let _ = write!(stderr, "{:5} ", level.as_str());
    if config.module_path && !target.is_empty() {
        let _ = write!(stderr, "[{}] ", target);
    }
    let _ = writeln!(stderr, "{}", message);
}

fn write_compact(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let _ = write!(stderr, "{} ", chrono::Local::now().format("%H:%M:%S"));
    }
    let _ = write!(stderr, "{} ", &level.as_str()[..1]);
    if config.module_path && !target.is_empty() {
        let _ = write!(stderr, "{}: ", target);
    }
    let _ = writeln!(stderr, "{}", message);
}

#[cfg(feature = "json")]
fn write_json(level: Level, target: &str, message: &str) {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Record<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let record = Record {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    };

    if let Ok(line) = serde_json::to_string(&record) {
        eprintln!("{}", line);
    }
}

#[cfg(not(feature = "json"))]
fn write_json(level: Level, target: &str, message: &str) {
    // Without serde the JSON format degrades to compact output
    write_compact(level, target, message, config());
}

// ============================================================================
// Macros
// ============================================================================

/// Log at trace level.
#[macro_export]
macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        $crate::trace!(target: module_path!(), $($arg)+)
    };
}

/// Log at debug level.
///
/// Enabled by `FORMCHECK_DEBUG=1` or `FORMCHECK_LOG_LEVEL=debug`.
///
/// ```rust
/// use formcheck_log::debug;
///
/// let field = "zip";
/// debug!(target: "formcheck::rules", "{} failed isZip", field);
/// ```
#[macro_export]
macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        $crate::debug!(target: module_path!(), $($arg)+)
    };
}

/// Log at info level.
#[macro_export]
macro_rules! info {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        $crate::info!(target: module_path!(), $($arg)+)
    };
}

/// Log at warn level.
#[macro_export]
macro_rules! warn {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        $crate::warn!(target: module_path!(), $($arg)+)
    };
}

/// Log at error level.
#[macro_export]
macro_rules! error {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        $crate::error!(target: module_path!(), $($arg)+)
    };
}

// ============================================================================
// Tracing integration
// ============================================================================

#[cfg(feature = "tracing")]
pub mod tracing_compat {
    //! Build a `tracing` subscriber that starts from the formcheck level.

    use super::*;

    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::filter::LevelFilter;

    /// Level filter used when `RUST_LOG` is unset.
    pub fn level_filter(level: Level) -> LevelFilter {
        match level {
            Level::Trace => LevelFilter::TRACE,
            Level::Debug => LevelFilter::DEBUG,
            Level::Info => LevelFilter::INFO,
            Level::Warn => LevelFilter::WARN,
            Level::Error => LevelFilter::ERROR,
            Level::Off => LevelFilter::OFF,
        }
    }

    /// `RUST_LOG` when set, otherwise `FORMCHECK_LOG_LEVEL`.
    pub fn filter() -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(level_filter(config().level).into()))
    }

    pub fn subscriber() -> impl tracing::Subscriber {
        use tracing_subscriber::fmt;
        use tracing_subscriber::prelude::*;

        tracing_subscriber::registry()
            .with(filter())
            .with(fmt::layer().with_ansi(false))
    }

}
