//! Logging infrastructure for the rootpaths library.
//!
//! This module provides a small level-filtered logger that writes to a
//! console stream, a log file or a series of daily log files, plus
//! [`LoggerFactory`] which places log files inside the project's logs
//! directory.

use std::env;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::registry::Paths;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "ROOTPATHS_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use rootpaths::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    #[default]
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpaths::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of daily files a rotating logger keeps unless told otherwise.
pub const DEFAULT_MAX_FILES: usize = 7;

/// Where a [`Logger`] writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
    /// A single file, appended to.
    File,
    /// One file per day, keeping a bounded number of them.
    RotatingFile,
}

#[derive(Debug)]
enum Target {
    Stdout,
    Stderr,
    File { path: PathBuf, file: Mutex<File> },
    Rotating(RotatingFile),
}

/// Daily log files named `{stem}-{YYYY-MM-DD}.{ext}` next to `base`.
#[derive(Debug)]
struct RotatingFile {
    base: PathBuf,
    max_files: usize,
    current: Mutex<(String, File)>,
}

impl RotatingFile {
    fn open(base: PathBuf, max_files: usize) -> io::Result<Self> {
        let date = today();
        let file = open_append(&dated_path(&base, &date))?;
        prune_rotated(&base, max_files)?;

        Ok(Self {
            base,
            max_files,
            current: Mutex::new((date, file)),
        })
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut current = self.current.lock().map_err(|_| poisoned())?;

        let date = today();
        if current.0 != date {
            let file = open_append(&dated_path(&self.base, &date))?;
            *current = (date, file);
            prune_rotated(&self.base, self.max_files)?;
        }

        writeln!(current.1, "{line}")
    }
}

/// A level-filtered logger writing to a console stream or a file.
///
/// # Examples
///
/// ```
/// use rootpaths::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("This is an error message");
/// logger.info("This will not be printed (requires Verbose)");
/// ```
#[derive(Debug)]
pub struct Logger {
    name: Option<String>,
    level: LogLevel,
    target: Target,
}

impl Logger {
    /// Creates an unnamed stderr logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self {
            name: None,
            level,
            target: Target::Stderr,
        }
    }

    /// Creates a named stdout logger. The name prefixes every line.
    #[must_use]
    pub fn stdout(name: impl Into<String>, level: LogLevel) -> Self {
        Self {
            name: Some(name.into()),
            level,
            target: Target::Stdout,
        }
    }

    /// Creates a named stderr logger. The name prefixes every line.
    #[must_use]
    pub fn stderr(name: impl Into<String>, level: LogLevel) -> Self {
        Self {
            name: Some(name.into()),
            level,
            target: Target::Stderr,
        }
    }

    /// Creates a named logger appending to `path`.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directories or the file cannot be created.
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>, level: LogLevel) -> Result<Self> {
        let path = path.into();
        let file = open_append(&path)?;

        Ok(Self {
            name: Some(name.into()),
            level,
            target: Target::File {
                path,
                file: Mutex::new(file),
            },
        })
    }

    /// Creates a named logger writing one file per day.
    ///
    /// `path` names the series: `logs/app.log` produces
    /// `logs/app-2024-05-01.log`, `logs/app-2024-05-02.log`, and so on. Only
    /// the newest `max_files` files are kept; `0` keeps every file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory or today's file cannot be
    /// created, or if an old file cannot be removed.
    pub fn rotating(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        max_files: usize,
        level: LogLevel,
    ) -> Result<Self> {
        Ok(Self {
            name: Some(name.into()),
            level,
            target: Target::Rotating(RotatingFile::open(path.into(), max_files)?),
        })
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// The logger's name, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Where this logger writes.
    #[must_use]
    pub fn output(&self) -> LogOutput {
        match &self.target {
            Target::Stdout => LogOutput::Stdout,
            Target::Stderr => LogOutput::Stderr,
            Target::File { .. } => LogOutput::File,
            Target::Rotating(_) => LogOutput::RotatingFile,
        }
    }

    /// The file this logger appends to; `None` for console loggers.
    ///
    /// For rotating loggers this is the undated series path.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.target {
            Target::Stdout | Target::Stderr => None,
            Target::File { path, .. } => Some(path),
            Target::Rotating(rotating) => Some(&rotating.base),
        }
    }

    /// Logs an error message.
    ///
    /// Error messages are always displayed unless the level is Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            self.write("ERROR", message);
        }
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            self.write("WARN", message);
        }
    }

    /// Logs an informational message.
    ///
    /// Info messages are only displayed at Verbose level.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            self.write("INFO", message);
        }
    }

    /// Logs a debug message.
    ///
    /// Debug messages are only displayed at Verbose level.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            self.write("DEBUG", message);
        }
    }

    fn write(&self, label: &str, message: &str) {
        let line = match &self.name {
            Some(name) => format!("[{name}] {label}: {message}"),
            None => format!("{label}: {message}"),
        };

        let written = match &self.target {
            Target::Stdout => {
                println!("{line}");
                Ok(())
            }
            Target::Stderr => {
                eprintln!("{line}");
                Ok(())
            }
            Target::File { file, .. } => file
                .lock()
                .map_err(|_| poisoned())
                .and_then(|mut file| writeln!(file, "{line}")),
            Target::Rotating(rotating) => rotating.write_line(&line),
        };

        // A lost file write still reaches the terminal.
        if let Err(e) = written {
            eprintln!("{line}");
            eprintln!("(log file write failed: {e})");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn poisoned() -> io::Error {
    io::Error::other("log file lock poisoned")
}

fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

fn dated_path(base: &Path, date: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{stem}-{date}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{date}"),
    };
    base.with_file_name(name)
}

/// Whether `candidate` is one of the dated files of the `base` series.
fn is_rotated_file(base: &Path, candidate: &Path) -> bool {
    let (Some(stem), Some(name)) = (
        base.file_stem().and_then(|s| s.to_str()),
        candidate.file_name().and_then(|s| s.to_str()),
    ) else {
        return false;
    };
    let suffix = base
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    name.strip_prefix(stem)
        .and_then(|rest| rest.strip_prefix('-'))
        .and_then(|rest| rest.strip_suffix(suffix.as_str()))
        .is_some_and(|date| NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok())
}

/// Delete all but the newest `max_files` dated files of the `base` series.
fn prune_rotated(base: &Path, max_files: usize) -> io::Result<()> {
    if max_files == 0 {
        return Ok(());
    }

    let dir = match base.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut rotated: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_rotated_file(base, path))
        .collect();

    // ISO dates sort chronologically; newest first.
    rotated.sort_unstable_by(|a, b| b.cmp(a));
    for old in rotated.into_iter().skip(max_files) {
        log::debug!("removing rotated log file {}", old.display());
        fs::remove_file(old)?;
    }

    Ok(())
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `ROOTPATHS_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use rootpaths::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

/// Options for [`LoggerFactory::create_logger`].
///
/// # Examples
///
/// ```
/// use rootpaths::logging::LoggerConfig;
///
/// let config = LoggerConfig::default();
/// assert_eq!(config.name, "app");
/// assert_eq!(config.path, "logs/app.log");
/// assert!(config.rotating);
/// assert_eq!(config.max_files, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Logger name, prefixed to every line.
    pub name: String,
    /// Log file location, resolved with [`LoggerFactory::log_file_path`].
    pub path: String,
    /// Minimum level written.
    pub level: LogLevel,
    /// Write one file per day instead of a single file.
    pub rotating: bool,
    /// Daily files kept when rotating; `0` keeps every file.
    pub max_files: usize,
    /// Write to stderr instead of a file. Ignored when rotating.
    pub use_stderr: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: "app".to_string(),
            path: "logs/app.log".to_string(),
            level: LogLevel::Verbose,
            rotating: true,
            max_files: DEFAULT_MAX_FILES,
            use_stderr: false,
        }
    }
}

/// Creates loggers whose files live in the project's logs directory.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rootpaths::{LoggerFactory, Paths};
///
/// let paths = Arc::new(Paths::builder("/var/www/app").auto_discover(false).build().unwrap());
/// let factory = LoggerFactory::new(paths);
///
/// assert_eq!(factory.log_file_path("app.log"), "/var/www/app/var/logs/app.log");
/// assert_eq!(factory.log_file_path("logs/app.log"), "/var/www/app/var/logs/app.log");
/// assert_eq!(factory.log_file_path("/tmp/app.log"), "/tmp/app.log");
/// ```
#[derive(Debug, Clone)]
pub struct LoggerFactory {
    paths: Arc<Paths>,
}

impl LoggerFactory {
    /// Create a factory resolving against `paths`.
    #[must_use]
    pub fn new(paths: Arc<Paths>) -> Self {
        Self { paths }
    }

    /// Resolve a log file location.
    ///
    /// Absolute paths (`/...`, `C:\...`, `C:/...`) are returned unchanged.
    /// A leading `logs/` is replaced by the logs directory; any other
    /// relative path is placed inside it.
    #[must_use]
    pub fn log_file_path(&self, path: &str) -> String {
        if is_absolute(path) {
            return path.to_string();
        }

        let logs = self.paths.logs_path();
        match path.strip_prefix("logs/") {
            Some(rest) => format!("{logs}/{rest}"),
            None => format!("{logs}/{path}"),
        }
    }

    /// Create a logger from `config`.
    ///
    /// Rotating configurations write daily files; otherwise the logger
    /// writes to stderr when `use_stderr` is set, or appends to a single
    /// file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the log directory or file cannot be created.
    pub fn create_logger(&self, config: &LoggerConfig) -> Result<Logger> {
        if config.rotating {
            let resolved = self.log_file_path(&config.path);
            log::debug!("logger {} rotating under {resolved}", config.name);
            return Logger::rotating(&config.name, resolved, config.max_files, config.level);
        }

        if config.use_stderr {
            return Ok(Logger::stderr(&config.name, config.level));
        }

        let resolved = self.log_file_path(&config.path);
        log::debug!("logger {} writing to {resolved}", config.name);
        Logger::file(&config.name, resolved, config.level)
    }

    /// Create a named logger appending to the resolved `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the log directory or file cannot be created.
    pub fn create_file_logger(&self, name: &str, path: &str, level: LogLevel) -> Result<Logger> {
        self.create_logger(&LoggerConfig {
            name: name.to_string(),
            path: path.to_string(),
            level,
            rotating: false,
            ..LoggerConfig::default()
        })
    }

    /// Create a named logger writing daily files under the resolved `path`,
    /// keeping at most `max_files` of them.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the log directory or file cannot be created,
    /// or an expired file cannot be removed.
    pub fn create_rotating_logger(
        &self,
        name: &str,
        path: &str,
        max_files: usize,
        level: LogLevel,
    ) -> Result<Logger> {
        self.create_logger(&LoggerConfig {
            name: name.to_string(),
            path: path.to_string(),
            level,
            rotating: true,
            max_files,
            use_stderr: false,
        })
    }

    /// Create a named stdout logger.
    #[must_use]
    pub fn create_console_logger(&self, name: &str, level: LogLevel) -> Logger {
        Logger::stdout(name, level)
    }
}

fn is_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    path.starts_with('/')
        || (bytes.len() >= 3
            && bytes[0].is_ascii_alphabetic()
            && bytes[1] == b':'
            && (bytes[2] == b'\\' || bytes[2] == b'/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    struct EnvGuard {
        saved: Option<String>,
    }

    impl EnvGuard {
        fn set(value: Option<&str>) -> Self {
            let saved = env::var(LOG_MODE_ENV).ok();
            match value {
                Some(v) => env::set_var(LOG_MODE_ENV, v),
                None => env::remove_var(LOG_MODE_ENV),
            }
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.saved {
                Some(v) => env::set_var(LOG_MODE_ENV, v),
                None => env::remove_var(LOG_MODE_ENV),
            }
        }
    }

    fn factory(root: &str) -> LoggerFactory {
        LoggerFactory::new(Arc::new(
            Paths::builder(root).auto_discover(false).build().unwrap(),
        ))
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_logger_default() {
        let logger = Logger::default();
        assert_eq!(logger.level(), LogLevel::Normal);
        assert!(logger.name().is_none());
        assert!(logger.path().is_none());
    }

    #[test]
    #[serial]
    fn test_init_logger_defaults() {
        let _guard = EnvGuard::set(None);
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
    }

    #[test]
    fn test_init_logger_flags() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_init_logger_from_env() {
        let _guard = EnvGuard::set(Some("quiet"));
        assert_eq!(init_logger(false, false).level(), LogLevel::Quiet);
    }

    #[test]
    #[serial]
    fn test_init_logger_env_invalid_fallback() {
        let _guard = EnvGuard::set(Some("invalid"));
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_init_logger_cli_overrides_env() {
        let _guard = EnvGuard::set(Some("quiet"));
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
    }

    #[test]
    fn test_log_file_path_relative() {
        let factory = factory("/var/www/app");
        assert_eq!(factory.log_file_path("app.log"), "/var/www/app/var/logs/app.log");
        assert_eq!(
            factory.log_file_path("logs/app.log"),
            "/var/www/app/var/logs/app.log"
        );
        assert_eq!(
            factory.log_file_path("debug/trace.log"),
            "/var/www/app/var/logs/debug/trace.log"
        );
    }

    #[test]
    fn test_log_file_path_absolute() {
        let factory = factory("/var/www/app");
        assert_eq!(factory.log_file_path("/tmp/app.log"), "/tmp/app.log");
        assert_eq!(factory.log_file_path("C:\\logs\\app.log"), "C:\\logs\\app.log");
        assert_eq!(factory.log_file_path("d:/logs/app.log"), "d:/logs/app.log");
    }

    #[test]
    fn test_create_file_logger_writes() {
        let dir = tempdir().unwrap();
        let factory = factory(dir.path().to_str().unwrap());

        let logger = factory
            .create_file_logger("app", "logs/app.log", LogLevel::Verbose)
            .unwrap();
        logger.info("started");
        logger.debug("details");

        let path = dir.path().join("var/logs/app.log");
        assert_eq!(logger.path(), Some(path.as_path()));
        assert_eq!(logger.name(), Some("app"));

        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents, "[app] INFO: started\n[app] DEBUG: details\n");
    }

    #[test]
    fn test_file_logger_filters_and_appends() {
        let dir = tempdir().unwrap();
        let factory = factory(dir.path().to_str().unwrap());

        factory
            .create_file_logger("app", "app.log", LogLevel::Normal)
            .unwrap()
            .warn("first");
        let logger = factory
            .create_file_logger("app", "app.log", LogLevel::Normal)
            .unwrap();
        logger.info("filtered");
        logger.error("second");

        let contents = fs::read_to_string(dir.path().join("var/logs/app.log")).unwrap();
        assert_eq!(contents, "[app] WARN: first\n[app] ERROR: second\n");
    }

    #[test]
    fn test_create_console_logger_writes_to_stdout() {
        let logger = factory("/app").create_console_logger("console", LogLevel::Quiet);
        assert_eq!(logger.name(), Some("console"));
        assert_eq!(logger.level(), LogLevel::Quiet);
        assert_eq!(logger.output(), LogOutput::Stdout);
        assert!(logger.path().is_none());
    }

    #[test]
    fn test_logger_config_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.name, "app");
        assert_eq!(config.path, "logs/app.log");
        assert_eq!(config.level, LogLevel::Verbose);
        assert!(config.rotating);
        assert_eq!(config.max_files, DEFAULT_MAX_FILES);
        assert!(!config.use_stderr);
    }

    #[test]
    fn test_create_logger_defaults_rotate_in_logs_dir() {
        let dir = tempdir().unwrap();
        let factory = factory(dir.path().to_str().unwrap());

        let logger = factory.create_logger(&LoggerConfig::default()).unwrap();
        assert_eq!(logger.output(), LogOutput::RotatingFile);
        assert_eq!(logger.name(), Some("app"));
        assert_eq!(
            logger.path(),
            Some(dir.path().join("var/logs/app.log").as_path())
        );

        logger.info("booted");
        let today_file = dir.path().join(format!("var/logs/app-{}.log", today()));
        let contents = fs::read_to_string(today_file).unwrap();
        assert_eq!(contents, "[app] INFO: booted\n");
        assert!(!dir.path().join("var/logs/app.log").exists());
    }

    #[test]
    fn test_create_logger_use_stderr() {
        let dir = tempdir().unwrap();
        let factory = factory(dir.path().to_str().unwrap());

        let logger = factory
            .create_logger(&LoggerConfig {
                rotating: false,
                use_stderr: true,
                ..LoggerConfig::default()
            })
            .unwrap();
        assert_eq!(logger.output(), LogOutput::Stderr);
        assert!(!dir.path().join("var/logs").exists());
    }

    #[test]
    fn test_file_logger_output() {
        let dir = tempdir().unwrap();
        let logger = factory(dir.path().to_str().unwrap())
            .create_file_logger("app", "app.log", LogLevel::Normal)
            .unwrap();
        assert_eq!(logger.output(), LogOutput::File);
    }

    #[test]
    fn test_dated_path() {
        assert_eq!(
            dated_path(Path::new("/var/logs/app.log"), "2024-05-01"),
            PathBuf::from("/var/logs/app-2024-05-01.log")
        );
        assert_eq!(
            dated_path(Path::new("/var/logs/trace"), "2024-05-01"),
            PathBuf::from("/var/logs/trace-2024-05-01")
        );
    }

    #[test]
    fn test_is_rotated_file() {
        let base = Path::new("/var/logs/app.log");
        assert!(is_rotated_file(base, Path::new("/var/logs/app-2024-05-01.log")));
        assert!(!is_rotated_file(base, Path::new("/var/logs/app.log")));
        assert!(!is_rotated_file(base, Path::new("/var/logs/app-latest.log")));
        assert!(!is_rotated_file(base, Path::new("/var/logs/app-2024-05-01.txt")));
        assert!(!is_rotated_file(base, Path::new("/var/logs/api-2024-05-01.log")));
    }

    #[test]
    fn test_rotating_logger_prunes_old_files() {
        let dir = tempdir().unwrap();
        let logs = dir.path().join("var/logs");
        fs::create_dir_all(&logs).unwrap();
        for day in ["2000-01-01", "2000-01-02", "2000-01-03"] {
            fs::write(logs.join(format!("app-{day}.log")), "old\n").unwrap();
        }
        fs::write(logs.join("app.log"), "single file\n").unwrap();
        fs::write(logs.join("other-2000-01-01.log"), "other series\n").unwrap();

        let logger = factory(dir.path().to_str().unwrap())
            .create_rotating_logger("app", "logs/app.log", 2, LogLevel::Normal)
            .unwrap();
        logger.warn("rotated");

        assert!(logs.join(format!("app-{}.log", today())).exists());
        assert!(logs.join("app-2000-01-03.log").exists());
        assert!(!logs.join("app-2000-01-02.log").exists());
        assert!(!logs.join("app-2000-01-01.log").exists());
        assert!(logs.join("app.log").exists());
        assert!(logs.join("other-2000-01-01.log").exists());
    }

    #[test]
    fn test_rotating_logger_zero_keeps_everything() {
        let dir = tempdir().unwrap();
        let logs = dir.path().join("var/logs");
        fs::create_dir_all(&logs).unwrap();
        for day in ["2000-01-01", "2000-01-02"] {
            fs::write(logs.join(format!("app-{day}.log")), "old\n").unwrap();
        }

        factory(dir.path().to_str().unwrap())
            .create_rotating_logger("app", "app.log", 0, LogLevel::Normal)
            .unwrap();

        assert!(logs.join("app-2000-01-01.log").exists());
        assert!(logs.join("app-2000-01-02.log").exists());
    }

    #[test]
    fn test_write_failure_falls_back_without_panicking() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let logger = Logger::file("app", &path, LogLevel::Normal).unwrap();

        if let Target::File { file, .. } = &logger.target {
            // Swap in a read-only handle so the next append fails.
            let mut guard = file.lock().unwrap();
            *guard = File::open(&path).unwrap();
        }

        logger.error("still reported");
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
