//! # Logger
//!
//! One place to install the global `tracing` subscriber for the workspace binaries.
//!
//! * Console output in compact, ANSI-colored form (on by default).
//! * Optional rolling file output through a non-blocking writer, plain text or JSON.
//! * Filtering from `RUST_LOG`, falling back to [`LoggerBuilder::env_filter`] and then
//!   to [`LoggerBuilder::level`].
//!
//! ## Example
//!
//! ```rust
//! use pantry_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("pantry-docs")
//!     .level(LevelFilter::DEBUG)
//!     .env_filter("pantry=debug,tower_http=info")
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Output format of the file layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Rolling file output settings.
#[derive(Debug)]
struct FileOutput {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    format: LogFormat,
}

/// Configures and installs the global subscriber. Created by [`Logger::builder`].
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOutput>,
}

impl LoggerBuilder {
    /// Minimum level used when neither `RUST_LOG` nor an explicit filter is set.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter directives such as `pantry=debug,hyper=info`.
    ///
    /// `RUST_LOG` still wins when it is set. Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.env_filter = Some(directives.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes logs to rolling files named `<name>.<date>.log` inside `dir`.
    #[must_use]
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file = Some(FileOutput {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            format: LogFormat::Text,
        });
        self
    }

    /// Rotation strategy for file output. No effect without [`LoggerBuilder::path`].
    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Number of rotated files to keep. No effect without [`LoggerBuilder::path`].
    #[must_use]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// Emits JSON lines to the log files. No effect without [`LoggerBuilder::path`].
    #[must_use]
    pub fn json(mut self) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.format = LogFormat::Json;
        }
        self
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the lifetime of the process; dropping it
    /// stops the background file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`,
    ///   invalid filter directives or when no output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.build_filter()?;

        let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
        if self.console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match self.file {
            Some(file) => {
                fs::create_dir_all(&file.dir)
                    .context(format!("Creating log directory {}", file.dir.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(file.rotation)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(file.max_files)
                    .build(&file.dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let layer = fmt::layer().with_writer(writer).with_ansi(false);
                layers.push(match file.format {
                    LogFormat::Text => layer.boxed(),
                    LogFormat::Json => layer.json().boxed(),
                });
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(logger = %self.name, "Logger initialized");

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        let problem = if self.name.trim().is_empty() {
            Some("Logger name cannot be empty")
        } else if self.file.as_ref().is_some_and(|f| f.max_files == 0) {
            Some("max_files must be greater than zero")
        } else if !self.console && self.file.is_none() {
            Some("No output enabled; enable the console or set a log path")
        } else {
            None
        };

        problem.map_or(Ok(()), |message| {
            Err(LoggerError::InvalidConfiguration { message: message.into(), context: None })
        })
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());

        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            return Ok(builder.from_env_lossy());
        }

        match &self.env_filter {
            Some(directives) => builder.parse(directives).map_err(|e| {
                LoggerError::InvalidConfiguration {
                    message: format!("Invalid filter '{directives}': {e}").into(),
                    context: None,
                }
            }),
            None => Ok(builder.parse_lossy("")),
        }
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring a logger; `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            file: None,
        }
    }

    /// `true` when file output is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("pantry-test");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.env_filter.is_none());
        assert!(builder.file.is_none());
    }

    #[test]
    fn file_options_require_a_path() {
        let builder = Logger::builder("pantry-test").max_files(3).json();
        assert!(builder.file.is_none());

        let builder = Logger::builder("pantry-test").path("logs").max_files(3).json();
        let file = builder.file.expect("file output configured");
        assert_eq!(file.max_files, 3);
        assert_eq!(file.format, LogFormat::Json);
        assert_eq!(file.dir, PathBuf::from("logs"));
    }

    #[test]
    fn rejects_invalid_configuration() {
        let empty_name = Logger::builder("  ").validate();
        assert!(matches!(empty_name, Err(LoggerError::InvalidConfiguration { .. })));

        let no_output = Logger::builder("pantry-test").console(false).validate();
        assert!(matches!(no_output, Err(LoggerError::InvalidConfiguration { .. })));

        let zero_files = Logger::builder("pantry-test").path("logs").max_files(0).validate();
        assert!(matches!(zero_files, Err(LoggerError::InvalidConfiguration { .. })));
    }
}
