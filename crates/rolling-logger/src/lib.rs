//! Rolling Logger
//!
//! Installs a global `tracing` subscriber that writes to a daily rolling
//! file and to the platform console (stderr, or logcat on Android). `log`
//! records are bridged into the same subscriber.

mod file;
#[cfg(target_os = "android")]
mod logcat;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

pub use file::RollingFile;
pub use tracing_subscriber::filter::LevelFilter;

const DEFAULT_MAX_FILES: usize = 7;

static INITIALIZED: OnceLock<PathBuf> = OnceLock::new();

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub dir: PathBuf,
    pub app_name: String,
    pub level: LevelFilter,
    /// Number of daily files to keep
    pub max_files: usize,
}

impl LoggerConfig {
    pub fn new(dir: PathBuf, app_name: &str) -> Self {
        Self {
            dir,
            app_name: app_name.to_string(),
            level: LevelFilter::INFO,
            max_files: DEFAULT_MAX_FILES,
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }
}

#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    AlreadyInitialized,
    NotInitialized,
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "log file error: {}", e),
            LoggerError::AlreadyInitialized => write!(f, "logger already initialized"),
            LoggerError::NotInitialized => write!(f, "logger not initialized"),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

/// Shared handle to the rolling file, usable as a fmt writer
#[derive(Clone)]
pub struct LogSink {
    file: Arc<Mutex<RollingFile>>,
}

impl LogSink {
    pub fn open(config: &LoggerConfig) -> Result<Self, LoggerError> {
        let file = RollingFile::open(&config.dir, &config.app_name, config.max_files)?;
        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }
}

pub struct SinkWriter {
    file: Arc<Mutex<RollingFile>>,
}

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        file.flush()
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter {
            file: self.file.clone(),
        }
    }
}

pub fn init(config: LoggerConfig) -> Result<(), LoggerError> {
    if INITIALIZED.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let sink = LogSink::open(&config)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(sink)
        .with_filter(config.level);

    #[cfg(not(target_os = "android"))]
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(config.level);

    #[cfg(target_os = "android")]
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(logcat::Logcat::new(&config.app_name))
        .with_filter(config.level);

    // try_init also routes `log` records through the subscriber
    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    INITIALIZED
        .set(config.dir.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    tracing::info!(target: "rolling_logger", dir = %config.dir.display(), "logger initialized");
    Ok(())
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    if INITIALIZED.get().is_none() {
        return Err(LoggerError::NotInitialized);
    }
    tracing::info!("{}", msg);
    Ok(())
}
