//! Logcat writer
//!
//! Formatted tracing output forwarded to logcat, one record per event at
//! the event's own level.

use std::io::{self, Write};
use std::sync::Arc;

use android_logger::{AndroidLogger, Config};
use log::Log;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
pub struct Logcat {
    logger: Arc<AndroidLogger>,
}

impl Logcat {
    /// Level filtering happens in the subscriber, so logcat takes everything
    pub fn new(tag: &str) -> Self {
        let config = Config::default()
            .with_max_level(log::LevelFilter::Trace)
            .with_tag(tag.to_string());
        Self {
            logger: Arc::new(AndroidLogger::new(config)),
        }
    }
}

pub struct LogcatWriter {
    logger: Arc<AndroidLogger>,
    level: log::Level,
}

impl Write for LogcatWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let text = text.trim_end();
        if !text.is_empty() {
            self.logger.log(
                &log::Record::builder()
                    .level(self.level)
                    .args(format_args!("{}", text))
                    .build(),
            );
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.logger.flush();
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Logcat {
    type Writer = LogcatWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogcatWriter {
            logger: self.logger.clone(),
            level: log::Level::Info,
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LogcatWriter {
            logger: self.logger.clone(),
            level: to_log_level(*meta.level()),
        }
    }
}

fn to_log_level(level: Level) -> log::Level {
    match level {
        Level::ERROR => log::Level::Error,
        Level::WARN => log::Level::Warn,
        Level::INFO => log::Level::Info,
        Level::DEBUG => log::Level::Debug,
        _ => log::Level::Trace,
    }
}
