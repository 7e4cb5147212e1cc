//! Global subscriber installation.

use std::sync::{Arc, OnceLock};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use navel_config::LoggingConfig;

use crate::buffer::LogBuffer;
use crate::layer::RingBufferLayer;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create log file appender: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("Failed to install subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the process-wide subscriber and return the shared debug log.
///
/// `RUST_LOG` overrides `config.level`. Must be called at most once.
pub fn init_tracing(config: &LoggingConfig) -> Result<Arc<LogBuffer>, LoggingError> {
    let buffer = Arc::new(LogBuffer::new());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console = config.console.then(|| {
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    let file = match &config.file_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("navel")
                .filename_suffix("log")
                .max_log_files(7)
                .build(dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .with(RingBufferLayer::new(buffer.clone()))
        .try_init()?;

    Ok(buffer)
}
