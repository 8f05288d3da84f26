use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid log filter: {0}")]
    Filter(String),
    #[error("failed to install subscriber: {0}")]
    Install(String),
}

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Filter directive; falls back to `RUST_LOG`, then `info`.
    pub level: Option<String>,
    /// JSON lines on stderr instead of the human format.
    pub json: bool,
    /// Append JSON events to this file as well.
    pub file: Option<PathBuf>,
}

/// Installs the global subscriber. Events go to stderr so stdout stays
/// reserved for generated statements.
pub fn init_logging(options: &LogOptions) -> Result<(), LoggingError> {
    let filter = match &options.level {
        Some(level) => EnvFilter::try_new(level).map_err(|err| LoggingError::Filter(err.to_string()))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let stderr_layer = if options.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
            .boxed()
    };

    let file_layer = match &options.file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .with_writer(file_writer(path)?),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}

fn file_writer(path: &Path) -> Result<BoxMakeWriter, LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::File {
            path: path.to_path_buf(),
            source,
        })?;
    let file = Arc::new(Mutex::new(file));

    Ok(BoxMakeWriter::new(move || SharedWriter {
        file: Arc::clone(&file),
    }))
}

struct SharedWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("failed to lock log file"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("failed to lock log file"))?;
        file.flush()
    }
}
