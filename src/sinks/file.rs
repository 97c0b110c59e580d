//! File sink

use super::Sink;
use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Open `path` for appending, creating it with mode `0644` if needed.
///
/// Writes are unbuffered: every record reaches the file as soon as the
/// logging call returns.
pub fn open_file(path: impl AsRef<Path>) -> Result<Sink> {
    let path = path.as_ref();
    let file = open_append(path).map_err(|e| {
        LoggerError::io_operation("opening log file", path.display().to_string(), e)
    })?;
    Ok(Box::new(file))
}

fn open_append(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path)
}
