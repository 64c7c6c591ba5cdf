//! Filesystem primitives for the download path.
//!
//! Thin seam over `tokio::fs`: size stat, append-mode writer, stale-file
//! removal. The orchestrator goes through these helpers so the on-disk
//! resume token (the partial file itself) is handled in one place.

use std::io;
use std::path::Path;

use tokio::fs::{File, OpenOptions};

/// Size of the file at `path`, or `None` if it does not exist.
pub async fn file_size(path: &Path) -> io::Result<Option<u64>> {
    match tokio::fs::metadata(path).await {
        Ok(meta) => Ok(Some(meta.len())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Open `path` for appending, creating it if absent.
///
/// At most one append writer per output path is open at a time; the
/// orchestrator drops the previous writer before re-entering the request
/// state.
pub async fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path).await
}

/// Remove a stale artifact before starting a fresh transfer.
pub async fn remove_stale(path: &Path) -> io::Result<()> {
    tokio::fs::remove_file(path).await
}
