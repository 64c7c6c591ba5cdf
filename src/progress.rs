//! Progress reporting for in-flight transfers.

use std::sync::Arc;

/// Per-chunk progress callback.
///
/// Invoked after each chunk has been written with
/// `(chunk_len, written, total)`: the size of the chunk just written, the
/// cumulative size of the output file, and the expected total (`None` when
/// the server did not disclose one). Cumulative size includes bytes already
/// on disk when a transfer was resumed.
pub type ProgressFn = Arc<dyn Fn(u64, u64, Option<u64>) + Send + Sync>;
