//! Output module for console output and progress.
//!
//! Provides:
//! - Styled console messages
//! - Download progress bars

pub mod console;
pub mod progress;

pub use console::{print_error, print_info, print_success, print_warning};
pub use progress::{create_download_bar, create_unknown_size_bar};
