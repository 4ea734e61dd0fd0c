//! Utility functions for string formatting.

pub mod format;

pub use format::{more_line, progress_bar, truncate};
