// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting used by long-running operations.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of sources.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page was extracted and written.
    fn item_done(&mut self, _name: &str, _path: &Path) {}

    /// Called when one page could not be loaded or parsed.
    fn item_failed(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
