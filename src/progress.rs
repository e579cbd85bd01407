// src/progress.rs
/// Lightweight progress reporting for the scrape loop. Frontends implement
/// this to surface status; the CLI currently passes None and relies on the
/// printed report itself.
pub trait Progress {
    /// Called at the start with the number of venues.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each venue, successful or not.
    fn venue_done(&mut self, _index: usize, _label: &str) {}

    /// Called at the end.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
