// src/progress.rs
/// Lightweight progress reporting for a multi-sheet run. Frontends
/// implement this to surface status; the library never prints on its own.
pub trait Progress {
    /// Called once with the number of sheets about to be fetched.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One sheet finished, with the number of records it produced.
    fn sheet_done(&mut self, _sheet: &str, _records: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
