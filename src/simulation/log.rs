//! Append-only simulation transcript.

/// Entry appended before the first work block of a run.
pub const RUN_START_MARKER: &str = "--- Team simulation started ---";

/// Entry appended after the last work block of a run.
pub const RUN_END_MARKER: &str = "--- Team simulation finished ---";

/// The session's simulation transcript.
///
/// Append-only between [`clear`](Self::clear) calls. Each run is bracketed by
/// [`RUN_START_MARKER`] and [`RUN_END_MARKER`] entries with one work block per
/// simulated agent in between, in invocation order.
#[derive(Debug, Default)]
pub struct SimulationLog {
    entries: Vec<String>,
}

impl SimulationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the start-of-run marker.
    pub fn begin_run(&mut self) {
        self.entries.push(RUN_START_MARKER.to_string());
    }

    /// Append the end-of-run marker.
    pub fn end_run(&mut self) {
        self.entries.push(RUN_END_MARKER.to_string());
    }

    /// Append one entry.
    pub fn append(&mut self, entry: String) {
        self.entries.push(entry);
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot of the entries in append order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_empty() {
        let log = SimulationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_run_is_bracketed_in_order() {
        let mut log = SimulationLog::new();
        log.begin_run();
        log.append("block one".to_string());
        log.append("block two".to_string());
        log.end_run();

        assert_eq!(
            log.entries(),
            &[
                RUN_START_MARKER.to_string(),
                "block one".to_string(),
                "block two".to_string(),
                RUN_END_MARKER.to_string(),
            ]
        );
    }

    #[test]
    fn test_clear_always_empties() {
        let mut log = SimulationLog::new();
        log.begin_run();
        log.append("block".to_string());
        log.end_run();
        assert_eq!(log.len(), 3);

        log.clear();
        assert!(log.is_empty());

        // Clearing an already empty log stays empty.
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_entries_accumulate_across_runs() {
        let mut log = SimulationLog::new();
        log.begin_run();
        log.end_run();
        log.begin_run();
        log.end_run();
        assert_eq!(log.len(), 4);
    }
}
