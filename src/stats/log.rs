use std::collections::HashMap;

use super::StatRecord;

/// Per-route, insertion-ordered request records.
///
/// Not synchronised on its own; the registry owns it behind the same lock
/// as the route table.
#[derive(Debug, Default)]
pub struct StatsLog {
    by_path: HashMap<String, Vec<StatRecord>>,
}

impl StatsLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, creating the sequence for `path` on first use.
    pub fn record(&mut self, path: &str, record: StatRecord) {
        match self.by_path.get_mut(path) {
            Some(records) => records.push(record),
            None => {
                self.by_path.insert(path.to_owned(), vec![record]);
            }
        }
    }

    /// Read-and-clear. `None` means nothing was ever recorded for `path`;
    /// a drained path stays tracked and yields `Some(vec![])` next time.
    pub fn drain(&mut self, path: &str) -> Option<Vec<StatRecord>> {
        self.by_path.get_mut(path).map(std::mem::take)
    }
}
