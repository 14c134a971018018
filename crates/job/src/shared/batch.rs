use renta_worker_domain::ID;
use serde::Serialize;

/// Structured outcome of one batch procedure run. Row-local failures
/// are collected here instead of being swallowed, so callers can
/// assert on partial-failure counts rather than scraping logs.
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    /// Rows fully processed in this run
    pub processed: Vec<ID>,
    /// Rows deliberately left alone, e.g. an obligation whose current
    /// period was already generated by an earlier run
    pub skipped: Vec<ID>,
    pub failed: Vec<RowFailure>,
}

#[derive(Debug, Serialize)]
pub struct RowFailure {
    pub id: ID,
    pub reason: String,
}

impl BatchSummary {
    pub fn record_success(&mut self, id: ID) {
        self.processed.push(id);
    }

    pub fn record_skip(&mut self, id: ID) {
        self.skipped.push(id);
    }

    pub fn record_failure(&mut self, id: ID, reason: String) {
        self.failed.push(RowFailure { id, reason });
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
