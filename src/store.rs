use crate::types::Match;
use tracing::debug;

/// Append-only storage for manually entered matches
pub trait MatchStore: Send + Sync {
    fn append(&mut self, record: Match);

    fn records(&self) -> &[Match];

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// In-memory store that lives for the duration of a session
#[derive(Debug, Default, Clone)]
pub struct InMemoryMatchStore {
    records: Vec<Match>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchStore for InMemoryMatchStore {
    fn append(&mut self, record: Match) {
        debug!("Stored match: {} with id {}", record.title, record.id);
        self.records.push(record);
    }

    fn records(&self) -> &[Match] {
        &self.records
    }
}
