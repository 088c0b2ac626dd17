//! Question-and-answer history for the current session.

use serde::{Deserialize, Serialize};

/// One settled question with the answer it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub question: String,
    pub answer: String,
    /// When the answer arrived, RFC 3339 in UTC.
    pub asked_at: String,
}

impl QueryRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            asked_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Append-only history of answered questions, newest last.
///
/// Only settled exchanges are recorded; a question whose request failed or
/// returned an empty answer never enters the ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryLedger {
    records: Vec<QueryRecord>,
}

impl QueryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a settled exchange.
    pub fn append(&mut self, record: QueryRecord) {
        self.records.push(record);
    }

    /// The most recently answered question, if any.
    pub fn latest(&self) -> Option<&QueryRecord> {
        self.records.last()
    }

    /// All exchanges before the latest, oldest first.
    pub fn earlier_than_latest(&self) -> &[QueryRecord] {
        match self.records.len() {
            0 => &[],
            n => &self.records[..n - 1],
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
