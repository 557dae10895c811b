//! In-memory command history.
//!
//! Append-only for the life of the process; nothing is evicted or persisted.

use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Number of records returned by the `/history` endpoint.
pub const RECENT_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Processing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandRecord {
    pub command: String,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub status: RecordStatus,
}

#[derive(Debug, Default)]
pub struct CommandHistory {
    records: Mutex<Vec<CommandRecord>>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CommandRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record(&self, command: &str) {
        let record = CommandRecord {
            command: command.to_string(),
            timestamp: unix_timestamp(),
            status: RecordStatus::Processing,
        };
        self.lock().push(record);
    }

    pub fn all(&self) -> Vec<CommandRecord> {
        self.lock().clone()
    }

    /// Last `n` records, oldest first.
    pub fn recent(&self, n: usize) -> Vec<CommandRecord> {
        let records = self.lock();
        let start = records.len().saturating_sub(n);
        records[start..].to_vec()
    }

    pub fn last(&self) -> Option<CommandRecord> {
        self.lock().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }
}

/// Current time as fractional seconds since the Unix epoch.
pub fn unix_timestamp() -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let micros = chrono::Utc::now().timestamp_micros() as f64;
    micros / 1_000_000.0
}
