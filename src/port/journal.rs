use chrono::{DateTime, Utc};

use crate::domain::{EventEnvelope, OperationEvent};

/// Journal is the append-only transaction log of the account.
///
/// Entries are never removed or reordered; each accepted operation appends exactly one.
pub trait Journal {
    /// Append an event to the log
    ///
    /// The journal constructs the EventEnvelope by assigning the next sequence number.
    fn append(&mut self, event: OperationEvent, timestamp: DateTime<Utc>) -> EventEnvelope;

    /// Replay every event in sequence order
    fn replay(&self) -> Vec<EventEnvelope>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
