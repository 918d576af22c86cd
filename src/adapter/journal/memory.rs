use crate::{
    domain::{EventEnvelope, OperationEvent},
    port::Journal,
};
use chrono::{DateTime, Utc};

/// In-memory journal implementation; lives as long as the session
#[derive(Debug, Default)]
pub struct InMemoryJournal {
    events: Vec<EventEnvelope>,
    sequence_counter: u64,
}

impl InMemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrowing view of the whole log, in insertion order.
    pub fn entries(&self) -> &[EventEnvelope] {
        &self.events
    }
}

impl Journal for InMemoryJournal {
    fn append(&mut self, event: OperationEvent, timestamp: DateTime<Utc>) -> EventEnvelope {
        self.sequence_counter += 1;

        let envelope = EventEnvelope {
            sequence_nr: self.sequence_counter,
            event,
            timestamp,
        };

        self.events.push(envelope.clone());
        envelope
    }

    fn replay(&self) -> Vec<EventEnvelope> {
        self.events.clone()
    }

    fn len(&self) -> usize {
        self.events.len()
    }
}
