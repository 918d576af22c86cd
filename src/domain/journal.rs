use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::OperationEvent;

/// Envelope wrapping an event with ordering metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Position in the transaction log, starting at 1
    pub sequence_nr: u64,
    /// The domain event
    pub event: OperationEvent,
    /// When the event was recorded
    pub timestamp: DateTime<Utc>,
}

/// Directive contains the events a validated command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub events: Vec<OperationEvent>,
}
