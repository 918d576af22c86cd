use chrono::{DateTime, Utc};

use crate::domain::{AccountState, BankError, EventEnvelope, OperationCommand};
use crate::port::{Journal, Processor};

/// Engine orchestrates command processing with exclusive state access
///
/// Responsibilities:
/// - Validation through the Processor against the current state
/// - State transition through the event's EventHandler
/// - Persistence of exactly one entry per accepted command via the Journal
pub trait Engine {
    /// Process a command
    ///
    /// 1. processor.decide(cmd, state) -> Directive (events)
    /// 2. Apply the event to state (functional)
    /// 3. Append the event to the journal
    ///
    /// Returns (EventEnvelope, NewState) - caller is responsible for storing the new state.
    /// On error the journal is untouched.
    fn process_command(
        &self,
        command: OperationCommand,
        current_state: &AccountState,
        journal: &mut dyn Journal,
        timestamp: DateTime<Utc>,
    ) -> Result<(EventEnvelope, AccountState), BankError>;

    /// Get the command processor
    fn processor(&self) -> &dyn Processor;
}
