use crate::{
    domain::{AccountState, BankError, EngineError, EventEnvelope, OperationCommand},
    port::{Engine, EventHandler, Journal, Processor},
};
use chrono::{DateTime, Utc};

/// The account engine: validate, transition, then record
pub struct AccountEngine {
    processor: Box<dyn Processor>,
}

impl AccountEngine {
    pub fn new(processor: Box<dyn Processor>) -> Self {
        Self { processor }
    }
}

impl Engine for AccountEngine {
    /// Process a command by orchestrating the following steps:
    /// 1. Validation phase (apply business rules to current state)
    /// 2. Apply event to state (functional - returns new state)
    /// 3. Persist event to journal (journal assigns sequence number)
    ///
    /// The state transition runs before persistence so that a rejected transition
    /// leaves no entry behind.
    fn process_command(
        &self,
        command: OperationCommand,
        current_state: &AccountState,
        journal: &mut dyn Journal,
        timestamp: DateTime<Utc>,
    ) -> Result<(EventEnvelope, AccountState), BankError> {
        // 1. Validation phase
        let directive = self.processor.decide(&command, current_state)?;

        let event = directive
            .events
            .into_iter()
            .next()
            .ok_or(BankError::Engine(EngineError::NoEvents))?;

        // 2. State transition
        let new_state = event
            .apply(current_state)
            .ok_or(BankError::Engine(EngineError::StateTransitionFailed))?;

        // 3. Persistence phase
        let envelope = journal.append(event, timestamp);

        Ok((envelope, new_state))
    }

    fn processor(&self) -> &dyn Processor {
        self.processor.as_ref()
    }
}
