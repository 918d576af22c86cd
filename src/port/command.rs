use crate::domain::{
    AccountState, BankConfig, BankError, Directive, OperationCommand, OperationEvent,
};

pub trait CommandHandler {
    type Entity;

    /// Validate command against ACTUAL state
    ///
    /// Guards run in a fixed order and the first failing one wins.
    /// No I/O, no mutation, just business rules.
    fn validate(
        &self,
        actual_state: &AccountState,
        config: &BankConfig,
    ) -> Result<Self::Entity, BankError>;

    /// Emit events from validated entity
    ///
    /// Returns a Vec to support multiple events per command.
    fn emit(
        &self,
        state: &AccountState,
        entity: &Self::Entity,
        config: &BankConfig,
    ) -> Result<Vec<OperationEvent>, BankError>;
}

/// Processor dispatches commands to their handlers
pub trait Processor {
    /// Validate against the current state and return the directive to carry out.
    fn decide(
        &self,
        command: &OperationCommand,
        actual_state: &AccountState,
    ) -> Result<Directive, BankError>;

    fn config(&self) -> &BankConfig;
}
