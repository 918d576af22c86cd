use crate::{
    domain::{AccountState, BankConfig, BankError, Directive, OperationCommand},
    port::{CommandHandler, Processor},
};

/// CommandProcessor dispatches commands to their handlers
pub struct CommandProcessor {
    config: BankConfig,
}

impl CommandProcessor {
    pub fn new(config: BankConfig) -> Self {
        Self { config }
    }

    fn run<H: CommandHandler>(
        &self,
        handler: &H,
        actual_state: &AccountState,
    ) -> Result<Directive, BankError> {
        let entity = handler.validate(actual_state, &self.config)?;
        let events = handler.emit(actual_state, &entity, &self.config)?;

        Ok(Directive { events })
    }
}

impl Processor for CommandProcessor {
    fn decide(
        &self,
        command: &OperationCommand,
        actual_state: &AccountState,
    ) -> Result<Directive, BankError> {
        match command {
            OperationCommand::Deposit(cmd) => self.run(cmd, actual_state),
            OperationCommand::Withdrawal(cmd) => self.run(cmd, actual_state),
            OperationCommand::Investment(cmd) => self.run(cmd, actual_state),
        }
    }

    fn config(&self) -> &BankConfig {
        &self.config
    }
}
