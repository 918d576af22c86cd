use crate::{
    domain::{
        AccountState, BankConfig, BankError, Deposit, Deposited, OperationEvent, TransactionError,
    },
    port::CommandHandler,
};
use rust_decimal::Decimal;

impl CommandHandler for Deposit {
    type Entity = ();

    fn validate(
        &self,
        _state: &AccountState,
        _config: &BankConfig,
    ) -> Result<Self::Entity, BankError> {
        if self.amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount.into());
        }

        Ok(())
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _config: &BankConfig,
    ) -> Result<Vec<OperationEvent>, BankError> {
        Ok(vec![OperationEvent::Deposited(Deposited {
            amount: self.amount,
        })])
    }
}
