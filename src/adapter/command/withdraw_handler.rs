use crate::{
    domain::{
        AccountState, BankConfig, BankError, OperationEvent, TransactionError, Withdraw, Withdrawn,
    },
    port::CommandHandler,
};
use rust_decimal::Decimal;

impl CommandHandler for Withdraw {
    type Entity = ();

    /// Expects `state.window` to already be rolled to the current date.
    fn validate(
        &self,
        state: &AccountState,
        config: &BankConfig,
    ) -> Result<Self::Entity, BankError> {
        if self.amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount.into());
        }

        if state.balance < self.amount {
            return Err(TransactionError::InsufficientFunds.into());
        }

        if state.window.withdrawals >= config.max_daily_withdrawals {
            return Err(TransactionError::WithdrawalCountExceeded {
                limit: config.max_daily_withdrawals,
            }
            .into());
        }

        let withdrawn_after = state.window.withdrawn.checked_add(self.amount);
        if withdrawn_after.is_none_or(|total| total > config.daily_withdrawal_limit) {
            return Err(TransactionError::DailyLimitExceeded {
                limit: config.daily_withdrawal_limit,
            }
            .into());
        }

        Ok(())
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _config: &BankConfig,
    ) -> Result<Vec<OperationEvent>, BankError> {
        Ok(vec![OperationEvent::Withdrawn(Withdrawn {
            amount: self.amount,
        })])
    }
}
