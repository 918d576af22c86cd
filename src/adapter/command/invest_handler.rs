use crate::{
    domain::{
        AccountState, BankConfig, BankError, Invest, Invested, OperationEvent, TransactionError,
        compound_factor, rate_percent, round_cents,
    },
    port::CommandHandler,
};
use rust_decimal::Decimal;

/// Figures computed during validation and carried into the emitted event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvestmentQuote {
    pub monthly_rate: Decimal,
    /// Principal grown for the whole duration, rounded to cents
    pub matured: Decimal,
    pub profit: Decimal,
}

impl Invest {
    /// The rate this investment runs at: its own, or the account default.
    pub fn effective_rate(&self, config: &BankConfig) -> Decimal {
        self.monthly_rate.unwrap_or(config.monthly_rate)
    }
}

impl CommandHandler for Invest {
    type Entity = InvestmentQuote;

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

        // A base of zero or below would yield an undefined or negative matured amount.
        let monthly_rate = self.effective_rate(config);
        if monthly_rate <= Decimal::NEGATIVE_ONE || rate_percent(monthly_rate).is_none() {
            return Err(TransactionError::InvalidRate { rate: monthly_rate }.into());
        }

        let matured = compound_factor(monthly_rate, self.months)
            .and_then(|factor| self.amount.checked_mul(factor))
            .map(round_cents)
            .ok_or(TransactionError::ArithmeticOverflow)?;

        // balance - amount + matured must stay representable
        state
            .balance
            .checked_add(matured)
            .ok_or(TransactionError::ArithmeticOverflow)?;

        Ok(InvestmentQuote {
            monthly_rate,
            matured,
            profit: matured - self.amount,
        })
    }

    fn emit(
        &self,
        _state: &AccountState,
        entity: &Self::Entity,
        _config: &BankConfig,
    ) -> Result<Vec<OperationEvent>, BankError> {
        Ok(vec![OperationEvent::Invested(Invested {
            amount: self.amount,
            months: self.months,
            monthly_rate: entity.monthly_rate,
            profit: entity.profit,
        })])
    }
}
