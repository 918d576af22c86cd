use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::format_amount;

/// Business-rule rejections. None of these touch the account.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionError {
    #[error("Invalid amount (must be positive)")]
    InvalidAmount,
    #[error("Insufficient funds for transaction")]
    InsufficientFunds,
    #[error("Daily limit of {limit} withdrawals reached")]
    WithdrawalCountExceeded { limit: u32 },
    #[error("Daily withdrawal limit of {} reached", format_amount(.limit))]
    DailyLimitExceeded { limit: Decimal },
    #[error("Invalid monthly rate {rate} (must be greater than -100%)")]
    InvalidRate { rate: Decimal },
    #[error("Interest calculation exceeds the supported range")]
    ArithmeticOverflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    #[error("No events produced by command handler")]
    NoEvents,
    #[error("State transition failed - event could not be applied")]
    StateTransitionFailed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("Daily withdrawal limit must not be negative (got {0})")]
    NegativeDailyLimit(Decimal),
    #[error("Monthly rate must be greater than -1 (got {0})")]
    RateOutOfRange(Decimal),
    #[error("Currency symbol must not be empty")]
    EmptyCurrency,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankError {
    Engine(EngineError),
    Transaction(TransactionError),
    Config(ConfigError),
}

impl BankError {
    /// The business-rule rejection, if that is what this is.
    pub fn transaction(&self) -> Option<&TransactionError> {
        match self {
            BankError::Transaction(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for BankError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BankError::Engine(e) => e.fmt(f),
            BankError::Transaction(e) => e.fmt(f),
            BankError::Config(e) => e.fmt(f),
        }
    }
}

impl From<TransactionError> for BankError {
    fn from(e: TransactionError) -> Self {
        BankError::Transaction(e)
    }
}

impl From<EngineError> for BankError {
    fn from(e: EngineError) -> Self {
        BankError::Engine(e)
    }
}

impl From<ConfigError> for BankError {
    fn from(e: ConfigError) -> Self {
        BankError::Config(e)
    }
}
