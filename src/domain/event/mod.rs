use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::BankConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperationEvent {
    Deposited(Deposited),
    Withdrawn(Withdrawn),
    Invested(Invested),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposited {
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawn {
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invested {
    pub amount: Decimal,
    pub months: i32,
    pub monthly_rate: Decimal,
    /// Matured amount minus the principal; negative for negative durations
    pub profit: Decimal,
}

impl OperationEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            OperationEvent::Deposited(_) => "deposit",
            OperationEvent::Withdrawn(_) => "withdrawal",
            OperationEvent::Invested(_) => "investment",
        }
    }

    /// Principal moved by the operation.
    pub fn amount(&self) -> Decimal {
        match self {
            OperationEvent::Deposited(event) => event.amount,
            OperationEvent::Withdrawn(event) => event.amount,
            OperationEvent::Invested(event) => event.amount,
        }
    }

    /// The human-readable line this event contributes to the transaction log.
    pub fn log_entry(&self, config: &BankConfig) -> String {
        match self {
            OperationEvent::Deposited(event) => {
                format!("Deposit: +{}", config.money(&event.amount))
            }
            OperationEvent::Withdrawn(event) => {
                format!("Withdrawal: -{}", config.money(&event.amount))
            }
            OperationEvent::Invested(event) => {
                let sign = if event.profit < Decimal::ZERO { '-' } else { '+' };
                format!(
                    "Investment: {sign}{} (after {} months)",
                    config.money(&event.profit.abs()),
                    event.months
                )
            }
        }
    }
}
