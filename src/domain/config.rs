use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ConfigError;

pub const DEFAULT_MAX_DAILY_WITHDRAWALS: u32 = 3;
pub const DEFAULT_CURRENCY: &str = "R$";

/// Account limits and presentation settings, fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankConfig {
    /// Successful withdrawals allowed per calendar day
    pub max_daily_withdrawals: u32,
    /// Cumulative amount that may be withdrawn per calendar day
    pub daily_withdrawal_limit: Decimal,
    /// Rate used by investments that don't name one (0.01 = 1% per month)
    pub monthly_rate: Decimal,
    /// Symbol printed in front of every amount
    pub currency: String,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            max_daily_withdrawals: DEFAULT_MAX_DAILY_WITHDRAWALS,
            daily_withdrawal_limit: Decimal::new(50000, 2),
            monthly_rate: Decimal::new(1, 2),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl BankConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.daily_withdrawal_limit < Decimal::ZERO {
            return Err(ConfigError::NegativeDailyLimit(self.daily_withdrawal_limit));
        }
        if self.monthly_rate <= Decimal::NEGATIVE_ONE
            || crate::domain::rate_percent(self.monthly_rate).is_none()
        {
            return Err(ConfigError::RateOutOfRange(self.monthly_rate));
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::EmptyCurrency);
        }
        Ok(())
    }

    /// Render an amount the way every message in the application does, e.g. `R$ 12.50`.
    pub fn money(&self, amount: &Decimal) -> String {
        format!("{} {}", self.currency, crate::domain::format_amount(amount))
    }
}
