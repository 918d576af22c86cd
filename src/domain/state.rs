use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balances and daily counters of the single account (O(1) memory, the log lives in the journal)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    pub balance: Decimal,
    pub window: DailyWindow,
}

/// Withdrawal counters scoped to one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWindow {
    /// Day the counters apply to
    pub date: NaiveDate,
    /// Successful withdrawals on `date`
    pub withdrawals: u32,
    /// Sum of successful withdrawals on `date`
    pub withdrawn: Decimal,
}

impl DailyWindow {
    pub fn opened_on(date: NaiveDate) -> Self {
        Self {
            date,
            withdrawals: 0,
            withdrawn: Decimal::ZERO,
        }
    }

    /// The window that applies on `today`: unchanged on the same date, fresh on any other.
    pub fn rolled_to(self, today: NaiveDate) -> Self {
        if self.date == today {
            self
        } else {
            Self::opened_on(today)
        }
    }
}

impl AccountState {
    /// Zero balance, empty window.
    pub fn opened_on(date: NaiveDate) -> Self {
        Self {
            balance: Decimal::ZERO,
            window: DailyWindow::opened_on(date),
        }
    }
}
