use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::domain::{AccountState, BankConfig, EventEnvelope, OperationEvent, User};

const RULE_WIDTH: usize = 30;

/// Point-in-time rendering of the account: owner, full log, balance and daily usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub owner: User,
    pub entries: Vec<String>,
    pub balance: Decimal,
    pub withdrawals_today: u32,
    pub max_daily_withdrawals: u32,
    pub withdrawn_today: Decimal,
    pub daily_withdrawal_limit: Decimal,
    pub currency: String,
}

impl Statement {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn money(&self, amount: &Decimal) -> String {
        format!("{} {}", self.currency, crate::domain::format_amount(amount))
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Bank Statement ===")?;
        writeln!(
            f,
            "Customer: {} (Tax ID: {})",
            self.owner.name, self.owner.tax_id
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        if self.entries.is_empty() {
            writeln!(f, "No operations performed.")?;
        } else {
            for entry in &self.entries {
                writeln!(f, "{entry}")?;
            }
        }

        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "Current balance: {}", self.money(&self.balance))?;
        writeln!(
            f,
            "Withdrawals today: {}/{} ({} of {})",
            self.withdrawals_today,
            self.max_daily_withdrawals,
            self.money(&self.withdrawn_today),
            self.money(&self.daily_withdrawal_limit)
        )?;
        write!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

/// Outcome of an accepted operation, rendered as the confirmation shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub envelope: EventEnvelope,
    /// Balance right after the operation
    pub balance: Decimal,
    pub currency: String,
}

impl Receipt {
    pub fn event(&self) -> &OperationEvent {
        &self.envelope.event
    }

    fn money(&self, amount: &Decimal) -> String {
        format!("{} {}", self.currency, crate::domain::format_amount(amount))
    }
}

impl Display for Receipt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.envelope.event {
            OperationEvent::Deposited(event) => write!(
                f,
                "Deposit of {} completed successfully!",
                self.money(&event.amount)
            ),
            OperationEvent::Withdrawn(event) => write!(
                f,
                "Withdrawal of {} completed successfully!",
                self.money(&event.amount)
            ),
            OperationEvent::Invested(event) => {
                writeln!(
                    f,
                    "Investment of {} made for {} months.",
                    self.money(&event.amount),
                    event.months
                )?;
                write!(f, "Profit earned: {} (Rate: ", self.money(&event.profit))?;
                match crate::domain::rate_percent(event.monthly_rate) {
                    Some(percent) => {
                        write!(f, "{}%", crate::domain::format_amount(&percent))?
                    }
                    None => write!(f, "{} x 100%", event.monthly_rate)?,
                }
                write!(f, " per month)")
            }
        }
    }
}

impl Statement {
    pub(crate) fn render(
        owner: &User,
        journal: &[EventEnvelope],
        state: &AccountState,
        config: &BankConfig,
    ) -> Self {
        Self {
            owner: owner.clone(),
            entries: journal
                .iter()
                .map(|envelope| envelope.event.log_entry(config))
                .collect(),
            balance: state.balance,
            withdrawals_today: state.window.withdrawals,
            max_daily_withdrawals: config.max_daily_withdrawals,
            withdrawn_today: state.window.withdrawn,
            daily_withdrawal_limit: config.daily_withdrawal_limit,
            currency: config.currency.clone(),
        }
    }
}
