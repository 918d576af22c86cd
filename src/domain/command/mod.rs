use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Replay script row structure (flat deserialization)
#[derive(Debug, Deserialize)]
struct ScriptRow {
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(rename = "type")]
    operation: String,
    amount: Decimal,
    #[serde(default)]
    months: Option<i32>,
    #[serde(default)]
    rate: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
/// A mutating request against the account.
///
/// Each command is validated against the current state and, when accepted, turned into
/// exactly one event that is applied to the state and appended to the journal.
pub enum OperationCommand {
    Deposit(Deposit),
    Withdrawal(Withdraw),
    Investment(Invest),
}

impl OperationCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            OperationCommand::Deposit(_) => "deposit",
            OperationCommand::Withdrawal(_) => "withdrawal",
            OperationCommand::Investment(_) => "investment",
        }
    }

    /// Whether the daily withdrawal window must be brought up to date before validation.
    pub fn reads_daily_window(&self) -> bool {
        matches!(self, OperationCommand::Withdrawal(_))
    }
}

impl TryFrom<ScriptRow> for ScriptEntry {
    type Error = String;

    fn try_from(row: ScriptRow) -> Result<Self, Self::Error> {
        let command = match row.operation.trim().to_lowercase().as_str() {
            "deposit" => OperationCommand::Deposit(Deposit { amount: row.amount }),
            "withdrawal" | "withdraw" => {
                OperationCommand::Withdrawal(Withdraw { amount: row.amount })
            }
            "investment" | "invest" => {
                let months = row
                    .months
                    .ok_or_else(|| "investment requires months".to_string())?;
                OperationCommand::Investment(Invest {
                    amount: row.amount,
                    months,
                    monthly_rate: row.rate,
                })
            }
            other => return Err(format!("unknown operation type: {}", other)),
        };

        Ok(Self {
            date: row.date,
            command,
        })
    }
}

/// One line of a replay script: an optional business date followed by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub date: Option<NaiveDate>,
    pub command: OperationCommand,
}

// Custom Deserialize implementation for CSV format
impl<'de> Deserialize<'de> for ScriptEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let row = ScriptRow::deserialize(deserializer)?;
        row.try_into().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A deposit credits the account, increasing the balance by the amount.
pub struct Deposit {
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A withdrawal debits the account.
///
/// It is rejected when the balance does not cover it, when the day's withdrawal count is
/// exhausted, or when it would push the day's withdrawn total over the daily limit.
pub struct Withdraw {
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// An investment commits part of the balance for `months` at a monthly compound rate and
/// credits the matured amount back at once. `None` uses the account's configured rate.
pub struct Invest {
    pub amount: Decimal,
    pub months: i32,
    pub monthly_rate: Option<Decimal>,
}
