use crate::adapter::ManualClock;
use crate::domain::{BankConfig, BankError, OperationEvent, ScriptEntry, User, format_amount};
use crate::service::{Account, boot};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::{Read, Write};

/// Counts of what a replay did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// One exported journal line
#[derive(Debug, Serialize)]
struct JournalRow<'a> {
    sequence: u64,
    timestamp: String,
    #[serde(rename = "type")]
    operation: &'static str,
    amount: String,
    profit: String,
    entry: &'a str,
}

/// Drives an account from a CSV script instead of a terminal.
///
/// The account runs on a [`ManualClock`] that follows the `date` column, so a script can
/// cross calendar days and exercise the daily withdrawal window deterministically.
pub struct Orchestrator {
    account: Account,
    clock: ManualClock,
}

impl Orchestrator {
    pub fn new(owner: User, config: BankConfig, start_date: NaiveDate) -> Result<Self, BankError> {
        let clock = ManualClock::new(start_date);
        let account = boot(owner, config, Box::new(clock.clone()))?;
        Ok(Self { account, clock })
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    pub fn into_account(self) -> Account {
        self.account
    }

    /// Apply every script line in order.
    ///
    /// Business-rule rejections are logged and counted; a row that cannot be parsed aborts
    /// the replay.
    pub fn process<R: Read>(
        &mut self,
        script: R,
    ) -> Result<ReplaySummary, Box<dyn std::error::Error>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(script);

        let mut summary = ReplaySummary::default();
        let mut line_num = 0;

        for result in rdr.deserialize() {
            line_num += 1;
            let entry: ScriptEntry = result?;

            if let Some(date) = entry.date {
                self.clock.set(date);
            }

            match self.account.execute(entry.command) {
                Ok(_) => summary.accepted += 1,
                Err(e) => {
                    tracing::warn!(line = line_num, error = %e, "Script line rejected");
                    summary.rejected += 1;
                }
            }
        }

        tracing::info!(
            accepted = summary.accepted,
            rejected = summary.rejected,
            "Replay finished"
        );

        Ok(summary)
    }

    /// Write the journal as CSV, one row per entry in log order
    pub fn output_csv<W: Write>(
        account: &Account,
        writer: W,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        wtr.write_record(["sequence", "timestamp", "type", "amount", "profit", "entry"])?;

        for envelope in account.journal().replay() {
            let profit = match &envelope.event {
                OperationEvent::Invested(event) => format_amount(&event.profit),
                _ => String::new(),
            };
            let entry = envelope.event.log_entry(account.config());

            wtr.serialize(JournalRow {
                sequence: envelope.sequence_nr,
                timestamp: envelope.timestamp.to_rfc3339(),
                operation: envelope.event.kind(),
                amount: format_amount(&envelope.event.amount()),
                profit,
                entry: &entry,
            })?;
        }

        wtr.flush()?;
        Ok(())
    }
}
