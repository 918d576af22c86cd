use crate::{
    domain::{
        AccountState, BankConfig, BankError, Deposit, Invest, OperationCommand, Receipt,
        Statement, User, Withdraw,
    },
    port::{Clock, Engine, Journal},
};
use rust_decimal::Decimal;

/// The account aggregate: owner, current state, transaction log and the rules that guard them.
///
/// Every operation runs to completion before returning. A rejected operation returns the
/// reason and leaves balance, counters and log exactly as they were.
pub struct Account {
    owner: User,
    state: AccountState,
    journal: Box<dyn Journal>,
    engine: Box<dyn Engine>,
    clock: Box<dyn Clock>,
}

impl Account {
    /// Assemble an account with a zero balance and a daily window opened today.
    ///
    /// Prefer [`crate::service::boot`], which also wires the default adapters.
    pub fn new(
        owner: User,
        engine: Box<dyn Engine>,
        journal: Box<dyn Journal>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let state = AccountState::opened_on(clock.today());
        Self {
            owner,
            state,
            journal,
            engine,
            clock,
        }
    }

    pub fn owner(&self) -> &User {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.state.balance
    }

    /// Current state as stored. The daily window may still refer to an earlier date until the
    /// next withdrawal or statement brings it up to date.
    pub fn state(&self) -> &AccountState {
        &self.state
    }

    pub fn config(&self) -> &BankConfig {
        self.engine.processor().config()
    }

    pub fn journal(&self) -> &dyn Journal {
        self.journal.as_ref()
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<Receipt, BankError> {
        self.execute(OperationCommand::Deposit(Deposit { amount }))
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<Receipt, BankError> {
        self.execute(OperationCommand::Withdrawal(Withdraw { amount }))
    }

    /// Invest at the configured monthly rate.
    pub fn invest(&mut self, amount: Decimal, months: i32) -> Result<Receipt, BankError> {
        self.execute(OperationCommand::Investment(Invest {
            amount,
            months,
            monthly_rate: None,
        }))
    }

    pub fn invest_with_rate(
        &mut self,
        amount: Decimal,
        months: i32,
        monthly_rate: Decimal,
    ) -> Result<Receipt, BankError> {
        self.execute(OperationCommand::Investment(Invest {
            amount,
            months,
            monthly_rate: Some(monthly_rate),
        }))
    }

    /// Render the statement. Brings the daily window up to date first.
    pub fn statement(&mut self) -> Statement {
        self.roll_daily_window();

        Statement::render(
            &self.owner,
            &self.journal.replay(),
            &self.state,
            self.engine.processor().config(),
        )
    }

    pub fn execute(&mut self, command: OperationCommand) -> Result<Receipt, BankError> {
        if command.reads_daily_window() {
            self.roll_daily_window();
        }

        let kind = command.kind();

        let timestamp = self.clock.now();
        match self
            .engine
            .process_command(command, &self.state, self.journal.as_mut(), timestamp)
        {
            Ok((envelope, new_state)) => {
                self.state = new_state;
                tracing::debug!(
                    operation = kind,
                    sequence_nr = envelope.sequence_nr,
                    amount = %envelope.event.amount(),
                    balance = %self.state.balance,
                    "Operation accepted"
                );
                Ok(Receipt {
                    envelope,
                    balance: self.state.balance,
                    currency: self.config().currency.clone(),
                })
            }
            Err(e) => {
                tracing::warn!(operation = kind, error = %e, "Operation rejected");
                Err(e)
            }
        }
    }

    /// Lazy daily reset: zero the withdrawal counters when the business date has changed.
    fn roll_daily_window(&mut self) {
        let today = self.clock.today();
        if self.state.window.date != today {
            tracing::debug!(
                from = %self.state.window.date,
                to = %today,
                "Daily withdrawal window reset"
            );
            self.state.window = self.state.window.rolled_to(today);
        }
    }
}
