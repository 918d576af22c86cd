use crate::{
    domain::{AccountState, Invested},
    port::EventHandler,
};
use rust_decimal::Decimal;

impl EventHandler for Invested {
    /// Debits the principal, then credits principal plus profit.
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        if state.balance < self.amount {
            return None;
        }

        let committed = state.balance - self.amount;
        let matured = self.amount.checked_add(self.profit)?;
        let balance = committed.checked_add(matured)?;
        if balance < Decimal::ZERO {
            return None;
        }

        Some(AccountState {
            balance,
            window: state.window,
        })
    }
}
