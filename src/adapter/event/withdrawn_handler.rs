use crate::{
    domain::{AccountState, DailyWindow, Withdrawn},
    port::EventHandler,
};

impl EventHandler for Withdrawn {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        if state.balance < self.amount {
            return None;
        }

        Some(AccountState {
            balance: state.balance - self.amount,
            window: DailyWindow {
                date: state.window.date,
                withdrawals: state.window.withdrawals.checked_add(1)?,
                withdrawn: state.window.withdrawn.checked_add(self.amount)?,
            },
        })
    }
}
