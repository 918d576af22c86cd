use crate::{
    domain::{AccountState, Deposited},
    port::EventHandler,
};

impl EventHandler for Deposited {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        Some(AccountState {
            balance: state.balance.checked_add(self.amount)?,
            window: state.window,
        })
    }
}
