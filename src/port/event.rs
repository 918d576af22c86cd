use crate::domain::AccountState;

/// EventHandler is responsible for applying the event to the state.
///
/// EventHandler#apply is a pure function. `None` means the event does not fit the state
/// (for instance a debit larger than the balance) and nothing must be recorded.
pub trait EventHandler {
    /// Apply the event to the state, returning the next state.
    fn apply(&self, state: &AccountState) -> Option<AccountState>;
}
