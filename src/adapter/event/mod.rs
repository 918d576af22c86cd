mod deposited_handler;
mod invested_handler;
mod withdrawn_handler;

use crate::domain::{AccountState, OperationEvent};
use crate::port::EventHandler;

impl EventHandler for OperationEvent {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        match self {
            OperationEvent::Deposited(event) => event.apply(state),
            OperationEvent::Withdrawn(event) => event.apply(state),
            OperationEvent::Invested(event) => event.apply(state),
        }
    }
}
