use crate::adapter::{AccountEngine, CommandProcessor, InMemoryJournal};
use crate::domain::{BankError, BankConfig, User};
use crate::port::Clock;
use crate::service::Account;

/// Validate the configuration and open the session's account
///
/// This creates all the infrastructure:
/// - InMemoryJournal (the transaction log, discarded on exit)
/// - CommandProcessor (validation rules parameterised by the config)
/// - AccountEngine (validate -> apply -> record)
pub fn boot(owner: User, config: BankConfig, clock: Box<dyn Clock>) -> Result<Account, BankError> {
    config.validate()?;

    tracing::info!(
        owner = %owner.name,
        max_daily_withdrawals = config.max_daily_withdrawals,
        daily_withdrawal_limit = %config.daily_withdrawal_limit,
        monthly_rate = %config.monthly_rate,
        "Account opened"
    );

    let engine = AccountEngine::new(Box::new(CommandProcessor::new(config)));

    Ok(Account::new(
        owner,
        Box::new(engine),
        Box::new(InMemoryJournal::new()),
        clock,
    ))
}
