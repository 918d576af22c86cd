use banking::domain::*;
use banking::port::CommandHandler;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn state(balance: i64, withdrawals: u32, withdrawn: i64) -> AccountState {
    AccountState {
        balance: Decimal::from(balance),
        window: DailyWindow {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            withdrawals,
            withdrawn: Decimal::from(withdrawn),
        },
    }
}

fn validate(amount: Decimal, state: &AccountState) -> Result<(), BankError> {
    Withdraw { amount }.validate(state, &BankConfig::default())
}

#[test]
fn test_withdrawal_validates_sufficient_funds() {
    let result = validate(Decimal::from(150), &state(100, 0, 0));

    assert_eq!(
        result,
        Err(BankError::Transaction(TransactionError::InsufficientFunds))
    );
}

#[test]
fn test_withdrawal_allows_exact_balance() {
    let withdrawal = Withdraw {
        amount: Decimal::from(100),
    };
    let config = BankConfig::default();
    let state = state(100, 0, 0);

    let entity = withdrawal.validate(&state, &config).unwrap();
    let events = withdrawal.emit(&state, &entity, &config).unwrap();

    assert_eq!(events.len(), 1);
    match &events[0] {
        OperationEvent::Withdrawn(w) => {
            assert_eq!(w.amount, Decimal::from(100));
        }
        _ => panic!("Expected Withdrawn event"),
    }
}

#[test]
fn test_withdrawal_rejects_negative_amount_before_funds() {
    let result = validate(Decimal::from(-5), &state(0, 0, 0));

    assert_eq!(
        result,
        Err(BankError::Transaction(TransactionError::InvalidAmount))
    );
}

#[test]
fn test_withdrawal_rejects_when_count_reached() {
    let result = validate(Decimal::from(10), &state(1000, 3, 300));

    assert_eq!(
        result,
        Err(BankError::Transaction(
            TransactionError::WithdrawalCountExceeded { limit: 3 }
        ))
    );
}

#[test]
fn test_withdrawal_rejects_over_daily_limit() {
    let result = validate(Decimal::new(10001, 2), &state(1000, 2, 400));

    assert_eq!(
        result,
        Err(BankError::Transaction(
            TransactionError::DailyLimitExceeded {
                limit: Decimal::from(500)
            }
        ))
    );
}

#[test]
fn test_withdrawal_allows_reaching_daily_limit() {
    let result = validate(Decimal::from(100), &state(1000, 2, 400));

    assert!(result.is_ok());
}

#[test]
fn test_withdrawal_respects_custom_limits() {
    let config = BankConfig {
        max_daily_withdrawals: 1,
        ..BankConfig::default()
    };
    let withdrawal = Withdraw {
        amount: Decimal::from(1),
    };

    let result = withdrawal.validate(&state(1000, 1, 1), &config);

    assert_eq!(
        result,
        Err(BankError::Transaction(
            TransactionError::WithdrawalCountExceeded { limit: 1 }
        ))
    );
}
