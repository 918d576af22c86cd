use banking::domain::*;
use banking::port::CommandHandler;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn state(balance: i64) -> AccountState {
    AccountState {
        balance: Decimal::from(balance),
        window: DailyWindow::opened_on(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
    }
}

#[test]
fn test_deposit_emits_deposited_event() {
    let deposit = Deposit {
        amount: Decimal::new(10050, 2),
    };
    let config = BankConfig::default();
    let state = state(0);

    let entity = deposit.validate(&state, &config).unwrap();
    let events = deposit.emit(&state, &entity, &config).unwrap();

    assert_eq!(
        events,
        vec![OperationEvent::Deposited(Deposited {
            amount: Decimal::new(10050, 2)
        })]
    );
}

#[test]
fn test_deposit_rejects_zero() {
    let deposit = Deposit {
        amount: Decimal::ZERO,
    };

    let result = deposit.validate(&state(100), &BankConfig::default());

    assert_eq!(
        result,
        Err(BankError::Transaction(TransactionError::InvalidAmount))
    );
}

#[test]
fn test_deposit_rejects_negative() {
    let deposit = Deposit {
        amount: Decimal::new(-1, 2),
    };

    let result = deposit.validate(&state(100), &BankConfig::default());

    assert!(result.is_err(), "Should reject negative deposit amounts");
}
