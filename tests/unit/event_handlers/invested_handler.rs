use banking::domain::*;
use banking::port::EventHandler;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn state(balance: i64) -> AccountState {
    AccountState {
        balance: Decimal::from(balance),
        window: DailyWindow::opened_on(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
    }
}

fn invested(amount: i64, profit: Decimal) -> Invested {
    Invested {
        amount: Decimal::from(amount),
        months: 12,
        monthly_rate: Decimal::new(1, 2),
        profit,
    }
}

#[test]
fn test_invested_credits_profit() {
    let event = invested(100, Decimal::new(1268, 2));

    let new_state = event.apply(&state(150)).expect("Should apply successfully");

    assert_eq!(new_state.balance, Decimal::new(16268, 2));
}

#[test]
fn test_invested_applies_loss() {
    let event = invested(100, Decimal::new(-99, 2));

    let new_state = event.apply(&state(100)).expect("Should apply successfully");

    assert_eq!(new_state.balance, Decimal::new(9901, 2));
}

#[test]
fn test_invested_requires_principal() {
    let event = invested(200, Decimal::ONE);

    assert!(event.apply(&state(100)).is_none());
}

#[test]
fn test_invested_never_goes_negative() {
    let event = invested(100, Decimal::from(-101));

    assert!(event.apply(&state(100)).is_none());
}
