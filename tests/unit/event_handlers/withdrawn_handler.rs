use banking::domain::*;
use banking::port::EventHandler;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn state(balance: i64) -> AccountState {
    AccountState {
        balance: Decimal::from(balance),
        window: DailyWindow {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            withdrawals: 1,
            withdrawn: Decimal::from(50),
        },
    }
}

#[test]
fn test_withdrawn_updates_balance_and_counters() {
    let event = Withdrawn {
        amount: Decimal::from(30),
    };

    let new_state = event.apply(&state(100)).expect("Should apply successfully");

    assert_eq!(new_state.balance, Decimal::from(70));
    assert_eq!(new_state.window.withdrawals, 2);
    assert_eq!(new_state.window.withdrawn, Decimal::from(80));
    assert_eq!(
        new_state.window.date,
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    );
}

#[test]
fn test_withdrawn_never_goes_negative() {
    let event = Withdrawn {
        amount: Decimal::from(101),
    };

    assert!(
        event.apply(&state(100)).is_none(),
        "Debit larger than the balance must not apply"
    );
}
