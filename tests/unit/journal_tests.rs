use banking::adapter::InMemoryJournal;
use banking::domain::*;
use banking::port::Journal;
use chrono::Utc;
use rust_decimal::Decimal;

fn deposited(amount: i64) -> OperationEvent {
    OperationEvent::Deposited(Deposited {
        amount: Decimal::from(amount),
    })
}

#[test]
fn test_events_receive_increasing_sequence_numbers() {
    let mut journal = InMemoryJournal::new();

    let first = journal.append(deposited(100), Utc::now());
    let second = journal.append(deposited(50), Utc::now());
    let third = journal.append(
        OperationEvent::Withdrawn(Withdrawn {
            amount: Decimal::from(30),
        }),
        Utc::now(),
    );

    assert_eq!(first.sequence_nr, 1);
    assert_eq!(second.sequence_nr, 2);
    assert_eq!(third.sequence_nr, 3);
    assert_eq!(journal.len(), 3);
}

#[test]
fn test_replay_preserves_insertion_order() {
    let mut journal = InMemoryJournal::new();
    for amount in [5, 1, 3] {
        journal.append(deposited(amount), Utc::now());
    }

    let amounts: Vec<Decimal> = journal
        .replay()
        .iter()
        .map(|envelope| envelope.event.amount())
        .collect();

    assert_eq!(
        amounts,
        vec![Decimal::from(5), Decimal::from(1), Decimal::from(3)]
    );
}

#[test]
fn test_empty_journal() {
    let journal = InMemoryJournal::new();

    assert!(journal.is_empty());
    assert!(journal.replay().is_empty());
}
