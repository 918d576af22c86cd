use banking::domain::{BankConfig, User};
use banking::service::{Orchestrator, ReplaySummary};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn orchestrator() -> Orchestrator {
    Orchestrator::new(
        User::new("Ana Souza", "12345678900"),
        BankConfig::default(),
        start(),
    )
    .unwrap()
}

#[test]
fn test_replay_single_day() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "date,type,amount,months,rate").unwrap();
    writeln!(temp_file, ",deposit,1000.00,,").unwrap();
    writeln!(temp_file, ",withdrawal,200.00,,").unwrap();
    writeln!(temp_file, ",investment,100.00,12,").unwrap();
    temp_file.flush().unwrap();

    let mut orchestrator = orchestrator();
    let summary = orchestrator
        .process(std::fs::File::open(temp_file.path()).unwrap())
        .unwrap();

    assert_eq!(
        summary,
        ReplaySummary {
            accepted: 3,
            rejected: 0
        }
    );
    assert_eq!(orchestrator.account().balance(), Decimal::new(81268, 2));
}

#[test]
fn test_replay_counts_rejections_and_crosses_days() {
    let script = "\
date,type,amount,months,rate
2024-03-15,deposit,2000,,
2024-03-15,withdrawal,200,,
2024-03-15,withdrawal,200,,
2024-03-15,withdrawal,100,,
2024-03-15,withdrawal,50,,
2024-03-16,withdrawal,500,,
2024-03-16,withdrawal,0.01,,
";

    let mut orchestrator = orchestrator();
    let summary = orchestrator.process(script.as_bytes()).unwrap();

    assert_eq!(summary.accepted, 5);
    assert_eq!(summary.rejected, 2);
    let account = orchestrator.account_mut();
    assert_eq!(account.balance(), Decimal::from(1000));
    let statement = account.statement();
    assert_eq!(statement.withdrawals_today, 1);
    assert_eq!(statement.withdrawn_today, Decimal::from(500));
}

#[test]
fn test_replay_uses_row_rate() {
    let script = "\
type,amount,months,rate
deposit,1000,,
investment,1000,2,0.05
";

    let mut orchestrator = orchestrator();
    orchestrator.process(script.as_bytes()).unwrap();

    assert_eq!(orchestrator.account().balance(), Decimal::new(110250, 2));
}

#[test]
fn test_replay_aborts_on_malformed_row() {
    let script = "\
type,amount,months,rate
deposit,100,,
teleport,100,,
";

    let mut orchestrator = orchestrator();
    let result = orchestrator.process(script.as_bytes());

    assert!(result.is_err(), "Unknown operation types abort the replay");
}

#[test]
fn test_replay_requires_months_for_investment() {
    let script = "\
type,amount,months,rate
investment,100,,
";

    let mut orchestrator = orchestrator();

    assert!(orchestrator.process(script.as_bytes()).is_err());
}

#[test]
fn test_output_csv_lists_journal() {
    let script = "\
type,amount,months,rate
deposit,500,,
withdrawal,20.5,,
investment,100,12,
";

    let mut orchestrator = orchestrator();
    orchestrator.process(script.as_bytes()).unwrap();

    let mut out = Vec::new();
    Orchestrator::output_csv(orchestrator.account(), &mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "sequence,timestamp,type,amount,profit,entry");
    assert_eq!(
        lines[1],
        "1,2024-03-15T00:00:00+00:00,deposit,500.00,,Deposit: +R$ 500.00"
    );
    assert_eq!(
        lines[2],
        "2,2024-03-15T00:00:00+00:00,withdrawal,20.50,,Withdrawal: -R$ 20.50"
    );
    assert_eq!(
        lines[3],
        "3,2024-03-15T00:00:00+00:00,investment,100.00,12.68,Investment: +R$ 12.68 (after 12 months)"
    );
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_output_csv_on_empty_journal_writes_header() {
    let orchestrator = orchestrator();

    let mut out = Vec::new();
    Orchestrator::output_csv(orchestrator.account(), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "sequence,timestamp,type,amount,profit,entry\n"
    );
}
