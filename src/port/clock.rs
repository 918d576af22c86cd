use chrono::{DateTime, NaiveDate, Utc};

/// Source of the business date that scopes the daily withdrawal window.
pub trait Clock {
    /// Calendar date the daily counters are checked against.
    fn today(&self) -> NaiveDate;

    /// Timestamp stamped on journal entries.
    fn now(&self) -> DateTime<Utc>;
}
