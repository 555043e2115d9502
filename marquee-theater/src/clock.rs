use chrono::{NaiveDate, Utc};

/// Source of "today" for schedule construction. Injected into the theater
/// so the schedule never reads the system clock directly and tests stay
/// deterministic.
pub trait DateProvider: Send + Sync {
    fn current_date(&self) -> NaiveDate;
}

/// The real clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn current_date(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A pinned date, for tests and replay
#[derive(Debug, Clone, Copy)]
pub struct FixedDateProvider {
    date: NaiveDate,
}

impl FixedDateProvider {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl DateProvider for FixedDateProvider {
    fn current_date(&self) -> NaiveDate {
        self.date
    }
}
