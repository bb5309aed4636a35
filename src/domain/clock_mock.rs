use crate::domain::clock::Clock;

use chrono::{Days, NaiveDate};
use std::sync::{Arc, PoisonError, RwLock};

/// Settable clock. Clones share the same date, so a test can hand one copy
/// to the hotel and move time forward through another.
#[derive(Debug, Clone)]
pub struct MockClock {
    pub date: Arc<RwLock<NaiveDate>>,
}

impl MockClock {
    pub fn new(date: NaiveDate) -> MockClock {
        MockClock { date: Arc::new(RwLock::new(date)) }
    }

    pub fn set_today(&self, date: NaiveDate) {
        *self.date.write().unwrap_or_else(PoisonError::into_inner) = date;
    }

    pub fn advance_days(&self, days: u64) {
        let mut guard = self.date.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(next) = guard.checked_add_days(Days::new(days)) {
            *guard = next;
        }
    }
}

impl Clock for MockClock {
    fn today(&self) -> NaiveDate {
        *self.date.read().unwrap_or_else(PoisonError::into_inner)
    }
}
