//! Inclusive date spans with day indexing.

use chrono::NaiveDateTime;

use crate::error::TimelineError;

/// An inclusive span between two datetimes.
///
/// The span defines both the daily-series axis (one value per calendar day
/// from the start date through the end date) and the bounds of the sub-daily
/// sample grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateSpan {
    /// Creates a span from `start` to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::EndBeforeStart`] if `end < start`. Equal
    /// endpoints form a valid single-instant span.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, TimelineError> {
        if end < start {
            return Err(TimelineError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start datetime.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end datetime.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the number of calendar days covered, both endpoints included.
    ///
    /// A same-day span counts as 1.
    pub fn n_days(&self) -> usize {
        let days = (self.end.date() - self.start.date()).num_days();
        days as usize + 1
    }

    /// Returns the day index of `ts` relative to the start date, clamped to
    /// `[0, n_days - 1]`.
    pub fn day_index_of(&self, ts: NaiveDateTime) -> usize {
        let days = (ts.date() - self.start.date()).num_days();
        let max = self.n_days() as i64 - 1;
        days.clamp(0, max) as usize
    }

    /// Returns the span duration in whole seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}
