//! The calendar rules that page and day computations are evaluated against
mod gregorian;
pub(crate) mod util;
pub use self::gregorian::Gregorian;
pub use self::util::{parse_weekday, ParseWeekdayError, DAYS_IN_WEEK};
use time::{Date, OffsetDateTime, Weekday};

/// The calendar unit at which two dates are compared and at which pages are
/// laid out
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Granularity {
    Week,
    Month,
}

/// A set of calendar rules: where weeks start, where month boundaries fall,
/// and which time zone instants are read in.
///
/// Methods returning `Option` return `None` when the result would lie outside
/// the range of representable dates.
pub trait CalendarSystem {
    /// The weekday in the first column of every grid row
    fn first_weekday(&self) -> Weekday;

    /// Returns the calendar day on which `instant` falls in this calendar's
    /// time zone
    fn date_of(&self, instant: OffsetDateTime) -> Option<Date>;

    /// Returns the first day of the week or month containing `date`
    fn start_of(&self, unit: Granularity, date: Date) -> Option<Date>;

    /// Moves `date` forwards (or, for negative `count`, backwards) by `count`
    /// weeks or months
    fn add(&self, unit: Granularity, count: i32, date: Date) -> Option<Date>;

    /// Returns the last day of the week or month containing `date`
    fn end_of(&self, unit: Granularity, date: Date) -> Option<Date> {
        let start = self.start_of(unit, date)?;
        self.add(unit, 1, start)?.previous_day()
    }

    /// Tests whether `a` and `b` lie in the same week or month
    fn is_same(&self, a: Date, b: Date, unit: Granularity) -> bool {
        match (self.start_of(unit, a), self.start_of(unit, b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}

impl<T: CalendarSystem + ?Sized> CalendarSystem for &T {
    fn first_weekday(&self) -> Weekday {
        (**self).first_weekday()
    }

    fn date_of(&self, instant: OffsetDateTime) -> Option<Date> {
        (**self).date_of(instant)
    }

    fn start_of(&self, unit: Granularity, date: Date) -> Option<Date> {
        (**self).start_of(unit, date)
    }

    fn add(&self, unit: Granularity, count: i32, date: Date) -> Option<Date> {
        (**self).add(unit, count, date)
    }

    fn end_of(&self, unit: Granularity, date: Date) -> Option<Date> {
        (**self).end_of(unit, date)
    }

    fn is_same(&self, a: Date, b: Date, unit: Granularity) -> bool {
        (**self).is_same(a, b, unit)
    }
}
