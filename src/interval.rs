use thiserror::Error;
use time::{Date, OffsetDateTime, UtcOffset};

/// A closed range of instants, `[start, end]`
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DateInterval {
    start: OffsetDateTime,
    end: OffsetDateTime,
}

impl DateInterval {
    /// Creates an interval without checking that `start <= end`.  A reversed
    /// interval covers no pages.
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        DateInterval { start, end }
    }

    pub fn try_new(start: OffsetDateTime, end: OffsetDateTime) -> Result<Self, IntervalError> {
        if start > end {
            Err(IntervalError { start, end })
        } else {
            Ok(DateInterval { start, end })
        }
    }

    /// Creates an interval running from midnight UTC on `start` to midnight
    /// UTC on `end`
    pub fn from_dates(start: Date, end: Date) -> Self {
        DateInterval::between_dates(start, end, UtcOffset::UTC)
    }

    /// Creates an interval running from midnight on `start` to midnight on
    /// `end`, both read at the given UTC offset
    pub fn between_dates(start: Date, end: Date, offset: UtcOffset) -> Self {
        DateInterval {
            start: start.midnight().assume_offset(offset),
            end: end.midnight().assume_offset(offset),
        }
    }

    pub fn start(&self) -> OffsetDateTime {
        self.start
    }

    pub fn end(&self) -> OffsetDateTime {
        self.end
    }

    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, instant: OffsetDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("interval start {start} is after its end {end}")]
pub struct IntervalError {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, offset};

    #[test]
    fn test_try_new() {
        let start = datetime!(2024 - 01 - 01 0:00 UTC);
        let end = datetime!(2024 - 12 - 31 0:00 UTC);
        assert_eq!(
            DateInterval::try_new(start, end),
            Ok(DateInterval::new(start, end))
        );
        assert_eq!(
            DateInterval::try_new(start, start),
            Ok(DateInterval::new(start, start))
        );
        assert_eq!(
            DateInterval::try_new(end, start),
            Err(IntervalError {
                start: end,
                end: start
            })
        );
    }

    #[test]
    fn test_reversed() {
        let interval = DateInterval::from_dates(date!(2024 - 02 - 01), date!(2024 - 01 - 01));
        assert!(interval.is_reversed());
        assert!(!interval.contains(datetime!(2024 - 01 - 15 0:00 UTC)));
    }

    #[test]
    fn test_from_dates() {
        let interval = DateInterval::from_dates(date!(2024 - 01 - 01), date!(2024 - 12 - 31));
        assert_eq!(interval.start(), datetime!(2024 - 01 - 01 0:00 UTC));
        assert_eq!(interval.end(), datetime!(2024 - 12 - 31 0:00 UTC));
        assert!(!interval.is_reversed());
        assert!(interval.contains(datetime!(2024 - 06 - 15 12:00 UTC)));
        assert!(interval.contains(datetime!(2024 - 12 - 31 0:00 UTC)));
        assert!(!interval.contains(datetime!(2024 - 12 - 31 0:01 UTC)));
    }

    #[test]
    fn test_between_dates() {
        let interval =
            DateInterval::between_dates(date!(2024 - 03 - 10), date!(2024 - 03 - 10), offset!(-5));
        assert_eq!(interval.start(), datetime!(2024 - 03 - 10 5:00 UTC));
        assert_eq!(interval.start(), interval.end());
    }
}
