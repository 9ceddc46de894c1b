use std::iter::successors;
use thiserror::Error;
use time::{Date, Weekday, Weekday::*};

/// Number of cells in each row of a page's grid
pub const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    /// Number of days from the most recent `first` (inclusive) up to `self`
    fn days_since(&self, first: Weekday) -> u8;
}

impl WeekdayExt for Weekday {
    fn days_since(&self, first: Weekday) -> u8 {
        (7 + self.number_days_from_sunday() - first.number_days_from_sunday()) % 7
    }
}

/// Iterates over `date` and every day after it, stopping at the end of time
pub(crate) fn iter_days_from(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day())
}

/// Parses a weekday from its English name or a two- or three-letter
/// abbreviation, ignoring case
pub fn parse_weekday(s: &str) -> Result<Weekday, ParseWeekdayError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "sunday" | "sun" | "su" => Ok(Sunday),
        "monday" | "mon" | "mo" => Ok(Monday),
        "tuesday" | "tue" | "tu" => Ok(Tuesday),
        "wednesday" | "wed" | "we" => Ok(Wednesday),
        "thursday" | "thu" | "th" => Ok(Thursday),
        "friday" | "fri" | "fr" => Ok(Friday),
        "saturday" | "sat" | "sa" => Ok(Saturday),
        _ => Err(ParseWeekdayError(s.to_owned())),
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid weekday: {0:?}")]
pub struct ParseWeekdayError(String);

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_days_since() {
        assert_eq!(Sunday.days_since(Sunday), 0);
        assert_eq!(Saturday.days_since(Sunday), 6);
        assert_eq!(Sunday.days_since(Monday), 6);
        assert_eq!(Monday.days_since(Monday), 0);
        assert_eq!(Wednesday.days_since(Saturday), 4);
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("Sunday"), Ok(Sunday));
        assert_eq!(parse_weekday("mon"), Ok(Monday));
        assert_eq!(parse_weekday(" TH "), Ok(Thursday));
        assert_eq!(parse_weekday("Saturday"), Ok(Saturday));
        assert_eq!(
            parse_weekday("Funday"),
            Err(ParseWeekdayError(String::from("Funday")))
        );
        assert_eq!(
            parse_weekday("").map_err(|e| e.to_string()),
            Err(String::from("invalid weekday: \"\""))
        );
    }

    #[test]
    fn test_iter_days_from() {
        let mut iter = iter_days_from(date!(2023 - 12 - 30));
        assert_eq!(iter.next(), Some(date!(2023 - 12 - 30)));
        assert_eq!(iter.next(), Some(date!(2023 - 12 - 31)));
        assert_eq!(iter.next(), Some(date!(2024 - 01 - 01)));
    }

    #[test]
    fn test_iter_days_from_end_of_time() {
        let mut iter = iter_days_from(Date::MAX);
        assert_eq!(iter.next(), Some(Date::MAX));
        assert_eq!(iter.next(), None);
    }
}
