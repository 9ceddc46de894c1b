use super::util::WeekdayExt;
use super::{CalendarSystem, Granularity};
use time::{Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, UtcOffset, Weekday};

/// The proleptic Gregorian calendar with a configurable first day of the week
/// and time zone.
///
/// The default value starts weeks on Sunday and reads instants in UTC.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Gregorian {
    first_weekday: Weekday,
    offset: UtcOffset,
}

impl Gregorian {
    pub const fn new() -> Self {
        Gregorian {
            first_weekday: Weekday::Sunday,
            offset: UtcOffset::UTC,
        }
    }

    pub fn with_first_weekday(mut self, weekday: Weekday) -> Self {
        self.first_weekday = weekday;
        self
    }

    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Default for Gregorian {
    fn default() -> Self {
        Gregorian::new()
    }
}

impl CalendarSystem for Gregorian {
    fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    fn date_of(&self, instant: OffsetDateTime) -> Option<Date> {
        let shift = i64::from(self.offset.whole_seconds())
            - i64::from(instant.offset().whole_seconds());
        let local = PrimitiveDateTime::new(instant.date(), instant.time());
        local
            .checked_add(Duration::seconds(shift))
            .map(PrimitiveDateTime::date)
    }

    fn start_of(&self, unit: Granularity, date: Date) -> Option<Date> {
        match unit {
            Granularity::Week => date.checked_sub(Duration::days(
                date.weekday().days_since(self.first_weekday).into(),
            )),
            Granularity::Month => Date::from_calendar_date(date.year(), date.month(), 1).ok(),
        }
    }

    fn add(&self, unit: Granularity, count: i32, date: Date) -> Option<Date> {
        match unit {
            Granularity::Week => date.checked_add(Duration::weeks(count.into())),
            Granularity::Month => add_months(date, count),
        }
    }

    fn end_of(&self, unit: Granularity, date: Date) -> Option<Date> {
        let start = self.start_of(unit, date)?;
        match unit {
            Granularity::Week => start.checked_add(Duration::days(6)),
            Granularity::Month => last_day_of_month(start.year(), start.month()),
        }
    }
}

// Days past the end of the target month are clamped to its last day, so Jan
// 31 plus one month is the last day of February.
fn add_months(date: Date, count: i32) -> Option<Date> {
    let month0 = i64::from(u8::from(date.month()) - 1);
    let total = i64::from(date.year()) * 12 + month0 + i64::from(count);
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = Month::try_from(u8::try_from(total.rem_euclid(12) + 1).ok()?).ok()?;
    let last = last_day_of_month(year, month)?;
    Date::from_calendar_date(year, month, date.day().min(last.day())).ok()
}

fn last_day_of_month(year: i32, month: Month) -> Option<Date> {
    if month == Month::December {
        return Date::from_calendar_date(year, month, 31).ok();
    }
    Date::from_calendar_date(year, month.next(), 1)
        .ok()?
        .previous_day()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, offset};

    #[test]
    fn test_default() {
        let cal = Gregorian::default();
        assert_eq!(cal.first_weekday(), Weekday::Sunday);
        assert_eq!(cal.offset(), UtcOffset::UTC);
    }

    #[test]
    fn test_start_of_week() {
        let cal = Gregorian::new();
        assert_eq!(
            cal.start_of(Granularity::Week, date!(2023 - 11 - 16)),
            Some(date!(2023 - 11 - 12))
        );
        assert_eq!(
            cal.start_of(Granularity::Week, date!(2023 - 11 - 12)),
            Some(date!(2023 - 11 - 12))
        );
        assert_eq!(
            cal.start_of(Granularity::Week, date!(2023 - 11 - 18)),
            Some(date!(2023 - 11 - 12))
        );
    }

    #[test]
    fn test_start_of_week_monday_first() {
        let cal = Gregorian::new().with_first_weekday(Weekday::Monday);
        assert_eq!(
            cal.start_of(Granularity::Week, date!(2023 - 11 - 12)),
            Some(date!(2023 - 11 - 06))
        );
        assert_eq!(
            cal.start_of(Granularity::Week, date!(2023 - 11 - 13)),
            Some(date!(2023 - 11 - 13))
        );
        assert_eq!(
            cal.end_of(Granularity::Week, date!(2023 - 11 - 13)),
            Some(date!(2023 - 11 - 19))
        );
    }

    #[test]
    fn test_start_and_end_of_month() {
        let cal = Gregorian::new();
        assert_eq!(
            cal.start_of(Granularity::Month, date!(2024 - 02 - 17)),
            Some(date!(2024 - 02 - 01))
        );
        assert_eq!(
            cal.end_of(Granularity::Month, date!(2024 - 02 - 17)),
            Some(date!(2024 - 02 - 29))
        );
        assert_eq!(
            cal.end_of(Granularity::Month, date!(2023 - 02 - 01)),
            Some(date!(2023 - 02 - 28))
        );
        assert_eq!(
            cal.end_of(Granularity::Month, date!(2023 - 12 - 05)),
            Some(date!(2023 - 12 - 31))
        );
    }

    #[test]
    fn test_add_months_clamps_day() {
        let cal = Gregorian::new();
        assert_eq!(
            cal.add(Granularity::Month, 1, date!(2024 - 01 - 31)),
            Some(date!(2024 - 02 - 29))
        );
        assert_eq!(
            cal.add(Granularity::Month, 1, date!(2023 - 01 - 31)),
            Some(date!(2023 - 02 - 28))
        );
        assert_eq!(
            cal.add(Granularity::Month, 2, date!(2024 - 11 - 15)),
            Some(date!(2025 - 01 - 15))
        );
        assert_eq!(
            cal.add(Granularity::Month, -1, date!(2024 - 01 - 15)),
            Some(date!(2023 - 12 - 15))
        );
        assert_eq!(
            cal.add(Granularity::Month, -13, date!(2024 - 03 - 31)),
            Some(date!(2023 - 02 - 28))
        );
    }

    #[test]
    fn test_add_weeks() {
        let cal = Gregorian::new();
        assert_eq!(
            cal.add(Granularity::Week, 1, date!(2023 - 12 - 31)),
            Some(date!(2024 - 01 - 07))
        );
        assert_eq!(
            cal.add(Granularity::Week, -2, date!(2024 - 01 - 07)),
            Some(date!(2023 - 12 - 24))
        );
    }

    #[test]
    fn test_add_past_end_of_time() {
        let cal = Gregorian::new();
        assert_eq!(cal.add(Granularity::Month, 1, Date::MAX), None);
        assert_eq!(cal.add(Granularity::Week, 1, Date::MAX), None);
        assert_eq!(
            cal.end_of(Granularity::Month, Date::MAX),
            Some(Date::MAX)
        );
    }

    #[test]
    fn test_is_same() {
        let cal = Gregorian::new();
        assert!(cal.is_same(
            date!(2024 - 01 - 01),
            date!(2024 - 01 - 31),
            Granularity::Month
        ));
        assert!(!cal.is_same(
            date!(2024 - 01 - 31),
            date!(2024 - 02 - 01),
            Granularity::Month
        ));
        assert!(cal.is_same(
            date!(2024 - 01 - 31),
            date!(2024 - 02 - 03),
            Granularity::Week
        ));
        assert!(!cal.is_same(
            date!(2024 - 02 - 03),
            date!(2024 - 02 - 04),
            Granularity::Week
        ));
    }

    #[test]
    fn test_date_of_reads_instants_in_offset() {
        let instant = datetime!(2024 - 03 - 10 02:30 UTC);
        assert_eq!(Gregorian::new().date_of(instant), Some(date!(2024 - 03 - 10)));
        let eastern = Gregorian::new().with_offset(offset!(-5));
        assert_eq!(eastern.date_of(instant), Some(date!(2024 - 03 - 09)));
        let tokyo = Gregorian::new().with_offset(offset!(+9));
        assert_eq!(
            tokyo.date_of(datetime!(2024 - 03 - 10 20:00 -05:00)),
            Some(date!(2024 - 03 - 11))
        );
    }

    #[test]
    fn test_by_reference() {
        fn week_start<C: CalendarSystem>(cal: C, date: Date) -> Option<Date> {
            cal.start_of(Granularity::Week, date)
        }

        let cal = Gregorian::new().with_first_weekday(Weekday::Monday);
        assert_eq!(
            week_start(&cal, date!(2024 - 03 - 10)),
            Some(date!(2024 - 03 - 04))
        );
        let dynamic: &dyn CalendarSystem = &cal;
        assert_eq!(
            week_start(dynamic, date!(2024 - 03 - 10)),
            Some(date!(2024 - 03 - 04))
        );
    }
}
