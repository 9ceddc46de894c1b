use crate::calendar::{CalendarSystem, Granularity};
use crate::interval::DateInterval;
use crate::mode::CalendarMode;
use std::iter::successors;
use time::{Date, Month};
use tracing::{debug, warn};

/// The identity of a single page: the first day of the week or month that the
/// page shows.
///
/// Anchors are always normalized to the start of their unit, so two anchors
/// for the same week or month compare equal no matter which day or time was
/// used to find them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PageAnchor {
    start: Date,
    granularity: Granularity,
}

impl PageAnchor {
    /// Returns the anchor of the week or month containing `date`
    pub fn containing<C: CalendarSystem + ?Sized>(
        granularity: Granularity,
        date: Date,
        calendar: &C,
    ) -> Option<PageAnchor> {
        let start = calendar.start_of(granularity, date)?;
        Some(PageAnchor { start, granularity })
    }

    /// The first day of the page's week or month
    pub fn start(&self) -> Date {
        self.start
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> Month {
        self.start.month()
    }

    /// Tests whether `date` falls in this page's own week or month
    pub fn contains<C: CalendarSystem + ?Sized>(&self, date: Date, calendar: &C) -> bool {
        calendar.is_same(self.start, date, self.granularity)
    }

    pub fn next<C: CalendarSystem + ?Sized>(&self, calendar: &C) -> Option<PageAnchor> {
        self.step(1, calendar)
    }

    pub fn previous<C: CalendarSystem + ?Sized>(&self, calendar: &C) -> Option<PageAnchor> {
        self.step(-1, calendar)
    }

    fn step<C: CalendarSystem + ?Sized>(&self, count: i32, calendar: &C) -> Option<PageAnchor> {
        let date = calendar.add(self.granularity, count, self.start)?;
        PageAnchor::containing(self.granularity, date, calendar)
    }
}

/// Computes the pages covering `interval`, from the page containing its start
/// through the page containing its end, one week or month apart.
///
/// A reversed interval has no pages.
pub fn pages<C: CalendarSystem + ?Sized>(
    interval: DateInterval,
    mode: CalendarMode,
    calendar: &C,
) -> Vec<PageAnchor> {
    if interval.is_reversed() {
        debug!(
            start = %interval.start(),
            end = %interval.end(),
            "Interval is reversed; no pages"
        );
        return Vec::new();
    }
    let unit = mode.granularity();
    let Some((first, last)) = endpoint_anchors(interval, unit, calendar) else {
        warn!(
            start = %interval.start(),
            end = %interval.end(),
            "Interval lies outside the calendar's range of dates"
        );
        return Vec::new();
    };
    let anchors = successors(Some(first), |a| a.next(calendar).filter(|b| b > a))
        .take_while(|a| *a <= last)
        .collect::<Vec<_>>();
    if anchors.last() != Some(&last) {
        let stopped_at = anchors.last().map_or(first.start, |a| a.start);
        warn!(
            %stopped_at,
            expected = %last.start,
            "Calendar stopped advancing before the end of the interval"
        );
    }
    debug!(
        ?unit,
        count = anchors.len(),
        first = %first.start,
        last = %last.start,
        "Computed pages"
    );
    anchors
}

fn endpoint_anchors<C: CalendarSystem + ?Sized>(
    interval: DateInterval,
    unit: Granularity,
    calendar: &C,
) -> Option<(PageAnchor, PageAnchor)> {
    let start = calendar.date_of(interval.start())?;
    let end = calendar.date_of(interval.end())?;
    Some((
        PageAnchor::containing(unit, start, calendar)?,
        PageAnchor::containing(unit, end, calendar)?,
    ))
}
