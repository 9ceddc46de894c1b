use crate::calendar::util::{iter_days_from, DAYS_IN_WEEK};
use crate::calendar::{CalendarSystem, Granularity};
use crate::page::PageAnchor;
use time::Date;
use tracing::{trace, warn};

/// A single cell of a page's grid
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GridDate {
    date: Date,
    page: PageAnchor,
    own: bool,
}

impl GridDate {
    pub fn date(&self) -> Date {
        self.date
    }

    /// The page on whose grid this cell appears
    pub fn page(&self) -> PageAnchor {
        self.page
    }

    /// Returns `true` if the date belongs to the page's own week or month
    /// rather than padding out the first or last row from a neighboring month
    pub fn is_own(&self) -> bool {
        self.own
    }
}

/// Computes the cells of the page identified by `anchor`, in chronological
/// order, as whole rows of seven days starting on the calendar's first
/// weekday.
///
/// A month page runs from the start of the week containing the first of the
/// month through the end of the week containing its last day; only the days
/// of the month itself are marked as own.  A week page is the seven days of
/// its week, all marked as own.
///
/// The grid is cut short only if it would run past the last representable
/// date.
pub fn days<C: CalendarSystem + ?Sized>(anchor: PageAnchor, calendar: &C) -> Vec<GridDate> {
    let Some((first, qty)) = grid_span(anchor, calendar) else {
        warn!(anchor = %anchor.start(), "Page lies outside the calendar's range of dates");
        return Vec::new();
    };
    let granularity = anchor.granularity();
    let days = iter_days_from(first)
        .take(qty)
        .map(|date| GridDate {
            date,
            page: anchor,
            own: granularity == Granularity::Week || anchor.contains(date, calendar),
        })
        .collect::<Vec<_>>();
    trace!(anchor = %anchor.start(), ?granularity, count = days.len(), "Enumerated days");
    days
}

// Returns the first date of the grid and the number of dates in it
fn grid_span<C: CalendarSystem + ?Sized>(anchor: PageAnchor, calendar: &C) -> Option<(Date, usize)> {
    match anchor.granularity() {
        Granularity::Week => {
            let first = calendar.start_of(Granularity::Week, anchor.start())?;
            Some((first, DAYS_IN_WEEK))
        }
        Granularity::Month => {
            let first = calendar.start_of(Granularity::Week, anchor.start())?;
            let last = calendar.end_of(Granularity::Month, anchor.start())?;
            let span = usize::try_from((last - first).whole_days()).ok()? + 1;
            Some((first, span.div_ceil(DAYS_IN_WEEK) * DAYS_IN_WEEK))
        }
    }
}
