use crate::calendar::CalendarSystem;
use crate::days::{days, GridDate};
use crate::interval::DateInterval;
use crate::mode::CalendarMode;
use crate::page::{pages, PageAnchor};
use std::fmt;
use thiserror::Error;
use time::Date;
use tracing::debug;

/// A paged calendar grid over an interval.
///
/// The grid keeps the list of pages for its interval, mode, and calendar up to
/// date, tracks which page is selected, and feeds the cells of a page to the
/// `content` callback when asked to render it.
///
/// A host that only learns its calendar after the grid is built can create
/// the grid with [`DateGrid::new()`], which uses `C::default()` until
/// [`DateGrid::set_calendar()`] is called.
pub struct DateGrid<C, F> {
    interval: DateInterval,
    mode: CalendarMode,
    calendar: C,
    calendar_configured: bool,
    pages: Vec<PageAnchor>,
    // Index into `pages`; always 0 when `pages` is empty
    selected: usize,
    content: F,
}

impl<C: CalendarSystem + Default, F: FnMut(GridDate)> DateGrid<C, F> {
    pub fn new(interval: DateInterval, mode: CalendarMode, content: F) -> Self {
        let mut grid = DateGrid::with_calendar(interval, mode, C::default(), content);
        grid.calendar_configured = false;
        grid
    }
}

impl<C: CalendarSystem, F: FnMut(GridDate)> DateGrid<C, F> {
    pub fn with_calendar(
        interval: DateInterval,
        mode: CalendarMode,
        calendar: C,
        content: F,
    ) -> Self {
        let pages = pages(interval, mode, &calendar);
        DateGrid {
            interval,
            mode,
            calendar,
            calendar_configured: true,
            pages,
            selected: 0,
            content,
        }
    }

    /// Selects the page containing `date`, if there is one
    pub fn selecting(mut self, date: Date) -> Self {
        self.select_date(date);
        self
    }

    pub fn interval(&self) -> DateInterval {
        self.interval
    }

    pub fn mode(&self) -> CalendarMode {
        self.mode
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Returns `false` while the grid is still using its placeholder calendar
    pub fn is_calendar_configured(&self) -> bool {
        self.calendar_configured
    }

    pub fn set_calendar(&mut self, calendar: C) {
        self.calendar = calendar;
        self.calendar_configured = true;
        debug!(
            first_weekday = %self.calendar.first_weekday(),
            "Calendar configured"
        );
        self.recompute();
    }

    pub fn set_interval(&mut self, interval: DateInterval) {
        self.interval = interval;
        self.recompute();
    }

    pub fn set_mode(&mut self, mode: CalendarMode) {
        self.mode = mode;
        self.recompute();
    }

    // The selection follows the first day of the previously selected page if
    // that day is still covered.
    fn recompute(&mut self) {
        let selected = self.selected_page().map(|p| p.start());
        self.pages = pages(self.interval, self.mode, &self.calendar);
        self.selected = selected.and_then(|d| self.index_for(d)).unwrap_or(0);
    }

    pub fn pages(&self) -> &[PageAnchor] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the index of the page whose own week or month contains `date`
    pub fn index_for(&self, date: Date) -> Option<usize> {
        self.pages
            .iter()
            .position(|p| p.contains(date, &self.calendar))
    }

    pub fn anchor_at(&self, index: usize) -> Option<PageAnchor> {
        self.pages.get(index).copied()
    }

    pub fn days_at(&self, index: usize) -> Option<Vec<GridDate>> {
        self.anchor_at(index).map(|a| days(a, &self.calendar))
    }

    /// Returns `None` if the grid has no pages
    pub fn selected_index(&self) -> Option<usize> {
        (!self.pages.is_empty()).then_some(self.selected)
    }

    pub fn selected_page(&self) -> Option<PageAnchor> {
        self.anchor_at(self.selected)
    }

    /// Selects the page containing `date` and returns its index.  If no page
    /// contains `date`, the selection is left unchanged.
    pub fn select_date(&mut self, date: Date) -> Option<usize> {
        let index = self.index_for(date)?;
        self.selected = index;
        Some(index)
    }

    /// Selects the page at `index`.  If there is no such page, the selection
    /// is left unchanged.
    pub fn select_index(&mut self, index: usize) -> Option<PageAnchor> {
        let anchor = self.anchor_at(index)?;
        self.selected = index;
        Some(anchor)
    }

    pub fn next_page(&mut self) -> Result<PageAnchor, EndOfIntervalError> {
        self.select_index(self.selected + 1).ok_or(EndOfIntervalError)
    }

    pub fn previous_page(&mut self) -> Result<PageAnchor, EndOfIntervalError> {
        self.selected
            .checked_sub(1)
            .and_then(|i| self.select_index(i))
            .ok_or(EndOfIntervalError)
    }

    /// Passes each cell of the selected page to the content callback and
    /// returns the number of cells
    pub fn render(&mut self) -> usize {
        self.render_page(self.selected).unwrap_or(0)
    }

    /// Passes each cell of the page at `index` to the content callback and
    /// returns the number of cells, or `None` if there is no such page
    pub fn render_page(&mut self, index: usize) -> Option<usize> {
        let days = self.days_at(index)?;
        let qty = days.len();
        for d in days {
            (self.content)(d);
        }
        Some(qty)
    }
}

impl<C: fmt::Debug, F> fmt::Debug for DateGrid<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateGrid")
            .field("interval", &self.interval)
            .field("mode", &self.mode)
            .field("calendar", &self.calendar)
            .field("calendar_configured", &self.calendar_configured)
            .field("pages", &self.pages)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of the interval")]
pub struct EndOfIntervalError;
