//! Page and day computations for paged calendar grids.
//!
//! A grid shows a [`DateInterval`] one page at a time, where a page is either
//! a calendar month or a calendar week ([`CalendarMode`]).  [`pages()`] splits
//! the interval into [`PageAnchor`]s, and [`days()`] lists the [`GridDate`]
//! cells of a single page as whole rows of seven days, marking which cells
//! are padding from neighboring months.  [`DateGrid`] ties these together for
//! a host that renders cells through a callback.
//!
//! All computations are made against a [`CalendarSystem`], which decides
//! where weeks start and where month boundaries fall; [`Gregorian`] is the
//! stock implementation.
mod calendar;
mod days;
mod grid;
mod interval;
mod mode;
mod page;
pub use crate::calendar::{
    parse_weekday, CalendarSystem, Granularity, Gregorian, ParseWeekdayError, DAYS_IN_WEEK,
};
pub use crate::days::{days, GridDate};
pub use crate::grid::{DateGrid, EndOfIntervalError};
pub use crate::interval::{DateInterval, IntervalError};
pub use crate::mode::{CalendarMode, ParseModeError, DEFAULT_WEEK_HEIGHT};
pub use crate::page::{pages, PageAnchor};
