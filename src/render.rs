use dategrid::{Granularity, GridDate, PageAnchor, DAYS_IN_WEEK};
use std::iter::successors;
use time::Weekday;

/// Collects the cells handed out by a `DateGrid` and lays them out as rows of
/// text, one row per week
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TextGrid {
    first_weekday: Weekday,
    cells: Vec<GridDate>,
}

impl TextGrid {
    pub(crate) fn new(first_weekday: Weekday) -> Self {
        TextGrid {
            first_weekday,
            cells: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, cell: GridDate) {
        self.cells.push(cell);
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        let Some(first) = self.cells.first() else {
            return Vec::new();
        };
        let mut lines = vec![page_title(first.page()), self.header()];
        for week in self.cells.chunks(DAYS_IN_WEEK) {
            let row = week.iter().map(show).collect::<String>();
            lines.push(row.trim_end().to_owned());
        }
        lines
    }

    fn header(&self) -> String {
        let mut row = String::new();
        for wd in successors(Some(self.first_weekday), |wd| Some(wd.next())).take(DAYS_IN_WEEK) {
            row.push(' ');
            row.push_str(&abbreviate(wd));
            row.push(' ');
        }
        row.trim_end().to_owned()
    }
}

pub(crate) fn page_title(anchor: PageAnchor) -> String {
    match anchor.granularity() {
        Granularity::Month => format!("{} {}", anchor.month(), anchor.year()),
        Granularity::Week => format!("Week of {}", anchor.start()),
    }
}

fn abbreviate(wd: Weekday) -> String {
    wd.to_string().chars().take(2).collect()
}

// Padding days from neighboring months are parenthesized
fn show(cell: &GridDate) -> String {
    let day = cell.date().day();
    if cell.is_own() {
        format!(" {day:2} ")
    } else {
        format!("({day:2})")
    }
}
