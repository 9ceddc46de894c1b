mod logging;
mod render;
use crate::render::{page_title, TextGrid};
use anyhow::Context;
use dategrid::{parse_weekday, CalendarMode, DateGrid, DateInterval, Gregorian};
use lexopt::{Arg, Parser, ValueExt};
use time::{format_description::FormatItem, macros::format_description, Date, UtcOffset, Weekday};
use tracing::warn;

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, PartialEq)]
enum Command {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq)]
struct Options {
    start: Date,
    end: Date,
    mode: CalendarMode,
    first_weekday: Weekday,
    date: Option<Date>,
    list: bool,
    verbosity: u8,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut start = None;
        let mut end = None;
        let mut mode = CalendarMode::Month;
        let mut first_weekday = Weekday::Sunday;
        let mut date = None;
        let mut list = false;
        let mut verbosity = 0u8;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('m') | Arg::Long("mode") => mode = parser.value()?.parse()?,
                Arg::Short('f') | Arg::Long("first-weekday") => {
                    first_weekday = parser.value()?.parse_with(parse_weekday)?;
                }
                Arg::Short('d') | Arg::Long("date") => {
                    date = Some(parser.value()?.parse_with(parse_ymd)?);
                }
                Arg::Short('l') | Arg::Long("list") => list = true,
                Arg::Short('v') | Arg::Long("verbose") => verbosity = verbosity.saturating_add(1),
                Arg::Value(value) if start.is_none() => start = Some(value.parse_with(parse_ymd)?),
                Arg::Value(value) if end.is_none() => end = Some(value.parse_with(parse_ymd)?),
                _ => return Err(arg.unexpected()),
            }
        }
        let (Some(start), Some(end)) = (start, end) else {
            return Err("missing START and END dates".into());
        };
        Ok(Command::Run(Options {
            start,
            end,
            mode,
            first_weekday,
            date,
            list,
            verbosity,
        }))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => opts.run(),
            Command::Help => {
                println!("Usage: dategrid [options] <START> <END>");
                println!();
                println!("Show one page of a month- or week-paged calendar grid");
                println!();
                println!("Dates are given as YYYY-MM-DD.  Days from neighboring months are");
                println!("shown in parentheses.");
                println!();
                println!("Options:");
                println!("  -m, --mode <MODE>           Page by \"month\" (default), \"week\", or");
                println!("                              \"week:HEIGHT\"");
                println!("  -f, --first-weekday <DAY>   First day of each week [default: sunday]");
                println!("  -d, --date <DATE>           Show the page containing DATE");
                println!("  -l, --list                  List the pages instead of showing one");
                println!("  -v, --verbose               Log more details to stderr; repeatable");
                println!("  -h, --help                  Display this help message and exit");
                println!("  -V, --version               Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

impl Options {
    fn run(self) -> anyhow::Result<()> {
        logging::init(self.verbosity);
        for line in self.output(host_offset())? {
            println!("{line}");
        }
        Ok(())
    }

    /// Computes the lines to print, reading dates in the time zone `offset`
    fn output(&self, offset: UtcOffset) -> anyhow::Result<Vec<String>> {
        if self.start > self.end {
            anyhow::bail!("start date {} is after end date {}", self.start, self.end);
        }
        let interval = DateInterval::try_new(
            self.start.midnight().assume_offset(offset),
            self.end.midnight().assume_offset(offset),
        )?;
        let mut text = TextGrid::new(self.first_weekday);
        let mut grid =
            DateGrid::<Gregorian, _>::new(interval, self.mode, |cell| text.push(cell));
        // The placeholder calendar is replaced once the host's settings are
        // known, as a GUI host would do after attaching the grid.
        grid.set_calendar(
            Gregorian::new()
                .with_first_weekday(self.first_weekday)
                .with_offset(offset),
        );
        if self.list {
            return Ok(grid
                .pages()
                .iter()
                .enumerate()
                .map(|(i, anchor)| format!("{i:>4}  {}", page_title(*anchor)))
                .collect());
        }
        if let Some(date) = self.date {
            grid.select_date(date)
                .with_context(|| format!("{date} is not within {} to {}", self.start, self.end))?;
        }
        grid.render();
        Ok(text.lines())
    }
}

fn parse_ymd(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, &YMD_FMT)
}

fn host_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or_else(|e| {
        warn!("Failed to determine local UTC offset ({e}); using UTC");
        UtcOffset::UTC
    })
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}
