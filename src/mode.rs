use crate::calendar::Granularity;
use std::str::FromStr;
use thiserror::Error;

/// Estimated height of a week page when none is given
pub const DEFAULT_WEEK_HEIGHT: f64 = 400.0;

/// Whether a grid pages through months or through weeks
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CalendarMode {
    #[default]
    Month,
    /// `estimated_height` is a layout hint for the host and takes no part in
    /// any date computation.
    Week { estimated_height: f64 },
}

impl CalendarMode {
    pub fn week() -> Self {
        CalendarMode::Week {
            estimated_height: DEFAULT_WEEK_HEIGHT,
        }
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            CalendarMode::Month => Granularity::Month,
            CalendarMode::Week { .. } => Granularity::Week,
        }
    }

    pub fn estimated_height(&self) -> Option<f64> {
        match self {
            CalendarMode::Month => None,
            CalendarMode::Week { estimated_height } => Some(*estimated_height),
        }
    }
}

impl FromStr for CalendarMode {
    type Err = ParseModeError;

    /// Parses `month`, `week`, or `week:HEIGHT`
    fn from_str(s: &str) -> Result<CalendarMode, ParseModeError> {
        let (name, height) = match s.split_once(':') {
            Some((name, height)) => (name, Some(height)),
            None => (s, None),
        };
        match (name.to_ascii_lowercase().as_str(), height) {
            ("month", None) => Ok(CalendarMode::Month),
            ("week", None) => Ok(CalendarMode::week()),
            ("week", Some(height)) => match height.parse::<f64>() {
                Ok(h) if h.is_finite() && h.is_sign_positive() => Ok(CalendarMode::Week {
                    estimated_height: h,
                }),
                _ => Err(ParseModeError::Height(height.to_owned())),
            },
            _ => Err(ParseModeError::Mode(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseModeError {
    #[error("invalid calendar mode {0:?}; expected \"month\", \"week\", or \"week:HEIGHT\"")]
    Mode(String),
    #[error("invalid week height {0:?}")]
    Height(String),
}
