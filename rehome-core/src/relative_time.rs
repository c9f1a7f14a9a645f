//! "3 hours ago" style distances for listing timestamps
use chrono::{DateTime, Utc};
use std::fmt;

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Coarse bucket for the gap between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    LessThanMinute,
    Minutes(u32),
    AboutHours(u32),
    Days(u32),
    AboutMonths(u32),
    Months(u32),
    AboutYears(u32),
    OverYears(u32),
    AlmostYears(u32),
}

impl Span {
    /// Translation key suffix for this bucket.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LessThanMinute => "less_than_minute",
            Self::Minutes(_) => "minutes",
            Self::AboutHours(_) => "about_hours",
            Self::Days(_) => "days",
            Self::AboutMonths(_) => "about_months",
            Self::Months(_) => "months",
            Self::AboutYears(_) => "about_years",
            Self::OverYears(_) => "over_years",
            Self::AlmostYears(_) => "almost_years",
        }
    }

    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            Self::LessThanMinute => 1,
            Self::Minutes(n)
            | Self::AboutHours(n)
            | Self::Days(n)
            | Self::AboutMonths(n)
            | Self::Months(n)
            | Self::AboutYears(n)
            | Self::OverYears(n)
            | Self::AlmostYears(n) => n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub span: Span,
    /// True when the timestamp lies after `now`.
    pub future: bool,
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = match self.span {
            Span::LessThanMinute => "less than a minute".to_string(),
            Span::Minutes(n) => plural(n, "minute"),
            Span::AboutHours(n) => format!("about {}", plural(n, "hour")),
            Span::Days(n) => plural(n, "day"),
            Span::AboutMonths(n) => format!("about {}", plural(n, "month")),
            Span::Months(n) => plural(n, "month"),
            Span::AboutYears(n) => format!("about {}", plural(n, "year")),
            Span::OverYears(n) => format!("over {}", plural(n, "year")),
            Span::AlmostYears(n) => format!("almost {}", plural(n, "year")),
        };
        if self.future {
            write!(f, "in {body}")
        } else {
            write!(f, "{body} ago")
        }
    }
}

fn rounded_div(value: i64, by: i64) -> u32 {
    u32::try_from((value + by / 2) / by).unwrap_or(u32::MAX)
}

fn classify(minutes: i64) -> Span {
    match minutes {
        0 => Span::LessThanMinute,
        1..45 => Span::Minutes(u32::try_from(minutes).unwrap_or(u32::MAX)),
        45..90 => Span::AboutHours(1),
        90..MINUTES_IN_DAY => Span::AboutHours(rounded_div(minutes, 60)),
        MINUTES_IN_DAY..2_520 => Span::Days(1),
        2_520..MINUTES_IN_MONTH => Span::Days(rounded_div(minutes, MINUTES_IN_DAY)),
        MINUTES_IN_MONTH..MINUTES_IN_TWO_MONTHS => {
            Span::AboutMonths(rounded_div(minutes, MINUTES_IN_MONTH))
        }
        _ => {
            let months = minutes / MINUTES_IN_MONTH;
            if months < 12 {
                return Span::Months(u32::try_from(months).unwrap_or(u32::MAX));
            }
            let years = u32::try_from(months / 12).unwrap_or(u32::MAX);
            match months % 12 {
                0..3 => Span::AboutYears(years),
                3..9 => Span::OverYears(years),
                _ => Span::AlmostYears(years.saturating_add(1)),
            }
        }
    }
}

/// Distance between an RFC 3339 timestamp and `now`. `None` if unparseable.
#[must_use]
pub fn distance(timestamp: &str, now: DateTime<Utc>) -> Option<RelativeTime> {
    let then = DateTime::parse_from_rfc3339(timestamp).ok()?.with_timezone(&Utc);
    let delta = now.signed_duration_since(then);
    let seconds = delta.num_seconds();
    let minutes = (seconds.abs() + 30) / 60;
    Some(RelativeTime {
        span: classify(minutes),
        future: seconds < 0,
    })
}

/// Distance from `timestamp` to the current wall-clock time.
#[must_use]
pub fn since(timestamp: &str) -> Option<RelativeTime> {
    distance(timestamp, Utc::now())
}
