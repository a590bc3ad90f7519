//! Types for InfluxQL literal values.

use crate::string::{write_quoted_string, Regex};
use std::fmt::{self, Display, Formatter};

/// Number of nanoseconds in a microsecond.
const NANOS_PER_MICRO: u64 = 1_000;
/// Number of nanoseconds in a millisecond.
const NANOS_PER_MILLI: u64 = 1_000 * NANOS_PER_MICRO;
/// Number of nanoseconds in a second.
const NANOS_PER_SEC: u64 = 1_000 * NANOS_PER_MILLI;
/// Number of nanoseconds in a minute.
const NANOS_PER_MIN: u64 = 60 * NANOS_PER_SEC;
/// Number of nanoseconds in an hour.
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MIN;
/// Number of nanoseconds in a day.
const NANOS_PER_DAY: u64 = 24 * NANOS_PER_HOUR;
/// Number of nanoseconds in a week.
const NANOS_PER_WEEK: u64 = 7 * NANOS_PER_DAY;

/// Units a [`Duration`] may be rendered in, largest first.
const DURATION_UNITS: [(u64, &str); 8] = [
    (NANOS_PER_WEEK, "w"),
    (NANOS_PER_DAY, "d"),
    (NANOS_PER_HOUR, "h"),
    (NANOS_PER_MIN, "m"),
    (NANOS_PER_SEC, "s"),
    (NANOS_PER_MILLI, "ms"),
    (NANOS_PER_MICRO, "u"),
    (1, "ns"),
];

/// A signed duration with nanosecond precision.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Duration(pub i64);

impl Duration {
    /// Returns the duration in nanoseconds.
    pub fn as_nanos(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Duration {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

impl Display for Duration {
    /// Renders the duration using the largest unit that represents it exactly.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0s");
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        let nanos = self.0.unsigned_abs();
        let (per, unit) = DURATION_UNITS
            .iter()
            .find(|(per, _)| nanos % per == 0)
            .copied()
            .unwrap_or((1, "ns"));
        write!(f, "{sign}{}{unit}", nanos / per)
    }
}

/// A literal value that may appear in an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Signed integer literal.
    Integer(i64),

    /// Unsigned integer literal.
    Unsigned(u64),

    /// Float literal.
    Float(f64),

    /// Unescaped string literal.
    String(String),

    /// Boolean literal.
    Boolean(bool),

    /// Duration literal, such as `5m`.
    Duration(Duration),

    /// Regular expression literal.
    Regex(Regex),
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<u64> for Literal {
    fn from(v: u64) -> Self {
        Self::Unsigned(v)
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<Duration> for Literal {
    fn from(v: Duration) -> Self {
        Self::Duration(v)
    }
}

impl From<Regex> for Literal {
    fn from(v: Regex) -> Self {
        Self::Regex(v)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write_quoted_string(f, v),
            Self::Boolean(v) => write!(f, "{}", if *v { "true" } else { "false" }),
            Self::Duration(v) => write!(f, "{v}"),
            Self::Regex(v) => write!(f, "{v}"),
        }
    }
}
