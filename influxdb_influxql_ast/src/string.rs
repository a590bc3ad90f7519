//! Types and functions for rendering InfluxQL strings and regular expressions.

use std::fmt::{self, Display, Formatter, Write};

/// Write `s` to `f`, replacing every character found in `escapes`
/// with its paired replacement.
pub(crate) fn write_escaped(
    f: &mut Formatter<'_>,
    s: &str,
    escapes: &[(char, &str)],
) -> fmt::Result {
    for c in s.chars() {
        match escapes.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => f.write_str(to)?,
            None => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Write `s` as a single-quoted InfluxQL string literal.
pub(crate) fn write_quoted_string(f: &mut Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('\'')?;
    write_escaped(f, s, &[('\\', r"\\"), ('\'', r"\'"), ('\n', r"\n")])?;
    f.write_char('\'')
}

/// A regular expression, as it appears between `/` delimiters.
///
/// The pattern is stored unescaped and is not validated; compiling it is
/// the concern of whoever evaluates the expression.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Regex(pub(crate) String);

impl Regex {
    /// Create a regular expression from an unescaped pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Returns the unescaped pattern.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for Regex {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<&str> for Regex {
    fn from(v: &str) -> Self {
        Self(v.into())
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('/')?;
        write_escaped(f, &self.0, &[('/', r"\/")])?;
        f.write_char('/')
    }
}
