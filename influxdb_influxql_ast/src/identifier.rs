//! Types and functions for InfluxQL identifiers.

use crate::string::write_escaped;
use std::fmt::{self, Display, Formatter, Write};
use std::ops::Deref;

/// Returns `true` if `s` can be rendered without surrounding quotes.
fn is_unquoted_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// An InfluxQL identifier, such as a measurement, tag key or field name.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Identifier(pub(crate) String);

impl Identifier {
    /// Returns the unquoted identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if is_unquoted_identifier(&self.0) {
            f.write_str(&self.0)
        } else {
            f.write_char('"')?;
            write_escaped(f, &self.0, &[('\\', r"\\"), ('"', r#"\""#), ('\n', r"\n")])?;
            f.write_char('"')
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_identifier_display() {
        assert_eq!(Identifier::from("cpu").to_string(), "cpu");
        assert_eq!(Identifier::from("_fieldKeys").to_string(), "_fieldKeys");
        assert_eq!(Identifier::from("usage_idle2").to_string(), "usage_idle2");

        // requires quoting
        assert_eq!(Identifier::from("cpu load").to_string(), r#""cpu load""#);
        assert_eq!(Identifier::from("1cpu").to_string(), r#""1cpu""#);
        assert_eq!(Identifier::from("cpu.0").to_string(), r#""cpu.0""#);
        assert_eq!(Identifier::from(r#"a"b"#).to_string(), r#""a\"b""#);
        assert_eq!(Identifier::from("").to_string(), r#""""#);
    }

    #[test]
    fn test_identifier_deref() {
        let id = Identifier::from("host");
        assert_eq!(&*id, "host");
        assert!(id.starts_with("ho"));
    }
}
