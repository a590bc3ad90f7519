//! Types describing a complete InfluxQL statement.

use crate::select::SelectStatement;
use crate::show::{ShowDatabasesStatement, ShowRetentionPoliciesStatement, ShowSeriesStatement};
use crate::show_field_keys::ShowFieldKeysStatement;
use crate::show_measurements::ShowMeasurementsStatement;
use crate::show_tag_keys::ShowTagKeysStatement;
use crate::show_tag_values::ShowTagValuesStatement;
use std::fmt::{self, Display, Formatter};

/// An InfluxQL statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    /// Represents a `SELECT` statement.
    Select(Box<SelectStatement>),
    /// Represents a `SHOW DATABASES` statement.
    ShowDatabases(ShowDatabasesStatement),
    /// Represents a `SHOW RETENTION POLICIES` statement.
    ShowRetentionPolicies(ShowRetentionPoliciesStatement),
    /// Represents a `SHOW SERIES` statement.
    ShowSeries(ShowSeriesStatement),
    /// Represents a `SHOW FIELD KEYS` statement.
    ShowFieldKeys(ShowFieldKeysStatement),
    /// Represents a `SHOW MEASUREMENTS` statement.
    ShowMeasurements(ShowMeasurementsStatement),
    /// Represents a `SHOW TAG KEYS` statement.
    ShowTagKeys(ShowTagKeysStatement),
    /// Represents a `SHOW TAG VALUES` statement.
    ShowTagValues(ShowTagValuesStatement),
}

impl From<SelectStatement> for Statement {
    fn from(v: SelectStatement) -> Self {
        Self::Select(Box::new(v))
    }
}

impl From<ShowDatabasesStatement> for Statement {
    fn from(v: ShowDatabasesStatement) -> Self {
        Self::ShowDatabases(v)
    }
}

impl From<ShowRetentionPoliciesStatement> for Statement {
    fn from(v: ShowRetentionPoliciesStatement) -> Self {
        Self::ShowRetentionPolicies(v)
    }
}

impl From<ShowSeriesStatement> for Statement {
    fn from(v: ShowSeriesStatement) -> Self {
        Self::ShowSeries(v)
    }
}

impl From<ShowFieldKeysStatement> for Statement {
    fn from(v: ShowFieldKeysStatement) -> Self {
        Self::ShowFieldKeys(v)
    }
}

impl From<ShowMeasurementsStatement> for Statement {
    fn from(v: ShowMeasurementsStatement) -> Self {
        Self::ShowMeasurements(v)
    }
}

impl From<ShowTagKeysStatement> for Statement {
    fn from(v: ShowTagKeysStatement) -> Self {
        Self::ShowTagKeys(v)
    }
}

impl From<ShowTagValuesStatement> for Statement {
    fn from(v: ShowTagValuesStatement) -> Self {
        Self::ShowTagValues(v)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(s) => write!(f, "{s}"),
            Self::ShowDatabases(s) => write!(f, "{s}"),
            Self::ShowRetentionPolicies(s) => write!(f, "{s}"),
            Self::ShowSeries(s) => write!(f, "{s}"),
            Self::ShowFieldKeys(s) => write!(f, "{s}"),
            Self::ShowMeasurements(s) => write!(f, "{s}"),
            Self::ShowTagKeys(s) => write!(f, "{s}"),
            Self::ShowTagValues(s) => write!(f, "{s}"),
        }
    }
}
