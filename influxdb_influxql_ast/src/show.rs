//! Types describing `SHOW` statements that list server-level metadata.

use crate::common::{write_tail_clauses, LimitClause, OffsetClause, WhereClause};
use crate::identifier::Identifier;
use crate::select::FromMeasurementClause;
use std::fmt::{self, Display, Formatter};

/// Represents a `SHOW DATABASES` statement.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ShowDatabasesStatement;

impl Display for ShowDatabasesStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SHOW DATABASES")
    }
}

/// Represents a `SHOW RETENTION POLICIES` statement.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ShowRetentionPoliciesStatement {
    /// Name of the database to list the retention policies of.
    pub database: Option<Identifier>,
}

impl Display for ShowRetentionPoliciesStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SHOW RETENTION POLICIES")?;
        if let Some(database) = &self.database {
            write!(f, " ON {database}")?;
        }
        Ok(())
    }
}

/// Represents a `SHOW SERIES` statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowSeriesStatement {
    /// Measurements to list the series of.
    pub from: FromMeasurementClause,

    /// A conditional expression to filter the series.
    pub condition: Option<WhereClause>,

    /// A value to restrict the number of series returned.
    pub limit: Option<LimitClause>,

    /// A value to specify an offset to start retrieving series.
    pub offset: Option<OffsetClause>,
}

impl Display for ShowSeriesStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SHOW SERIES")?;
        if !self.from.is_empty() {
            write!(f, " FROM {}", self.from)?;
        }
        write_tail_clauses(
            f,
            self.condition.as_ref(),
            None,
            self.limit.as_ref(),
            self.offset.as_ref(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::common::QualifiedMeasurementName;
    use crate::expression::Expr;

    #[test]
    fn test_display() {
        assert_eq!(ShowDatabasesStatement.to_string(), "SHOW DATABASES");
        assert_eq!(
            ShowRetentionPoliciesStatement::default().to_string(),
            "SHOW RETENTION POLICIES"
        );
        assert_eq!(
            ShowRetentionPoliciesStatement {
                database: Some("telegraf".into())
            }
            .to_string(),
            "SHOW RETENTION POLICIES ON telegraf"
        );

        let stmt = ShowSeriesStatement {
            from: FromMeasurementClause::new(vec![QualifiedMeasurementName::new("cpu").into()]),
            condition: Some(WhereClause::new(Expr::var_ref("time").into())),
            limit: Some(LimitClause(1)),
            offset: None,
        };
        assert_eq!(stmt.to_string(), "SHOW SERIES FROM cpu WHERE time LIMIT 1");
    }
}
