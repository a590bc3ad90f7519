//! Types describing the InfluxQL `SHOW TAG KEYS` statement.

use crate::common::{write_tail_clauses, LimitClause, OffsetClause, OrderByClause, WhereClause};
use crate::select::FromMeasurementClause;
use std::fmt::{self, Display, Formatter};

/// Represents a `SHOW TAG KEYS` statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowTagKeysStatement {
    /// Measurements to list the tag keys of.
    pub from: FromMeasurementClause,

    /// A conditional expression to filter the tag keys.
    pub condition: Option<WhereClause>,

    /// The sort order of the results.
    pub order_by: Option<OrderByClause>,

    /// A value to restrict the number of tag keys returned.
    pub limit: Option<LimitClause>,

    /// A value to specify an offset to start retrieving tag keys.
    pub offset: Option<OffsetClause>,
}

impl Display for ShowTagKeysStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SHOW TAG KEYS")?;
        if !self.from.is_empty() {
            write!(f, " FROM {}", self.from)?;
        }
        write_tail_clauses(
            f,
            self.condition.as_ref(),
            self.order_by.as_ref(),
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
        let stmt = ShowTagKeysStatement::default();
        assert_eq!(stmt.to_string(), "SHOW TAG KEYS");

        let stmt = ShowTagKeysStatement {
            from: FromMeasurementClause::new(vec![
                QualifiedMeasurementName::new("cpu").into(),
                QualifiedMeasurementName::new("disk").into(),
            ]),
            condition: Some(WhereClause::new(Expr::var_ref("host").into())),
            offset: Some(OffsetClause(3)),
            ..Default::default()
        };
        assert_eq!(
            stmt.to_string(),
            "SHOW TAG KEYS FROM cpu, disk WHERE host OFFSET 3"
        );
    }
}
