//! Types describing the InfluxQL `SHOW TAG VALUES` statement.

use crate::common::{
    write_list, write_tail_clauses, LimitClause, OffsetClause, OrderByClause, WhereClause,
};
use crate::identifier::Identifier;
use crate::select::FromMeasurementClause;
use std::fmt::{self, Display, Formatter};

/// Represents a `SHOW TAG VALUES` statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowTagValuesStatement {
    /// Measurements to list the tag values of.
    pub from: FromMeasurementClause,

    /// Tag keys named by the `WITH KEY` clause, in the order written.
    pub with_key: Vec<Identifier>,

    /// A conditional expression to filter the tag values.
    pub condition: Option<WhereClause>,

    /// The sort order of the results.
    pub order_by: Option<OrderByClause>,

    /// A value to restrict the number of tag values returned.
    pub limit: Option<LimitClause>,

    /// A value to specify an offset to start retrieving tag values.
    pub offset: Option<OffsetClause>,
}

impl Display for ShowTagValuesStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SHOW TAG VALUES")?;
        if !self.from.is_empty() {
            write!(f, " FROM {}", self.from)?;
        }

        match self.with_key.as_slice() {
            [] => {}
            [key] => write!(f, " WITH KEY = {key}")?,
            keys => {
                write!(f, " WITH KEY IN (")?;
                write_list(f, keys)?;
                write!(f, ")")?;
            }
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
