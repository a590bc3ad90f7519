//! Types describing the InfluxQL `SHOW FIELD KEYS` statement.

use crate::common::{write_tail_clauses, LimitClause, OffsetClause, OrderByClause};
use crate::select::FromMeasurementClause;
use std::fmt::{self, Display, Formatter};

/// Represents a `SHOW FIELD KEYS` statement.
///
/// The statement has no `WHERE` clause.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowFieldKeysStatement {
    /// Measurements to list the field keys of.
    pub from: FromMeasurementClause,

    /// The sort order of the results.
    pub order_by: Option<OrderByClause>,

    /// A value to restrict the number of field keys returned.
    pub limit: Option<LimitClause>,

    /// A value to specify an offset to start retrieving field keys.
    pub offset: Option<OffsetClause>,
}

impl Display for ShowFieldKeysStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SHOW FIELD KEYS")?;
        if !self.from.is_empty() {
            write!(f, " FROM {}", self.from)?;
        }
        write_tail_clauses(
            f,
            None,
            self.order_by.as_ref(),
            self.limit.as_ref(),
            self.offset.as_ref(),
        )
    }
}
