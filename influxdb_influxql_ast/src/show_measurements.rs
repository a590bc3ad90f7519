//! Types describing the InfluxQL `SHOW MEASUREMENTS` statement.

use crate::common::{
    write_tail_clauses, LimitClause, MeasurementName, OffsetClause, OrderByClause,
    QualifiedMeasurementName, WhereClause,
};
use std::fmt::{self, Display, Formatter};

/// Represents a `SHOW MEASUREMENTS` statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowMeasurementsStatement {
    /// The measurement named by the `WITH MEASUREMENT` clause.
    pub with_measurement: Option<QualifiedMeasurementName>,

    /// A conditional expression to filter the measurement list.
    pub condition: Option<WhereClause>,

    /// The sort order of the results.
    pub order_by: Option<OrderByClause>,

    /// A value to restrict the number of measurements returned.
    pub limit: Option<LimitClause>,

    /// A value to specify an offset to start retrieving measurements.
    pub offset: Option<OffsetClause>,
}

impl Display for ShowMeasurementsStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SHOW MEASUREMENTS")?;

        if let Some(QualifiedMeasurementName {
            name: Some(name), ..
        }) = &self.with_measurement
        {
            match name {
                MeasurementName::Name(_) => write!(f, " WITH MEASUREMENT = {name}")?,
                MeasurementName::Regex(_) => write!(f, " WITH MEASUREMENT =~ {name}")?,
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
