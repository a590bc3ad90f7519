//! Types describing the InfluxQL `SELECT` statement.

use crate::common::{
    write_list, write_tail_clauses, LimitClause, OffsetClause, OrderByClause,
    QualifiedMeasurementName, WhereClause,
};
use crate::expression::Expr;
use crate::identifier::Identifier;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// Represents a `SELECT` statement.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectStatement {
    /// Expressions returned by the selection.
    pub fields: FieldList,

    /// A list of measurements or subqueries to select from.
    pub from: FromMeasurementClause,

    /// A conditional expression to filter the selection.
    pub condition: Option<WhereClause>,

    /// The sort order of the selection.
    pub order_by: Option<OrderByClause>,

    /// A value to restrict the number of rows returned.
    pub limit: Option<LimitClause>,

    /// A value to specify an offset to start retrieving rows.
    pub offset: Option<OffsetClause>,

    /// When `true`, the implicit `time` column is not projected.
    pub omit_time: bool,

    /// When `true`, duplicate rows are removed from the result.
    pub dedupe: bool,
}

impl SelectStatement {
    /// Create a statement selecting `fields` from `from`, with no other clauses.
    pub fn new(fields: FieldList, from: FromMeasurementClause) -> Self {
        Self {
            fields,
            from,
            condition: None,
            order_by: None,
            limit: None,
            offset: None,
            omit_time: false,
            dedupe: false,
        }
    }
}

impl Display for SelectStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {}", self.fields)?;
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

/// Represents a single projection of a `SELECT` statement.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// The projected expression.
    pub expr: Expr,

    /// An optional name for the output column.
    pub alias: Option<Identifier>,
}

impl Field {
    /// Project the field or tag `name` without an alias.
    pub fn var_ref(name: impl Into<Identifier>) -> Self {
        Self {
            expr: Expr::var_ref(name),
            alias: None,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

/// Represents the list of fields of a `SELECT` statement.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldList(Vec<Field>);

impl FieldList {
    /// Create a new field list.
    pub fn new(fields: Vec<Field>) -> Self {
        Self(fields)
    }
}

impl Deref for FieldList {
    type Target = [Field];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for FieldList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, &self.0)
    }
}

/// Represents a single measurement selection of a `FROM` clause.
#[derive(Clone, Debug, PartialEq)]
pub enum MeasurementSelection {
    /// A measurement identified by name or regular expression.
    Name(QualifiedMeasurementName),

    /// A nested `SELECT` statement.
    Subquery(Box<SelectStatement>),
}

impl MeasurementSelection {
    /// Returns the measurement name, or `None` for a subquery.
    pub fn measurement(&self) -> Option<&QualifiedMeasurementName> {
        match self {
            Self::Name(name) => Some(name),
            Self::Subquery(_) => None,
        }
    }
}

impl From<QualifiedMeasurementName> for MeasurementSelection {
    fn from(v: QualifiedMeasurementName) -> Self {
        Self::Name(v)
    }
}

impl Display for MeasurementSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Subquery(select) => write!(f, "({select})"),
        }
    }
}

/// Represents the `FROM` clause of a `SELECT` statement, or the source list
/// of a `SHOW` statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FromMeasurementClause(Vec<MeasurementSelection>);

impl FromMeasurementClause {
    /// Create a new `FROM` clause.
    pub fn new(from: Vec<MeasurementSelection>) -> Self {
        Self(from)
    }
}

impl Deref for FromMeasurementClause {
    type Target = [MeasurementSelection];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for FromMeasurementClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, &self.0)
    }
}
