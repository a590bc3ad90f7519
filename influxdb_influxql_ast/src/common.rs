//! Clauses and types shared by multiple statements.

use crate::expression::ConditionalExpression;
use crate::identifier::Identifier;
use crate::string::Regex;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// Represents a measurement name as either an identifier or a regular expression.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum MeasurementName {
    /// A measurement name expressed as an [`Identifier`].
    Name(Identifier),

    /// A measurement name expressed as a [`Regex`].
    Regex(Regex),
}

impl From<&str> for MeasurementName {
    fn from(v: &str) -> Self {
        Self::Name(v.into())
    }
}

impl From<Regex> for MeasurementName {
    fn from(v: Regex) -> Self {
        Self::Regex(v)
    }
}

impl Display for MeasurementName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(ident) => write!(f, "{ident}"),
            Self::Regex(regex) => write!(f, "{regex}"),
        }
    }
}

/// Represents a fully-qualified, 3-part measurement name.
///
/// The measurement name itself is optional, as a source may name only the
/// database and retention policy to search. Such a source, or one with an
/// empty name, does not restrict which measurements are matched.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct QualifiedMeasurementName {
    /// An optional database name.
    pub database: Option<Identifier>,

    /// An optional retention policy.
    pub retention_policy: Option<Identifier>,

    /// The measurement name.
    pub name: Option<MeasurementName>,
}

impl QualifiedMeasurementName {
    /// Construct an unqualified measurement name.
    pub fn new(name: impl Into<MeasurementName>) -> Self {
        Self {
            database: None,
            retention_policy: None,
            name: Some(name.into()),
        }
    }
}

impl Display for QualifiedMeasurementName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.database {
            Some(db) => match &self.retention_policy {
                Some(rp) => write!(f, "{db}.{rp}.")?,
                None => write!(f, "{db}..")?,
            },
            None => {
                if let Some(rp) = &self.retention_policy {
                    write!(f, "{rp}.")?;
                }
            }
        }

        match &self.name {
            Some(name) => write!(f, "{name}"),
            None => Ok(()),
        }
    }
}

/// Represents the value for a `LIMIT` clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LimitClause(pub u64);

impl Deref for LimitClause {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for LimitClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "LIMIT {}", self.0)
    }
}

/// Represents the value for an `OFFSET` clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct OffsetClause(pub u64);

impl Deref for OffsetClause {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for OffsetClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "OFFSET {}", self.0)
    }
}

/// Represents a `WHERE` clause.
#[derive(Clone, Debug, PartialEq)]
pub struct WhereClause(pub ConditionalExpression);

impl WhereClause {
    /// Create a `WHERE` clause for `expr`.
    pub fn new(expr: ConditionalExpression) -> Self {
        Self(expr)
    }

    /// Consume the clause and return the predicate.
    pub fn into_inner(self) -> ConditionalExpression {
        self.0
    }
}

impl Deref for WhereClause {
    type Target = ConditionalExpression;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for WhereClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "WHERE {}", self.0)
    }
}

/// A single sort key of an `ORDER BY` clause.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SortField {
    /// Name of the column to sort by.
    pub name: Identifier,

    /// `true` when sorting in ascending order.
    pub ascending: bool,
}

impl SortField {
    /// Sort by `name` in ascending order.
    pub fn ascending(name: impl Into<Identifier>) -> Self {
        Self {
            name: name.into(),
            ascending: true,
        }
    }

    /// Sort by `name` in descending order.
    pub fn descending(name: impl Into<Identifier>) -> Self {
        Self {
            name: name.into(),
            ascending: false,
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.name,
            if self.ascending { "ASC" } else { "DESC" }
        )
    }
}

/// Represents an `ORDER BY` clause, which holds one or more sort keys.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct OrderByClause(Vec<SortField>);

impl OrderByClause {
    /// Create an `ORDER BY` clause from `fields`.
    ///
    /// # Panics
    ///
    /// When `fields` is empty.
    pub fn new(fields: Vec<SortField>) -> Self {
        assert!(!fields.is_empty(), "ORDER BY requires at least one field");
        Self(fields)
    }
}

impl Deref for OrderByClause {
    type Target = [SortField];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for OrderByClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ORDER BY ")?;
        write_list(f, &self.0)
    }
}

/// Write the items of `list` separated by a comma.
pub(crate) fn write_list<T: Display>(f: &mut Formatter<'_>, list: &[T]) -> fmt::Result {
    if let Some((first, rest)) = list.split_first() {
        write!(f, "{first}")?;
        for item in rest {
            write!(f, ", {item}")?;
        }
    }
    Ok(())
}

/// Write the clauses common to the tail of most statements, each preceded by a space.
pub(crate) fn write_tail_clauses(
    f: &mut Formatter<'_>,
    condition: Option<&WhereClause>,
    order_by: Option<&OrderByClause>,
    limit: Option<&LimitClause>,
    offset: Option<&OffsetClause>,
) -> fmt::Result {
    if let Some(condition) = condition {
        write!(f, " {condition}")?;
    }
    if let Some(order_by) = order_by {
        write!(f, " {order_by}")?;
    }
    if let Some(limit) = limit {
        write!(f, " {limit}")?;
    }
    if let Some(offset) = offset {
        write!(f, " {offset}")?;
    }
    Ok(())
}
