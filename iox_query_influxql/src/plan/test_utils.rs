//! Builders for the statements and predicates used by tests.

use influxdb_influxql_ast::common::{QualifiedMeasurementName, WhereClause};
use influxdb_influxql_ast::expression::{ConditionalExpression, ConditionalOperator, Expr};
use influxdb_influxql_ast::literal::Literal;
use influxdb_influxql_ast::select::{FromMeasurementClause, MeasurementSelection};
use influxdb_influxql_ast::string::Regex;

/// A reference to the field or tag `name`.
pub(crate) fn var_ref(name: &str) -> ConditionalExpression {
    Expr::var_ref(name).into()
}

/// A string literal.
pub(crate) fn string(value: &str) -> ConditionalExpression {
    Expr::Literal(Literal::from(value)).into()
}

/// `name = 'value'`
pub(crate) fn eq(name: &str, value: &str) -> ConditionalExpression {
    ConditionalExpression::binary(var_ref(name), ConditionalOperator::Eq, string(value))
}

/// `time > value`
pub(crate) fn time_gt(value: i64) -> ConditionalExpression {
    ConditionalExpression::binary(
        var_ref("time"),
        ConditionalOperator::Gt,
        Expr::Literal(Literal::Integer(value)),
    )
}

pub(crate) fn and(lhs: ConditionalExpression, rhs: ConditionalExpression) -> ConditionalExpression {
    ConditionalExpression::and(lhs, rhs)
}

pub(crate) fn or(lhs: ConditionalExpression, rhs: ConditionalExpression) -> ConditionalExpression {
    ConditionalExpression::or(lhs, rhs)
}

pub(crate) fn grouped(expr: ConditionalExpression) -> ConditionalExpression {
    ConditionalExpression::grouped(expr)
}

pub(crate) fn where_clause(expr: ConditionalExpression) -> Option<WhereClause> {
    Some(WhereClause::new(expr))
}

/// A `FROM` clause listing the named measurements.
pub(crate) fn from(names: &[&str]) -> FromMeasurementClause {
    FromMeasurementClause::new(
        names
            .iter()
            .map(|name| QualifiedMeasurementName::new(*name).into())
            .collect::<Vec<MeasurementSelection>>(),
    )
}

/// A `FROM` clause with a single regular expression.
pub(crate) fn from_regex(pattern: &str) -> FromMeasurementClause {
    FromMeasurementClause::new(vec![QualifiedMeasurementName::new(Regex::new(pattern)).into()])
}
