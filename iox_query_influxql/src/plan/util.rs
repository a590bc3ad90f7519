use influxdb_influxql_ast::common::{MeasurementName, QualifiedMeasurementName};
use influxdb_influxql_ast::expression::walk::{walk_expression, Expression};
use influxdb_influxql_ast::expression::{ConditionalExpression, ConditionalOperator, Expr};
use influxdb_influxql_ast::identifier::Identifier;
use influxdb_influxql_ast::literal::Literal;
use std::ops::ControlFlow;

/// Name of the implicit timestamp column.
const TIME_COLUMN_NAME: &str = "time";

/// Returns `true` if `cond` refers to the `time` column anywhere in the tree.
///
/// The match is case-sensitive and considers every operand position, including
/// nested groups, arithmetic expressions and function arguments.
pub fn has_time_expr(cond: &ConditionalExpression) -> bool {
    walk_expression(Expression::Conditional(cond), &mut |e| match e {
        Expression::Arithmetic(Expr::VarRef(name)) if name.as_str() == TIME_COLUMN_NAME => {
            ControlFlow::Break(())
        }
        _ => ControlFlow::Continue(()),
    })
    .is_break()
}

/// Build a predicate matching the measurement named by `source` against the
/// column `field`, as either `field = 'name'` or `field =~ /regex/`.
///
/// Returns `None` when `source` does not name a measurement.
pub(in crate::plan) fn measurement_filter(
    field: &str,
    source: &QualifiedMeasurementName,
) -> Option<ConditionalExpression> {
    let (op, value) = match source.name.as_ref()? {
        MeasurementName::Regex(re) => (ConditionalOperator::EqRegex, Literal::Regex(re.clone())),
        MeasurementName::Name(name) if !name.is_empty() => {
            (ConditionalOperator::Eq, Literal::String(name.as_str().to_owned()))
        }
        MeasurementName::Name(_) => return None,
    };

    Some(ConditionalExpression::binary(
        Expr::var_ref(field),
        op,
        Expr::Literal(value),
    ))
}

/// Build the disjunction `field = 'k1' OR field = 'k2' OR ...`, associated to
/// the left in the order of `keys`.
///
/// More than one key is enclosed in parenthesis, so that the disjunction
/// remains intact when the predicate is combined with others and rendered
/// as text.
pub(in crate::plan) fn tag_key_filter(
    field: &str,
    keys: &[Identifier],
) -> Option<ConditionalExpression> {
    let expr = keys
        .iter()
        .map(|key| {
            ConditionalExpression::binary(
                Expr::var_ref(field),
                ConditionalOperator::Eq,
                Expr::Literal(Literal::String(key.as_str().to_owned())),
            )
        })
        .reduce(|acc, expr| ConditionalExpression::or(acc, expr))?;

    Some(if keys.len() > 1 {
        ConditionalExpression::grouped(expr)
    } else {
        expr
    })
}

/// Combine `lhs` and `rhs` as `lhs AND rhs`, keeping the operand order.
/// When only one side is present it is returned unchanged.
pub(in crate::plan) fn conjunction(
    lhs: Option<ConditionalExpression>,
    rhs: Option<ConditionalExpression>,
) -> Option<ConditionalExpression> {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => Some(ConditionalExpression::and(lhs, rhs)),
        (lhs, rhs) => lhs.or(rhs),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::plan::test_utils::{and, eq, grouped, or, string, time_gt, var_ref};
    use influxdb_influxql_ast::expression::BinaryOperator;
    use influxdb_influxql_ast::literal::Duration;
    use influxdb_influxql_ast::string::Regex;

    #[test]
    fn test_has_time_expr() {
        // top-level comparison, either side
        assert!(has_time_expr(&time_gt(0)));
        assert!(has_time_expr(&ConditionalExpression::binary(
            Expr::Literal(Literal::Integer(0)),
            ConditionalOperator::Lt,
            var_ref("time"),
        )));

        // under AND / OR at any depth
        assert!(has_time_expr(&and(eq("host", "a"), time_gt(0))));
        assert!(has_time_expr(&and(
            eq("host", "a"),
            grouped(or(eq("region", "west"), grouped(time_gt(0))))
        )));

        // regex and inequality operators
        assert!(has_time_expr(&ConditionalExpression::binary(
            var_ref("time"),
            ConditionalOperator::NotEqRegex,
            Expr::Literal(Literal::Regex(Regex::new("x"))),
        )));

        // arithmetic and function arguments
        assert!(has_time_expr(&ConditionalExpression::binary(
            Expr::binary(
                Expr::var_ref("time"),
                BinaryOperator::Add,
                Expr::Literal(Literal::Duration(Duration(1_000_000_000))),
            ),
            ConditionalOperator::Gt,
            Expr::call("now", vec![]),
        )));
        assert!(has_time_expr(&ConditionalExpression::binary(
            Expr::call("floor", vec![Expr::Nested(Box::new(Expr::var_ref("time")))]),
            ConditionalOperator::Gt,
            Expr::Literal(Literal::Integer(0)),
        )));

        // a bare reference
        assert!(has_time_expr(&var_ref("time")));
    }

    #[test]
    fn test_has_time_expr_no_match() {
        assert!(!has_time_expr(&eq("host", "a")));
        assert!(!has_time_expr(&and(eq("host", "a"), eq("region", "west"))));

        // case-sensitive
        assert!(!has_time_expr(&eq("TIME", "a")));
        assert!(!has_time_expr(&eq("Time", "a")));

        // similar names
        assert!(!has_time_expr(&eq("times", "a")));
        assert!(!has_time_expr(&eq("_time", "a")));

        // string literal is not a reference
        assert!(!has_time_expr(&ConditionalExpression::binary(
            var_ref("host"),
            ConditionalOperator::Eq,
            string("time"),
        )));
    }

    #[test]
    fn test_measurement_filter() {
        let got = measurement_filter("name", &QualifiedMeasurementName::new("cpu")).unwrap();
        assert_eq!(got, eq("name", "cpu"));
        assert_eq!(got.to_string(), "name = 'cpu'");

        let got =
            measurement_filter("name", &QualifiedMeasurementName::new(Regex::new("^cpu"))).unwrap();
        assert_eq!(got.to_string(), "name =~ /^cpu/");

        // names that require quoting as an identifier are plain strings
        let got = measurement_filter("name", &QualifiedMeasurementName::new("cpu load")).unwrap();
        assert_eq!(got.to_string(), "name = 'cpu load'");

        // no name
        assert!(measurement_filter("name", &QualifiedMeasurementName::default()).is_none());
        assert!(measurement_filter("name", &QualifiedMeasurementName::new("")).is_none());

        // database and retention policy do not contribute
        let source = QualifiedMeasurementName {
            database: Some("telegraf".into()),
            retention_policy: Some("autogen".into()),
            name: None,
        };
        assert!(measurement_filter("name", &source).is_none());
    }

    #[test]
    fn test_tag_key_filter() {
        assert!(tag_key_filter("key", &[]).is_none());

        let got = tag_key_filter("key", &["host".into()]).unwrap();
        assert_eq!(got, eq("key", "host"));
        assert_eq!(got.to_string(), "key = 'host'");

        let got = tag_key_filter("key", &["host".into(), "region".into()]).unwrap();
        assert_eq!(got, grouped(or(eq("key", "host"), eq("key", "region"))));
        assert_eq!(got.to_string(), "(key = 'host' OR key = 'region')");

        // left-associative
        let got = tag_key_filter("key", &["a".into(), "b".into(), "c".into()]).unwrap();
        assert_eq!(
            got,
            grouped(or(or(eq("key", "a"), eq("key", "b")), eq("key", "c")))
        );
        assert_eq!(got.to_string(), "(key = 'a' OR key = 'b' OR key = 'c')");
    }

    #[test]
    fn test_conjunction() {
        assert!(conjunction(None, None).is_none());
        assert_eq!(conjunction(Some(eq("a", "1")), None), Some(eq("a", "1")));
        assert_eq!(conjunction(None, Some(eq("b", "2"))), Some(eq("b", "2")));
        assert_eq!(
            conjunction(Some(eq("a", "1")), Some(eq("b", "2"))),
            Some(and(eq("a", "1"), eq("b", "2")))
        );
    }
}
