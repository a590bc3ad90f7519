use crate::expression::arithmetic::Expr;
use std::fmt::{self, Display, Formatter};

/// Represents one of the conditional operators supported by [`ConditionalExpression::Binary`].
#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash)]
pub enum ConditionalOperator {
    /// Represents the `=` operator.
    Eq,
    /// Represents the `!=` or `<>` operator.
    NotEq,
    /// Represents the `=~` (regular expression equals) operator.
    EqRegex,
    /// Represents the `!~` (regular expression not equals) operator.
    NotEqRegex,
    /// Represents the `<` operator.
    Lt,
    /// Represents the `<=` operator.
    LtEq,
    /// Represents the `>` operator.
    Gt,
    /// Represents the `>=` operator.
    GtEq,
    /// Represents the `AND` operator.
    And,
    /// Represents the `OR` operator.
    Or,
}

impl Display for ConditionalOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::EqRegex => "=~",
            Self::NotEqRegex => "!~",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "AND",
            Self::Or => "OR",
        })
    }
}

/// Represents a conditional expression, such as the predicate of a `WHERE` clause.
///
/// Nodes own their children. Combining two trees moves them into the new
/// parent rather than copying them.
#[derive(Clone, Debug, PartialEq)]
pub enum ConditionalExpression {
    /// Represents an arithmetic expression.
    Expr(Box<Expr>),

    /// Binary operations, such as `foo = 'bar'` or `true AND false`.
    Binary {
        /// Represents the left-hand side of the conditional binary expression.
        lhs: Box<ConditionalExpression>,
        /// Represents the operator to apply to the conditional binary expression.
        op: ConditionalOperator,
        /// Represents the right-hand side of the conditional binary expression.
        rhs: Box<ConditionalExpression>,
    },

    /// Represents a conditional expression enclosed in parenthesis.
    Grouped(Box<ConditionalExpression>),
}

impl ConditionalExpression {
    /// Construct a binary conditional expression.
    pub fn binary(lhs: impl Into<Self>, op: ConditionalOperator, rhs: impl Into<Self>) -> Self {
        Self::Binary {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        }
    }

    /// Construct `lhs AND rhs`.
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary(lhs, ConditionalOperator::And, rhs)
    }

    /// Construct `lhs OR rhs`.
    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary(lhs, ConditionalOperator::Or, rhs)
    }

    /// Enclose `expr` in parenthesis.
    pub fn grouped(expr: impl Into<Self>) -> Self {
        Self::Grouped(Box::new(expr.into()))
    }

    /// Returns the arithmetic expression, if this is an [`ConditionalExpression::Expr`].
    pub fn expr(&self) -> Option<&Expr> {
        match self {
            Self::Expr(expr) => Some(&**expr),
            _ => None,
        }
    }
}

impl From<Expr> for ConditionalExpression {
    fn from(v: Expr) -> Self {
        Self::Expr(Box::new(v))
    }
}

impl Display for ConditionalExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expr(v) => write!(f, "{v}"),
            Self::Binary { lhs, op, rhs } => write!(f, "{lhs} {op} {rhs}"),
            Self::Grouped(v) => write!(f, "({v})"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::literal::Literal;
    use crate::string::Regex;
    use assert_matches::assert_matches;

    fn eq(name: &str, value: &str) -> ConditionalExpression {
        ConditionalExpression::binary(
            Expr::var_ref(name),
            ConditionalOperator::Eq,
            Expr::Literal(Literal::from(value)),
        )
    }

    #[test]
    fn test_display() {
        assert_eq!(eq("host", "server01").to_string(), "host = 'server01'");

        let cond = ConditionalExpression::binary(
            Expr::var_ref("name"),
            ConditionalOperator::EqRegex,
            Expr::Literal(Literal::Regex(Regex::new("^cpu"))),
        );
        assert_eq!(cond.to_string(), "name =~ /^cpu/");

        let cond = ConditionalExpression::and(
            eq("a", "1"),
            ConditionalExpression::grouped(ConditionalExpression::or(eq("b", "2"), eq("c", "3"))),
        );
        assert_eq!(cond.to_string(), "a = '1' AND (b = '2' OR c = '3')");

        // grouping is never implied by the tree shape
        let cond = ConditionalExpression::and(
            eq("a", "1"),
            ConditionalExpression::or(eq("b", "2"), eq("c", "3")),
        );
        assert_eq!(cond.to_string(), "a = '1' AND b = '2' OR c = '3'");
    }

    #[test]
    fn test_operator_display() {
        let ops = [
            ConditionalOperator::Eq,
            ConditionalOperator::NotEq,
            ConditionalOperator::EqRegex,
            ConditionalOperator::NotEqRegex,
            ConditionalOperator::Lt,
            ConditionalOperator::LtEq,
            ConditionalOperator::Gt,
            ConditionalOperator::GtEq,
            ConditionalOperator::And,
            ConditionalOperator::Or,
        ];
        let got = ops.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(
            got,
            ["=", "!=", "=~", "!~", "<", "<=", ">", ">=", "AND", "OR"]
        );
    }

    #[test]
    fn test_expr_accessor() {
        let cond = ConditionalExpression::from(Expr::var_ref("host"));
        assert_matches!(cond.expr(), Some(Expr::VarRef(v)) if v.as_str() == "host");
        assert!(eq("a", "b").expr().is_none());
    }
}
