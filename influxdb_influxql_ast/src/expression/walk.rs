//! Depth-first traversal of arithmetic and conditional expression trees.

use crate::expression::{ConditionalExpression, Expr};
use std::ops::ControlFlow;

/// A node visited by [`walk_expression`].
#[derive(Clone, Copy, Debug)]
pub enum Expression<'a> {
    /// An arithmetic expression.
    Arithmetic(&'a Expr),
    /// A conditional expression.
    Conditional(&'a ConditionalExpression),
}

impl<'a> From<&'a Expr> for Expression<'a> {
    fn from(v: &'a Expr) -> Self {
        Self::Arithmetic(v)
    }
}

impl<'a> From<&'a ConditionalExpression> for Expression<'a> {
    fn from(v: &'a ConditionalExpression) -> Self {
        Self::Conditional(v)
    }
}

/// Perform a depth-first traversal of `node`, calling `visit` for every
/// arithmetic and conditional node. Children are visited before their
/// parent.
///
/// The traversal stops as soon as `visit` returns [`ControlFlow::Break`],
/// and the break value is returned to the caller.
pub fn walk_expression<'a, B>(
    node: Expression<'a>,
    visit: &mut impl FnMut(Expression<'a>) -> ControlFlow<B>,
) -> ControlFlow<B> {
    match node {
        Expression::Arithmetic(n) => match n {
            Expr::VarRef(_) | Expr::Literal(_) => {}
            Expr::Call { args, .. } => {
                for arg in args {
                    walk_expression(Expression::Arithmetic(arg), visit)?;
                }
            }
            Expr::Binary { lhs, rhs, .. } => {
                walk_expression(Expression::Arithmetic(lhs), visit)?;
                walk_expression(Expression::Arithmetic(rhs), visit)?;
            }
            Expr::Nested(n) => walk_expression(Expression::Arithmetic(n), visit)?,
        },
        Expression::Conditional(n) => match n {
            ConditionalExpression::Expr(n) => walk_expression(Expression::Arithmetic(n), visit)?,
            ConditionalExpression::Binary { lhs, rhs, .. } => {
                walk_expression(Expression::Conditional(lhs), visit)?;
                walk_expression(Expression::Conditional(rhs), visit)?;
            }
            ConditionalExpression::Grouped(n) => {
                walk_expression(Expression::Conditional(n), visit)?
            }
        },
    }

    visit(node)
}
