use crate::identifier::Identifier;
use crate::literal::Literal;
use std::fmt::{self, Display, Formatter};

/// An InfluxQL arithmetic expression, which is the operand of a
/// [`ConditionalExpression`](super::ConditionalExpression).
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A reference to a field or tag, such as `host` or `time`.
    VarRef(Identifier),

    /// A literal value.
    Literal(Literal),

    /// A function call, such as `now()`.
    Call {
        /// Name of the function.
        name: String,
        /// Function arguments.
        args: Vec<Expr>,
    },

    /// A binary arithmetic expression.
    Binary {
        /// Left-hand side of the expression.
        lhs: Box<Expr>,
        /// Arithmetic operator.
        op: BinaryOperator,
        /// Right-hand side of the expression.
        rhs: Box<Expr>,
    },

    /// An expression wrapped in parenthesis.
    Nested(Box<Expr>),
}

impl Expr {
    /// Construct a reference to the field or tag `name`.
    pub fn var_ref(name: impl Into<Identifier>) -> Self {
        Self::VarRef(name.into())
    }

    /// Construct a binary arithmetic expression.
    pub fn binary(lhs: Self, op: BinaryOperator, rhs: Self) -> Self {
        Self::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    /// Construct a call to the function `name`.
    pub fn call(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Call {
            name: name.into(),
            args,
        }
    }
}

impl From<Literal> for Expr {
    fn from(v: Literal) -> Self {
        Self::Literal(v)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::VarRef(v) => write!(f, "{v}"),
            Self::Literal(v) => write!(f, "{v}"),
            Self::Call { name, args } => {
                write!(f, "{name}(")?;
                if let Some((first, rest)) = args.split_first() {
                    write!(f, "{first}")?;
                    for arg in rest {
                        write!(f, ", {arg}")?;
                    }
                }
                write!(f, ")")
            }
            Self::Binary { lhs, op, rhs } => write!(f, "{lhs} {op} {rhs}"),
            Self::Nested(e) => write!(f, "({e})"),
        }
    }
}

/// An InfluxQL arithmetic operator.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `&`
    BitwiseAnd,
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXor,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::BitwiseXor => "^",
        })
    }
}
