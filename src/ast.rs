/// The binary operators supported by the language.
///
/// The grammar is deliberately flat: each (sub-)expression combines at most
/// two operands with exactly one of these operators, and larger expressions
/// are built by parenthesizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Integer addition, `+`.
    Add,
    /// Integer subtraction, `-`.
    Subtract,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => f.write_str("+"),
            Self::Subtract => f.write_str("-"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a tree: each node exclusively owns its children, and a fully
/// parsed expression is rooted at either a single `Literal` (the degenerate
/// case of a bare number) or a `BinaryOp` with both operands populated.
/// Partially filled operand slots exist only inside the parser and never
/// escape it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal integer value.
    Literal {
        /// The constant value.
        value: i64,
    },
    /// A binary operation (addition or subtraction).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}
