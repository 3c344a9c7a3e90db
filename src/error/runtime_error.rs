use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An arithmetic operation overflowed the integer type.
    NumericOverflow {
        /// The evaluated left operand.
        left:     i64,
        /// The operator being applied.
        operator: BinaryOperator,
        /// The evaluated right operand.
        right:    i64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumericOverflow { left, operator, right } => {
                write!(f, "Error: Integer overflow while evaluating {left} {operator} {right}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
