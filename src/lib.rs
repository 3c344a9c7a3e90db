//! # summa
//!
//! summa is a tiny expression interpreter written in Rust.
//! It lexes, parses, and evaluates integer addition and subtraction
//! expressions with arbitrarily nested parentheses, such as
//! `(13+4)-(12+1)`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{evaluator::eval, lexer::tokenize, parser::parse_expression},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent the syntactic structure of an expression as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression nodes for literals and binary operations.
/// - Guarantees exclusive ownership of children, so trees never share nodes.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including offending characters and
/// tokens with their source positions.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte indices and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from a raw source string to an integer result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates a source string to its integer result.
///
/// This function composes the full pipeline: the source is tokenized, the
/// tokens are parsed into an AST, and the tree is evaluated. The first error
/// encountered in any phase is surfaced immediately; no partial result is
/// returned on failure.
///
/// The grammar is flat and left-to-right: each nesting level combines at most
/// two operands with one `+` or `-`, so longer chains are written with
/// parentheses.
///
/// # Errors
/// Returns an error if lexing or parsing fails, or if evaluation overflows.
///
/// # Examples
/// ```
/// use summa::evaluate;
///
/// assert_eq!(evaluate("(13+4)-(12+1)").unwrap(), 4);
/// assert_eq!(evaluate("42").unwrap(), 42);
///
/// // A parenthesis left open is rejected.
/// assert!(evaluate("(1+2").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, EvalError> {
    let tokens = tokenize(source)?;
    let expression = parse_expression(&tokens)?;

    Ok(eval(&expression)?)
}
