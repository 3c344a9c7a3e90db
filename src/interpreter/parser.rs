use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::lexer::Token,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression from a token slice.
///
/// This is the entry point for expression parsing and is called recursively
/// for every parenthesized sub-expression. The grammar is flat and
/// left-to-right: the slice is scanned once while filling a single binary
/// operation builder with two operand slots and one pending operator. There
/// is no precedence climbing; chaining more than one operator at the same
/// nesting level requires parentheses.
///
/// # Parameters
/// - `tokens`: The `(Token, byte index)` pairs of one (sub-)expression.
///
/// # Returns
/// The parsed expression node. A slice holding a single operand and no
/// operator yields that operand directly, without a `BinaryOp` wrapper.
///
/// # Errors
/// - `UnexpectedToken` for an operand with no free slot, an operator while
///   one is already pending, or an unbalanced `)`.
/// - `UnmatchedParenthesis` when a `(` is never closed.
/// - `UnexpectedEndOfInput` when the slice is empty or ends with the operator
///   still missing its right operand.
pub fn parse_expression(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut left: Option<Expr> = None;
    let mut operator: Option<BinaryOperator> = None;
    let mut right: Option<Expr> = None;

    let mut i = 0;
    while i < tokens.len() {
        let (token, index) = tokens[i];

        match token {
            Token::Integer(value) => {
                place_operand(&mut left, &mut right, operator, Expr::Literal { value }, token,
                              index)?;
            },

            Token::Plus => set_operator(&mut operator, BinaryOperator::Add, token, index)?,
            Token::Minus => set_operator(&mut operator, BinaryOperator::Subtract, token, index)?,

            Token::LParen => {
                let close = matching_paren(tokens, i, index)?;
                let sub_expression = parse_expression(&tokens[i + 1..close])?;

                place_operand(&mut left, &mut right, operator, sub_expression, token, index)?;

                // Skips past the closing parenthesis.
                i = close;
            },

            Token::RParen => {
                return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                         index });
            },

            Token::Ignored => {},
        }
        i += 1;
    }

    let end = tokens.last().map_or(0, |(token, index)| index + token.to_string().len());

    match (left, operator, right) {
        (Some(operand), None, None) => Ok(operand),
        (Some(left), Some(op), Some(right)) => Ok(Expr::BinaryOp { op,
                                                                   left: Box::new(left),
                                                                   right: Box::new(right), }),
        _ => Err(ParseError::UnexpectedEndOfInput { index: end }),
    }
}

/// Fills the next unfilled operand slot with `operand`.
///
/// `left` is filled first; `right` may only be filled once an operator is
/// pending. An operand arriving when both slots are taken, or before any
/// operator separates it from `left`, violates the two-operand grammar.
fn place_operand(left: &mut Option<Expr>,
                 right: &mut Option<Expr>,
                 operator: Option<BinaryOperator>,
                 operand: Expr,
                 token: Token,
                 index: usize)
                 -> ParseResult<()> {
    if left.is_none() {
        *left = Some(operand);
        return Ok(());
    }
    if right.is_none() && operator.is_some() {
        *right = Some(operand);
        return Ok(());
    }

    Err(ParseError::UnexpectedToken { token: token.to_string(),
                                      index })
}

/// Sets the pending operator slot.
///
/// A second operator token while one is already pending is rejected instead
/// of silently overwriting the first.
fn set_operator(operator: &mut Option<BinaryOperator>,
                op: BinaryOperator,
                token: Token,
                index: usize)
                -> ParseResult<()> {
    if operator.is_some() {
        return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                 index });
    }
    *operator = Some(op);
    Ok(())
}

/// Finds the `)` matching the `(` at slice position `open`.
///
/// Scans forward tracking nesting depth: every `(` increments it and every `)`
/// at a positive depth decrements it; the first `)` seen at depth zero is the
/// match. A first-closing-paren search would pair the wrong parentheses on
/// nested input such as `(1+(2+3))`.
///
/// # Returns
/// The slice position of the matching `)`.
///
/// # Errors
/// `UnmatchedParenthesis` if the slice ends before the match is found.
fn matching_paren(tokens: &[(Token, usize)], open: usize, open_index: usize) -> ParseResult<usize> {
    let mut depth = 0usize;

    for (position, (token, _)) in tokens.iter().enumerate().skip(open + 1) {
        match token {
            Token::LParen => depth += 1,
            Token::RParen if depth == 0 => return Ok(position),
            Token::RParen => depth -= 1,
            _ => {},
        }
    }

    Err(ParseError::UnmatchedParenthesis { open_index })
}
