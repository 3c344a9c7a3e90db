use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Digits are taken verbatim, so
    /// `007` lexes as the integer `7`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Ignored => f.write_str(" "),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Tokenizes a source string into `(Token, byte index)` pairs.
///
/// Performs a single left-to-right scan. Whitespace is skipped and produces
/// no token, so an empty or all-whitespace input yields an empty sequence
/// rather than an error.
///
/// # Errors
/// - `ParseError::InvalidCharacter` for any character that is not an ASCII
///   digit, `+`, `-`, `(`, `)`, or whitespace.
/// - `ParseError::NumericOverflow` for a digit run that does not fit in
///   `i64`.
///
/// # Examples
/// ```
/// use summa::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(13+4)").unwrap();
/// assert_eq!(tokens[1], (Token::Integer(13), 1));
///
/// assert!(tokenize("13!").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            let slice = lexer.slice();

            if !slice.is_empty() && slice.chars().all(|c| c.is_ascii_digit()) {
                return Err(ParseError::NumericOverflow { literal: slice.to_string() });
            }
            if let Some(character) = slice.chars().next() {
                return Err(ParseError::InvalidCharacter { character,
                                                          index: lexer.span().start, });
            }
            return Err(ParseError::UnexpectedEndOfInput { index: lexer.span().start });
        }
    }

    Ok(tokens)
}
