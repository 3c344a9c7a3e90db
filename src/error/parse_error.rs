#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character that is not a digit, operator, parenthesis, or
    /// whitespace.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The byte index of the character in the source.
        index:     usize,
    },
    /// An integer literal was too large to be represented.
    NumericOverflow {
        /// The literal text as it appeared in the source.
        literal: String,
    },
    /// Found a token the grammar does not allow at this position.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The byte index of the token in the source.
        index: usize,
    },
    /// The tokens ran out while the grammar still expected more.
    UnexpectedEndOfInput {
        /// The byte index just past the last consumed token.
        index: usize,
    },
    /// An opening parenthesis `(` has no matching `)`.
    UnmatchedParenthesis {
        /// The byte index of the unmatched `(`.
        open_index: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => {
                write!(f, "Error at index {index}: Invalid character: '{character}'.")
            },

            Self::NumericOverflow { literal } => {
                write!(f, "Error: Integer literal {literal} is too large.")
            },

            Self::UnexpectedToken { token, index } => {
                write!(f, "Error at index {index}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { index } => {
                write!(f, "Error at index {index}: Unexpected end of input.")
            },

            Self::UnmatchedParenthesis { open_index } => write!(f,
                                                                "Error at index {open_index}: Opening parenthesis '(' is never closed."),
        }
    }
}

impl std::error::Error for ParseError {}
