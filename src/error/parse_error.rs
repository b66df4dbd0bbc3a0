#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer found a character that is not part of the language.
    UnexpectedCharacter {
        /// The offending character.
        found:  String,
        /// The column offset where the character occurred.
        column: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered, with the expectation it violated.
        token:  String,
        /// The column offset where the token started.
        column: usize,
    },
    /// Reached the end of input where a token was required.
    UnexpectedEndOfInput {
        /// The column offset where input ended.
        column: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token:  String,
        /// The column offset where the token started.
        column: usize,
    },
    /// An integer literal was too large to be represented safely.
    LiteralTooLarge {
        /// The column offset where the literal started.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, column } => {
                write!(f, "Error at column {column}: Unrecognized character '{found}'.")
            },

            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { column } => {
                write!(f, "Error at column {column}: Unexpected end of input.")
            },

            Self::UnexpectedTrailingTokens { token, column } => write!(f,
                                                                       "Error at column {column}: Extra tokens after expression. Check your input: {token}"),

            Self::LiteralTooLarge { column } => {
                write!(f, "Error at column {column}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
