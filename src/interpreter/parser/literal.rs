use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
    util::num::u64_to_f64_checked,
};

/// Parses an integer literal, the atomic rule of the grammar.
///
/// The next token must be an `Integer`; it is consumed and its digit text is
/// interpreted as a base-10 value, promoted to `f64`. Any other token is a
/// grammar fault naming the expected and actual kinds; exhausted input is
/// reported at the end offset of the line.
///
/// The rule is: `literal := INTEGER`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `end`: Offset of the end of the input line.
///
/// # Returns
/// An `Expr::Literal` node carrying the promoted value.
///
/// # Errors
/// - `UnexpectedToken` if the next token is not an integer literal.
/// - `UnexpectedEndOfInput` if no tokens remain.
/// - `LiteralTooLarge` if the digit run is not exactly representable as `f64`.
pub fn parse_literal<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(text), column)) => {
            // The lexer only produces digit runs, so a failed parse is overflow.
            let value = text.parse::<u64>()
                            .ok()
                            .ok_or(ParseError::LiteralTooLarge { column: *column })
                            .and_then(|v| {
                                u64_to_f64_checked(v, ParseError::LiteralTooLarge { column: *column })
                            })?;

            Ok(Expr::Literal { value,
                               column: *column })
        },

        Some((tok, column)) => {
            Err(ParseError::UnexpectedToken { token:  format!("Expected integer literal, found {tok:?}"),
                                              column: *column, })
        },

        None => Err(ParseError::UnexpectedEndOfInput { column: end }),
    }
}
