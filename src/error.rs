/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line. Parse errors include unrecognized characters, unexpected
/// tokens, oversized literals, and any other issues detected before
/// evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
