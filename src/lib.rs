//! # linecalc
//!
//! linecalc is a tiny arithmetic interpreter written in Rust.
//! It tokenizes, parses, and evaluates single-line expressions made of
//! non-negative integer literals and the operators `+`, `-`, `*` and `/`,
//! with standard precedence and left-to-right associativity.

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

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::eval, lexer::Token, parser::core::parse_expression},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an input line as a tree. The tree is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the literal and binary-operation node types.
/// - Attaches source offsets to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing, or
/// evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including error kinds, descriptions,
/// and source offsets for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches column offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, and error handling
/// to provide a complete pipeline from one line of text to one numeric
/// result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used by the parser.
///
/// # Responsibilities
/// - Safely convert integer literal values to `f64` without silent data loss.
pub mod util;

/// Evaluates one line of arithmetic and returns the numeric result.
///
/// The line is tokenized, parsed with one token of lookahead, and the
/// resulting expression tree is evaluated to a single `f64`. Any tokens left
/// over after a complete expression are rejected. The call is self-contained:
/// no state survives into the next call, and independent calls never share
/// anything.
///
/// # Errors
/// Returns an error if the line contains an unrecognized character, violates
/// the grammar, contains an integer literal too large to represent exactly,
/// or divides by zero.
///
/// # Examples
/// ```
/// use linecalc::evaluate;
///
/// // Multiplication binds tighter than addition.
/// let result = evaluate("2 + 3 * 4").unwrap();
/// assert_eq!(result, 14.0);
///
/// // Division by zero is an error, not a value.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(line: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(Box::new(ParseError::UnexpectedCharacter { found:  lexer.slice().to_string(),
                                                                  column: lexer.span().start, }));
        }
    }

    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter, line.len())?;

    if let Some((token, column)) = iter.peek() {
        return Err(Box::new(ParseError::UnexpectedTrailingTokens { token:  format!("{token:?}"),
                                                                   column: *column, }));
    }

    Ok(eval(&expr)?)
}
