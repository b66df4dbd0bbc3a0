/// The evaluator module walks expression trees and computes results.
///
/// The evaluator traverses the tree produced by the parser, performs the
/// arithmetic, and produces a single floating-point result. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expression nodes, performing all supported operations.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes an input line for further parsing.
///
/// The lexer (tokenizer) reads the raw text and produces a stream of tokens,
/// one per request, each corresponding to a meaningful element: an integer
/// literal or an operator. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, skipping whitespace.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer with one token
/// of lookahead and constructs a tree that encodes operator precedence and
/// associativity.
///
/// # Responsibilities
/// - Converts tokens into structured expression nodes.
/// - Validates correct grammar, reporting errors with offset info.
pub mod parser;
