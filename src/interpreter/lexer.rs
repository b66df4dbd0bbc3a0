use logos::Logos;

/// Represents a lexical token in the input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`; carries the literal digit text.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,

    /// Spaces, tabs, and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}
