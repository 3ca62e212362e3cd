//! Lexer module
//!
//! Converts UTF-8 source text into a token stream with line/column
//! tracking. The stream always terminates with exactly one `Eof` token.

mod literals;
mod state;
mod tokenizer;
pub mod tokens;

pub use literals::unescape_string;
pub use tokenizer::Lexer;
pub use tokens::{LexError, Token, TokenKind};

/// Tokenize a full source text
///
/// Scanning stops at the first error; on success the result ends with a
/// single `Eof` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    let (line, col) = tokens
        .last()
        .map(|t| (t.line, t.col + t.literal.len()))
        .unwrap_or((1, 1));
    tokens.push(Token::new(TokenKind::Eof, "", line, col));

    Ok(tokens)
}

#[cfg(test)]
mod tests;
