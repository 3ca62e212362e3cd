//! Literal scanning implementations
//!
//! Numbers with their `u`/`b`/`c` suffixes, single-quoted strings, and the
//! `'x'c` character-octet form.

use crate::frontend::lexer::tokens::{LexError, Token, TokenKind};
use crate::frontend::lexer::tokenizer::Lexer;

/// Scan a number literal
///
/// `<digits>` is a number, `<digits>.<digits>` a real. An integer may carry
/// one suffix: `u` (unsigned, must fit 32 bits), `b` (bit, `0b`/`1b` only),
/// `c` (octet, 0..=255).
pub fn scan_number(lexer: &mut Lexer<'_>, first_char: char) -> Result<Token, LexError> {
    let mut digits = String::new();
    digits.push(first_char);

    while let Some(&c) = lexer.peek() {
        if is_digit(c) {
            digits.push(c);
            lexer.advance();
        } else {
            break;
        }
    }

    // Fractional part makes this a real literal. A real takes no suffix.
    if lexer.peek() == Some(&'.') && lexer.peek_next().map(is_digit).unwrap_or(false) {
        digits.push('.');
        lexer.advance();
        while let Some(&c) = lexer.peek() {
            if is_digit(c) {
                digits.push(c);
                lexer.advance();
            } else {
                break;
            }
        }
        return Ok(lexer.make_token(TokenKind::RealLiteral, digits));
    }

    match lexer.peek() {
        Some(&'u') => {
            lexer.advance();
            digits.push('u');
            if digits[..digits.len() - 1].parse::<u32>().is_err() {
                return Err(LexError::InvalidNumber {
                    literal: digits,
                    message: "unsigned literal does not fit 32 bits".to_string(),
                    line: lexer.start_line(),
                    col: lexer.start_column(),
                });
            }
            Ok(lexer.make_token(TokenKind::UnsignedLiteral, digits))
        }
        Some(&'b') => {
            lexer.advance();
            digits.push('b');
            if digits != "0b" && digits != "1b" {
                return Err(LexError::InvalidNumber {
                    literal: digits,
                    message: "bit literal must be 0b or 1b".to_string(),
                    line: lexer.start_line(),
                    col: lexer.start_column(),
                });
            }
            Ok(lexer.make_token(TokenKind::BitLiteral, digits))
        }
        Some(&'c') => {
            lexer.advance();
            digits.push('c');
            match digits[..digits.len() - 1].parse::<u32>() {
                Ok(n) if n <= 255 => Ok(lexer.make_token(TokenKind::OctetLiteral, digits)),
                _ => Err(LexError::InvalidNumber {
                    literal: digits,
                    message: "octet literal must be in 0..=255".to_string(),
                    line: lexer.start_line(),
                    col: lexer.start_column(),
                }),
            }
        }
        _ => Ok(lexer.make_token(TokenKind::NumberLiteral, digits)),
    }
}

/// Scan a string literal (the opening quote is already consumed)
///
/// Single-quoted with `\\`, `\'`, `\n`, `\t` escapes. Embedded newlines are
/// allowed and advance the line counter. A one-byte string followed
/// immediately by `c` is the character form of an octet literal.
pub fn scan_string(lexer: &mut Lexer<'_>) -> Result<Token, LexError> {
    // The token literal keeps the raw lexeme including quotes and escapes;
    // the evaluator unescapes.
    let mut raw = String::from("'");

    loop {
        match lexer.advance() {
            Some('\'') => {
                raw.push('\'');
                break;
            }
            Some('\\') => match lexer.advance() {
                Some(escaped @ ('\\' | '\'' | 'n' | 't')) => {
                    raw.push('\\');
                    raw.push(escaped);
                }
                Some(other) => {
                    return Err(LexError::InvalidEscape {
                        sequence: format!("\\{}", other),
                        line: lexer.start_line(),
                        col: lexer.start_column(),
                    })
                }
                None => {
                    return Err(LexError::UnterminatedString {
                        literal: raw,
                        line: lexer.start_line(),
                        col: lexer.start_column(),
                    })
                }
            },
            Some(c) => raw.push(c),
            None => {
                return Err(LexError::UnterminatedString {
                    literal: raw,
                    line: lexer.start_line(),
                    col: lexer.start_column(),
                })
            }
        }
    }

    // 'x'c character-octet form
    if lexer.peek() == Some(&'c') {
        let content = unescape_string(&raw);
        lexer.advance();
        raw.push('c');
        if content.len() == 1 && content.is_ascii() {
            return Ok(lexer.make_token(TokenKind::OctetLiteral, raw));
        }
        return Err(LexError::InvalidNumber {
            literal: raw,
            message: "character octet must hold exactly one byte".to_string(),
            line: lexer.start_line(),
            col: lexer.start_column(),
        });
    }

    Ok(lexer.make_token(TokenKind::StringLiteral, raw))
}

/// Decode a raw string lexeme (quotes plus escapes) into its content
///
/// Escapes were validated during lexing; anything else passes through.
pub fn unescape_string(raw: &str) -> String {
    let trimmed = raw.strip_suffix('c').unwrap_or(raw);
    let inner = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(trimmed);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('\\') => out.push('\\'),
                Some('\'') => out.push('\''),
                Some(other) => out.push(other),
                None => {}
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Check if character is valid identifier start
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if character is valid identifier continuation
#[inline]
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check if character is a digit
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
