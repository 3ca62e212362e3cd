//! Tokenizer implementation
//!
//! Longest-match left-to-right scan over a UTF-8 source. Whitespace and
//! `//` comments are skipped; line and column are maintained throughout.

use super::literals::{is_digit, is_identifier_char, is_identifier_start, scan_number, scan_string};
use super::state::LexerState;
use crate::frontend::lexer::tokens::{LexError, Token, TokenKind};
use std::iter::Peekable;
use std::str::Chars;

/// Main lexer structure
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
    start_line: usize,
    start_column: usize,
    state: LexerState,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            state: LexerState::new(),
        }
    }

    /// Advance to next character
    pub fn advance(&mut self) -> Option<char> {
        match self.chars.next() {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
                Some('\n')
            }
            Some(c) => {
                self.column += 1;
                Some(c)
            }
            None => None,
        }
    }

    /// Peek at next character
    pub fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    /// Peek at character after next
    pub fn peek_next(&mut self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    /// Start line of the current token
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// Start column of the current token
    pub fn start_column(&self) -> usize {
        self.start_column
    }

    /// Create token positioned at the current token start
    pub fn make_token(&self, kind: TokenKind, literal: impl Into<String>) -> Token {
        Token::new(kind, literal, self.start_line, self.start_column)
    }

    /// Skip whitespace and single-line comments
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '/' => {
                    if self.peek_next() == Some('/') {
                        self.advance();
                        self.advance();
                        while let Some(&c) = self.peek() {
                            if c == '\n' {
                                break;
                            }
                            self.advance();
                        }
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
    }

    /// Produce the next token, or `None` at end of input
    ///
    /// A NUL byte terminates the scan (buffers carried over from C-style
    /// sources end in `\0`).
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace_and_comments();

        let c = match self.peek() {
            Some(&'\0') | None => return Ok(None),
            Some(&c) => c,
        };

        self.start_line = self.line;
        self.start_column = self.column;
        self.advance();

        let token = match c {
            c if is_identifier_start(c) => self.scan_word(c, false)?,
            c if is_digit(c) => scan_number(self, c)?,
            '\'' => scan_string(self)?,
            '#' => {
                let first = match self.peek() {
                    Some(&c) if is_identifier_start(c) => c,
                    _ => {
                        return Err(LexError::UnexpectedChar {
                            ch: '#',
                            line: self.start_line,
                            col: self.start_column,
                        })
                    }
                };
                self.advance();
                self.scan_word(first, true)?
            }
            '&' => {
                if self.peek() == Some(&'&') {
                    self.advance();
                    self.make_token(TokenKind::LogicalAnd, "&&")
                } else {
                    self.scan_sigil()?
                }
            }
            '|' => {
                if self.peek() == Some(&'|') {
                    self.advance();
                    self.make_token(TokenKind::LogicalOr, "||")
                } else {
                    return Err(LexError::UnexpectedChar {
                        ch: '|',
                        line: self.start_line,
                        col: self.start_column,
                    });
                }
            }
            '=' => {
                if self.peek() == Some(&'=') {
                    self.advance();
                    self.make_token(TokenKind::Equality, "==")
                } else {
                    self.make_token(TokenKind::SimpleAssignment, "=")
                }
            }
            '!' => {
                if self.peek() == Some(&'=') {
                    self.advance();
                    self.make_token(TokenKind::Inequality, "!=")
                } else {
                    self.make_token(TokenKind::Negation, "!")
                }
            }
            '<' => {
                if self.peek() == Some(&'=') {
                    self.advance();
                    self.make_token(TokenKind::LessEq, "<=")
                } else {
                    self.make_token(TokenKind::Less, "<")
                }
            }
            '>' => {
                if self.peek() == Some(&'=') {
                    self.advance();
                    self.make_token(TokenKind::GreaterEq, ">=")
                } else {
                    self.make_token(TokenKind::Greater, ">")
                }
            }
            '+' => {
                if self.peek() == Some(&'=') {
                    self.advance();
                    self.make_token(TokenKind::AdditionAssignment, "+=")
                } else {
                    self.make_token(TokenKind::Addition, "+")
                }
            }
            '-' => {
                if self.peek() == Some(&'=') {
                    self.advance();
                    self.make_token(TokenKind::SubtractionAssignment, "-=")
                } else {
                    self.make_token(TokenKind::Subtraction, "-")
                }
            }
            '*' => {
                if self.peek() == Some(&'=') {
                    self.advance();
                    self.make_token(TokenKind::MultiplicationAssignment, "*=")
                } else {
                    self.make_token(TokenKind::Multiplication, "*")
                }
            }
            '/' => {
                if self.peek() == Some(&'=') {
                    self.advance();
                    self.make_token(TokenKind::DivisionAssignment, "/=")
                } else {
                    self.make_token(TokenKind::Division, "/")
                }
            }
            '%' => {
                if self.peek() == Some(&'=') {
                    self.advance();
                    self.make_token(TokenKind::ModulusAssignment, "%=")
                } else {
                    self.make_token(TokenKind::Modulus, "%")
                }
            }
            '.' => {
                if self.peek() == Some(&'.') {
                    self.advance();
                    if self.peek() == Some(&'.') {
                        self.advance();
                        self.make_token(TokenKind::Ellipsis, "...")
                    } else {
                        return Err(LexError::UnexpectedSequence {
                            literal: "..".to_string(),
                            line: self.start_line,
                            col: self.start_column,
                        });
                    }
                } else {
                    self.make_token(TokenKind::Period, ".")
                }
            }
            ':' => {
                if self.peek() == Some(&':') {
                    self.advance();
                    self.make_token(TokenKind::DoubleColon, "::")
                } else {
                    return Err(LexError::UnexpectedChar {
                        ch: ':',
                        line: self.start_line,
                        col: self.start_column,
                    });
                }
            }
            '(' => self.make_token(TokenKind::OpenScope, "("),
            ')' => self.make_token(TokenKind::CloseScope, ")"),
            '{' => self.make_token(TokenKind::OpenList, "{"),
            '}' => self.make_token(TokenKind::CloseList, "}"),
            '[' => self.make_token(TokenKind::OpenFrame, "["),
            ']' => self.make_token(TokenKind::CloseFrame, "]"),
            ',' => self.make_token(TokenKind::Comma, ","),
            ';' => self.make_token(TokenKind::Eos, ";"),
            c => {
                return Err(LexError::UnexpectedChar {
                    ch: c,
                    line: self.start_line,
                    col: self.start_column,
                })
            }
        };

        Ok(Some(token))
    }

    /// Scan an alnumus and classify it as keyword or identifier
    ///
    /// `directive` marks the `#`-prefixed form; a directive that is not a
    /// keyword spelling is a misspell error, and keyword occurrences feed
    /// the per-file style check.
    fn scan_word(&mut self, first_char: char, directive: bool) -> Result<Token, LexError> {
        let mut word = String::new();
        word.push(first_char);

        while let Some(&c) = self.peek() {
            if is_identifier_char(c) {
                word.push(c);
                self.advance();
            } else {
                break;
            }
        }

        match self.state.keyword_from_str(&word) {
            Some(kind) => {
                let literal = if directive {
                    format!("#{}", word)
                } else {
                    word
                };
                self.state.note_keyword_style(
                    directive,
                    &literal,
                    self.start_line,
                    self.start_column,
                )?;
                Ok(self.make_token(kind, literal))
            }
            None if directive => Err(LexError::MisspelledDirective {
                literal: format!("#{}", word),
                line: self.start_line,
                col: self.start_column,
            }),
            None => Ok(self.make_token(TokenKind::Alnumus, word)),
        }
    }

    /// Scan the `&`-prefixed type sigil form (`&int`, `&array`, ...)
    fn scan_sigil(&mut self) -> Result<Token, LexError> {
        let mut word = String::new();
        while let Some(&c) = self.peek() {
            if is_identifier_char(c) {
                word.push(c);
                self.advance();
            } else {
                break;
            }
        }

        match self.state.type_keyword_from_str(&word) {
            Some(kind) => Ok(self.make_token(kind, format!("&{}", word))),
            None => Err(LexError::InvalidSigil {
                literal: format!("&{}", word),
                line: self.start_line,
                col: self.start_column,
            }),
        }
    }
}
