//! Token types

use crate::util::span::Position;
use std::fmt;

/// Lexer error
///
/// Every variant carries the offending lexeme position so diagnostics can be
/// rendered uniformly. Tokenizing stops at the first error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LexError {
    #[error("LexError Unexpected character '{ch}'. Offending token: {ch}| Line: {line}| Col: {col}")]
    UnexpectedChar { ch: char, line: usize, col: usize },

    #[error("LexError Unexpected sequence. Offending token: {literal}| Line: {line}| Col: {col}")]
    UnexpectedSequence {
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("LexError Unterminated string literal. Offending token: {literal}| Line: {line}| Col: {col}")]
    UnterminatedString {
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("LexError Invalid escape sequence. Offending token: {sequence}| Line: {line}| Col: {col}")]
    InvalidEscape {
        sequence: String,
        line: usize,
        col: usize,
    },

    #[error("LexError Invalid number literal: {message}. Offending token: {literal}| Line: {line}| Col: {col}")]
    InvalidNumber {
        literal: String,
        message: String,
        line: usize,
        col: usize,
    },

    #[error("LexError Misspelled directive. Offending token: {literal}| Line: {line}| Col: {col}")]
    MisspelledDirective {
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("LexError Keyword style mixes directive and plain forms in one file. Offending token: {literal}| Line: {line}| Col: {col}")]
    MixedKeywordStyle {
        literal: String,
        line: usize,
        col: usize,
    },

    #[error("LexError '&' must be followed by a type keyword. Offending token: {literal}| Line: {line}| Col: {col}")]
    InvalidSigil {
        literal: String,
        line: usize,
        col: usize,
    },
}

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Include,
    Macro,
    Enter,
    Start,
    Type,
    Var,
    Class,
    Obj,
    Private,
    Public,
    Func,
    Const,
    Static,
    If,
    Else,
    Elif,
    While,
    For,
    On,
    Break,
    Continue,
    Return,
    Print,

    // Built-in type sigils
    AInt,
    AUint,
    AReal,
    AOctet,
    ABit,
    AType,
    AValue,
    AIdentity,
    APointer,
    AArray,
    AStr,

    // Literals
    NumberLiteral,
    RealLiteral,
    UnsignedLiteral,
    OctetLiteral,
    BitLiteral,
    StringLiteral,
    Alnumus,
    NoneLiteral,

    // Scope delimiters: () scope, {} list, [] frame
    OpenScope,
    CloseScope,
    OpenList,
    CloseList,
    OpenFrame,
    CloseFrame,

    // Operators
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulus,
    SimpleAssignment,
    AdditionAssignment,
    SubtractionAssignment,
    MultiplicationAssignment,
    DivisionAssignment,
    ModulusAssignment,
    Equality,
    Inequality,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    LogicalAnd,
    LogicalOr,
    Negation,
    Period,
    Ellipsis,
    DoubleColon,

    // Structure
    Comma,
    Eos,
    Eof,
}

impl TokenKind {
    /// Whether this kind opens one of the three bracket families
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(
            self,
            TokenKind::OpenScope | TokenKind::OpenList | TokenKind::OpenFrame
        )
    }

    /// Whether this kind closes one of the three bracket families
    #[inline]
    pub fn is_close(self) -> bool {
        matches!(
            self,
            TokenKind::CloseScope | TokenKind::CloseList | TokenKind::CloseFrame
        )
    }

}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexeme with its source position
///
/// Tokens are immutable after production; the preprocessor builds new tokens
/// rather than editing existing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind,
            literal: literal.into(),
            line,
            col,
        }
    }

    /// Source position of the token start
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }
}
