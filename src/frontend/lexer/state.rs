//! Lexer state management
//!
//! Keyword recognition and the per-file keyword style rule: every keyword in
//! a source file must be spelled either with the `#` directive prefix or
//! without it, never both in one file.

use crate::frontend::lexer::tokens::{LexError, TokenKind};

/// Which keyword spelling a file has committed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordStyle {
    Directive,
    Plain,
}

/// Lexer state
///
/// The style is fixed by the first keyword encountered; every later keyword
/// is checked against it.
#[derive(Debug, Default)]
pub struct LexerState {
    style: Option<KeywordStyle>,
}

impl LexerState {
    /// Create new lexer state
    pub fn new() -> Self {
        Self { style: None }
    }

    /// Convert a word to its keyword token, if it is one
    ///
    /// Type keywords map directly to their sigil token kinds, the same kinds
    /// the `&`-prefixed spelling produces.
    pub fn keyword_from_str(&self, s: &str) -> Option<TokenKind> {
        match s {
            "include" => Some(TokenKind::Include),
            "macro" => Some(TokenKind::Macro),
            "enter" => Some(TokenKind::Enter),
            "start" => Some(TokenKind::Start),
            "type" => Some(TokenKind::Type),
            "var" => Some(TokenKind::Var),
            "class" => Some(TokenKind::Class),
            "obj" => Some(TokenKind::Obj),
            "private" => Some(TokenKind::Private),
            "public" => Some(TokenKind::Public),
            "func" => Some(TokenKind::Func),
            "const" => Some(TokenKind::Const),
            "static" => Some(TokenKind::Static),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "elif" => Some(TokenKind::Elif),
            "while" => Some(TokenKind::While),
            "for" => Some(TokenKind::For),
            "on" => Some(TokenKind::On),
            "break" => Some(TokenKind::Break),
            "continue" => Some(TokenKind::Continue),
            "return" => Some(TokenKind::Return),
            "print" => Some(TokenKind::Print),
            "none" => Some(TokenKind::NoneLiteral),
            _ => self.type_keyword_from_str(s),
        }
    }

    /// Convert a type keyword to its sigil token kind
    ///
    /// Used both for plain/directive keyword spellings and for the
    /// `&`-prefixed sigil form.
    pub fn type_keyword_from_str(&self, s: &str) -> Option<TokenKind> {
        match s {
            "int" => Some(TokenKind::AInt),
            "uint" => Some(TokenKind::AUint),
            "real" => Some(TokenKind::AReal),
            "octet" => Some(TokenKind::AOctet),
            "bit" => Some(TokenKind::ABit),
            "type" => Some(TokenKind::AType),
            "value" => Some(TokenKind::AValue),
            "identity" => Some(TokenKind::AIdentity),
            "pointer" => Some(TokenKind::APointer),
            "array" => Some(TokenKind::AArray),
            "str" => Some(TokenKind::AStr),
            _ => None,
        }
    }

    /// Record the spelling style of a keyword occurrence
    ///
    /// The first keyword fixes the file's style; any later keyword in the
    /// other style is a lex error.
    pub fn note_keyword_style(
        &mut self,
        directive: bool,
        literal: &str,
        line: usize,
        col: usize,
    ) -> Result<(), LexError> {
        let style = if directive {
            KeywordStyle::Directive
        } else {
            KeywordStyle::Plain
        };
        match self.style {
            None => {
                self.style = Some(style);
                Ok(())
            }
            Some(fixed) if fixed == style => Ok(()),
            Some(_) => Err(LexError::MixedKeywordStyle {
                literal: literal.to_string(),
                line,
                col,
            }),
        }
    }
}
