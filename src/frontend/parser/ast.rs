//! Abstract Syntax Tree types
//!
//! The tree is a uniform node: a kind tag, the originating lexeme, a source
//! position, and positional children whose meaning is fixed per kind
//! (binary operators hold `[lhs, rhs]`, a function call holds
//! `[callee, arguments]`, and so on).

use crate::frontend::lexer::tokens::{Token, TokenKind};
use std::fmt;

/// AST node kind
///
/// Leaf and operator kinds mirror their token kinds; the rest are compound
/// statement kinds produced by the statement parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Literals and operands
    NumberLiteral,
    RealLiteral,
    UnsignedLiteral,
    OctetLiteral,
    BitLiteral,
    StringLiteral,
    Alnumus,
    NoneValue,

    // Binary operators
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
    Period,
    DoubleColon,

    // Unary operators
    Negation,
    UnaryMinus,
    UnaryPlus,

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

    // Compound kinds
    PragmaticBlock,
    FunctionalBlock,
    Expression,
    FunctionCall,
    Arguments,
    TypeConstraints,
    TypeDefinition,
    AnonVariableDefinition,
    AnonVariableDefinitionAssignment,
    ConstrainedVariableDefinition,
    MethodDefinition,
    ShorthandVoidMethodDefinition,
    ShorthandConstrainedVoidMethodDefinition,
    ClassDefinition,
    Return,
    If,
    Elif,
    Else,
    While,
    For,
    On,
    Break,
    Continue,
    Print,
    Invalid,
}

impl NodeKind {
    /// Mirror a token kind into its node kind, for kinds that have one
    pub fn from_token(kind: TokenKind) -> Option<NodeKind> {
        let mirrored = match kind {
            TokenKind::NumberLiteral => NodeKind::NumberLiteral,
            TokenKind::RealLiteral => NodeKind::RealLiteral,
            TokenKind::UnsignedLiteral => NodeKind::UnsignedLiteral,
            TokenKind::OctetLiteral => NodeKind::OctetLiteral,
            TokenKind::BitLiteral => NodeKind::BitLiteral,
            TokenKind::StringLiteral => NodeKind::StringLiteral,
            TokenKind::Alnumus => NodeKind::Alnumus,
            TokenKind::NoneLiteral => NodeKind::NoneValue,
            TokenKind::Addition => NodeKind::Addition,
            TokenKind::Subtraction => NodeKind::Subtraction,
            TokenKind::Multiplication => NodeKind::Multiplication,
            TokenKind::Division => NodeKind::Division,
            TokenKind::Modulus => NodeKind::Modulus,
            TokenKind::SimpleAssignment => NodeKind::SimpleAssignment,
            TokenKind::AdditionAssignment => NodeKind::AdditionAssignment,
            TokenKind::SubtractionAssignment => NodeKind::SubtractionAssignment,
            TokenKind::MultiplicationAssignment => NodeKind::MultiplicationAssignment,
            TokenKind::DivisionAssignment => NodeKind::DivisionAssignment,
            TokenKind::ModulusAssignment => NodeKind::ModulusAssignment,
            TokenKind::Equality => NodeKind::Equality,
            TokenKind::Inequality => NodeKind::Inequality,
            TokenKind::Less => NodeKind::Less,
            TokenKind::LessEq => NodeKind::LessEq,
            TokenKind::Greater => NodeKind::Greater,
            TokenKind::GreaterEq => NodeKind::GreaterEq,
            TokenKind::LogicalAnd => NodeKind::LogicalAnd,
            TokenKind::LogicalOr => NodeKind::LogicalOr,
            TokenKind::Negation => NodeKind::Negation,
            TokenKind::Period => NodeKind::Period,
            TokenKind::DoubleColon => NodeKind::DoubleColon,
            TokenKind::AInt => NodeKind::AInt,
            TokenKind::AUint => NodeKind::AUint,
            TokenKind::AReal => NodeKind::AReal,
            TokenKind::AOctet => NodeKind::AOctet,
            TokenKind::ABit => NodeKind::ABit,
            TokenKind::AType => NodeKind::AType,
            TokenKind::AValue => NodeKind::AValue,
            TokenKind::AIdentity => NodeKind::AIdentity,
            TokenKind::APointer => NodeKind::APointer,
            TokenKind::AArray => NodeKind::AArray,
            TokenKind::AStr => NodeKind::AStr,
            _ => return None,
        };
        Some(mirrored)
    }

    /// Whether this kind is a binary operator node
    pub fn is_binary_operator(self) -> bool {
        matches!(
            self,
            NodeKind::Addition
                | NodeKind::Subtraction
                | NodeKind::Multiplication
                | NodeKind::Division
                | NodeKind::Modulus
                | NodeKind::SimpleAssignment
                | NodeKind::AdditionAssignment
                | NodeKind::SubtractionAssignment
                | NodeKind::MultiplicationAssignment
                | NodeKind::DivisionAssignment
                | NodeKind::ModulusAssignment
                | NodeKind::Equality
                | NodeKind::Inequality
                | NodeKind::Less
                | NodeKind::LessEq
                | NodeKind::Greater
                | NodeKind::GreaterEq
                | NodeKind::LogicalAnd
                | NodeKind::LogicalOr
                | NodeKind::Period
                | NodeKind::DoubleColon
        )
    }

    /// Whether this kind is a unary operator node
    pub fn is_unary_operator(self) -> bool {
        matches!(
            self,
            NodeKind::Negation | NodeKind::UnaryMinus | NodeKind::UnaryPlus
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// AST node
///
/// `line`/`col` carry the position of the node's first token for
/// diagnostics. They are provenance only: node equality compares kind,
/// literal, and children, so expected-tree assertions in tests do not have
/// to reconstruct positions.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub literal: String,
    pub line: usize,
    pub col: usize,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with no children and no position
    pub fn new(kind: NodeKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
            line: 0,
            col: 0,
            children: Vec::new(),
        }
    }

    /// Create a node with children
    pub fn with_children(kind: NodeKind, literal: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind,
            literal: literal.into(),
            line: 0,
            col: 0,
            children,
        }
    }

    /// Create a leaf node from a token, mirroring its kind
    pub fn leaf(token: &Token) -> Self {
        let kind = NodeKind::from_token(token.kind).unwrap_or(NodeKind::Invalid);
        Self::from_token(kind, token)
    }

    /// Create a node positioned at a token
    pub fn from_token(kind: NodeKind, token: &Token) -> Self {
        Self {
            kind,
            literal: token.literal.clone(),
            line: token.line,
            col: token.col,
            children: Vec::new(),
        }
    }

    /// Append a child node
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Render the tree in the indented dump format
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_into(&mut out, 0);
        out
    }

    fn pretty_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push('[');
        out.push_str(&self.kind.to_string());
        out.push_str("] ");
        out.push_str(&self.literal);
        out.push('\n');
        for child in &self.children {
            child.pretty_into(out, depth + 1);
        }
    }
}

// Provenance-insensitive equality: two trees are equal when their kinds,
// literals, and children match.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.literal == other.literal
            && self.children == other.children
    }
}

impl Eq for Node {}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
