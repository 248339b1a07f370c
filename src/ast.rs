//! Syntax tree types for figura source text
//!
//! The command stream is shallow: a list of named invocations whose argument
//! text is parsed lazily into [`ArgumentList`]. Numeric arguments that accept
//! algebra are parsed into [`Expr`].

use std::ops::Range;

/// One `name(arguments)` invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub name: String,
    /// Raw text between the parentheses (balanced, un-trimmed)
    pub arguments: String,
    /// Byte range of the whole invocation in the source
    pub span: Range<usize>,
    pub ending: Ending,
}

/// How an invocation's argument text ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Closed by its matching `)`
    Closed,
    /// No matching `)`; the invocation runs to the end of the text
    Unclosed,
    /// Parentheses nested deeper than [`crate::parse::MAX_NESTING`]
    TooDeep,
}

/// A single `key=value` argument; `value` is trimmed but still quoted
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub key: String,
    pub value: String,
}

/// The arguments of one command, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentList {
    pub arguments: Vec<Argument>,
}

impl ArgumentList {
    /// Raw value for `key`; the last occurrence wins
    pub fn get(&self, key: &str) -> Option<&str> {
        self.arguments
            .iter()
            .rev()
            .find(|arg| arg.key == key)
            .map(|arg| arg.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

/// Arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Constant(Constant),
    UnaryOp(UnaryOp, Box<Expr>),
    BinaryOp(Box<Expr>, BinaryOp, Box<Expr>),
}

/// Named constants usable in expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Pos,
}
