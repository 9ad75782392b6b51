//! Arithmetic operations and their symbol aliases.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    /// All operations in their canonical order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    /// Map an input symbol to an operation.
    ///
    /// Multiplication accepts `*` and `x`; division accepts `/` and `÷`.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' | 'x' => Some(Self::Mul),
            '/' | '÷' => Some(Self::Div),
            _ => None,
        }
    }

    /// Canonical symbol used when rendering problem text.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '×',
            Self::Div => '/',
        }
    }

    /// Apply the operation. Division is integer division; callers only divide
    /// exact multiples.
    #[must_use]
    pub fn apply(self, a: u64, b: u64) -> Option<u64> {
        match self {
            Self::Add => a.checked_add(b),
            Self::Sub => a.checked_sub(b),
            Self::Mul => a.checked_mul(b),
            Self::Div => a.checked_div(b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Filter an operations string down to supported symbols.
///
/// Unknown characters are skipped. Duplicates are kept so a symbol repeated
/// in the input is drawn proportionally more often.
#[must_use]
pub fn parse_operations(input: &str) -> Vec<Operation> {
    input
        .chars()
        .filter_map(|c| {
            let op = Operation::from_symbol(c);
            if op.is_none() && !c.is_whitespace() {
                tracing::debug!(symbol = %c, "ignoring unsupported operation symbol");
            }
            op
        })
        .collect()
}
