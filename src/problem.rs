//! A single generated arithmetic problem and its text form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operation::Operation;

/// Separator between the problem and the answer blank.
pub const ANSWER_SEPARATOR: &str = " = ";

/// Placeholder the student fills in.
pub const ANSWER_BLANK: &str = "___";

/// An operand pair, operator and the exact result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Problem {
    pub a: u64,
    pub op: Operation,
    pub b: u64,
    pub result: u64,
}

impl Problem {
    /// Whether `result` is exactly `a op b` (and division leaves no remainder).
    #[must_use]
    pub fn is_exact(&self) -> bool {
        if self.op == Operation::Div && (self.b == 0 || self.a % self.b != 0) {
            return false;
        }
        self.op.apply(self.a, self.b) == Some(self.result)
    }

    /// Whether any of the operands or the result is zero.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.a == 0 || self.b == 0 || self.result == 0
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{ANSWER_SEPARATOR}{ANSWER_BLANK}",
            self.a,
            self.op.symbol(),
            self.b
        )
    }
}

/// Render a problem as worksheet text, e.g. `"12 + 7 = ___"`.
#[must_use]
pub fn make_problem_text(problem: &Problem) -> String {
    problem.to_string()
}
