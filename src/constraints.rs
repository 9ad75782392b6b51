//! Numeric constraints for problem generation.
//!
//! A [`Constraints`] value holds the caller's optional limits. Before any
//! operand is drawn it is resolved into concrete [`Bounds`] for a specific
//! operation, because the bound that is left unspecified is derived
//! differently for each operation.

use serde::{Deserialize, Serialize};

use crate::operation::Operation;

/// Bound used when neither digits nor a max result is given (two digits).
pub const DEFAULT_BOUND: u64 = 99;

/// Largest supported digit count.
pub const MAX_DIGITS: u32 = 5;

/// Caller-supplied limits for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Constraints {
    /// Upper bound on the result (for subtraction and division, on the
    /// largest number in the problem).
    pub max_result: Option<u64>,
    /// Maximum number of digits in any single operand.
    pub max_digits: Option<u32>,
    /// Forbid zero among operands and result.
    pub exclude_zero: bool,
}

/// Concrete limits after resolving [`Constraints`] for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Largest value of any single number.
    pub max_number: u64,
    /// Largest result (operation specific meaning, see [`Constraints`]).
    pub max_result: u64,
    /// Smallest value any operand may take: 1 under exclude-zero, else 0.
    pub min_val: u64,
}

impl Bounds {
    /// `min(max_number, max_result)`: the cap shared by most operands.
    #[must_use]
    pub fn cap(&self) -> u64 {
        self.max_number.min(self.max_result)
    }
}

/// Convert a digit count into the largest number with that many digits.
#[must_use]
pub fn digits_to_max(digits: u32) -> u64 {
    10u64
        .checked_pow(digits.min(MAX_DIGITS))
        .map_or(u64::MAX, |p| p - 1)
}

impl Constraints {
    pub fn with_max_result(mut self, max_result: u64) -> Self {
        self.max_result = Some(max_result);
        self
    }

    pub fn with_max_digits(mut self, digits: u32) -> Self {
        self.max_digits = Some(digits);
        self
    }

    pub fn excluding_zero(mut self, exclude_zero: bool) -> Self {
        self.exclude_zero = exclude_zero;
        self
    }

    /// Resolve to concrete bounds for `op`.
    #[must_use]
    pub fn resolve(&self, op: Operation) -> Bounds {
        let min_val = u64::from(self.exclude_zero);
        let max_number = self.max_digits.map(digits_to_max);

        let (max_number, max_result) = match (max_number, self.max_result) {
            (None, None) => (DEFAULT_BOUND, DEFAULT_BOUND),
            (Some(n), Some(r)) => (n, r),
            (None, Some(r)) => match op {
                // Dividends may be as large as result times divisor.
                Operation::Div => (r.saturating_mul(r), r),
                _ => (r, r),
            },
            (Some(n), None) => match op {
                Operation::Add => (n, n.saturating_mul(2)),
                Operation::Mul => (n, n.saturating_mul(n)),
                Operation::Sub | Operation::Div => (n, n),
            },
        };

        Bounds {
            max_number,
            max_result,
            min_val,
        }
    }
}
