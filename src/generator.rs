//! Constrained random problem generation.
//!
//! Each operation has its own sampling routine. All routines share one rule:
//! they always return a structurally valid [`Problem`]. When the constraints
//! leave no valid pair, a minimal degenerate problem is returned instead of
//! an error.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::constraints::{Bounds, Constraints};
use crate::error::{MathsheetError, Result};
use crate::operation::{parse_operations, Operation};
use crate::problem::Problem;

/// Build the random source for a run: seeded when `seed` is given, otherwise
/// from OS entropy.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate one problem for `op` under `constraints`.
pub fn generate<R: Rng + ?Sized>(
    op: Operation,
    constraints: &Constraints,
    rng: &mut R,
) -> Problem {
    let bounds = constraints.resolve(op);
    match op {
        Operation::Add => gen_add(&bounds, rng),
        Operation::Sub => gen_sub(&bounds, rng),
        Operation::Mul => gen_mul(&bounds, rng),
        Operation::Div => gen_div(&bounds, rng),
    }
}

fn gen_add<R: Rng + ?Sized>(bounds: &Bounds, rng: &mut R) -> Problem {
    let Bounds {
        max_number,
        max_result,
        min_val,
    } = *bounds;
    let cap = bounds.cap();

    if cap < min_val || max_result < 2 * min_val {
        debug!(?bounds, "no valid addition pair, using minimal pair");
        return Problem {
            a: min_val,
            op: Operation::Add,
            b: min_val,
            result: 2 * min_val,
        };
    }

    let mut a = rng.gen_range(min_val..=cap);
    let mut max_b = max_number.min(max_result - a);
    if max_b < min_val {
        // `a` left no room for `b`; draw again from a range that does.
        a = rng.gen_range(min_val..=max_number.min(max_result - min_val));
        max_b = max_number.min(max_result - a);
    }
    let b = rng.gen_range(min_val..=max_b);

    Problem {
        a,
        op: Operation::Add,
        b,
        result: a + b,
    }
}

fn gen_sub<R: Rng + ?Sized>(bounds: &Bounds, rng: &mut R) -> Problem {
    let min_val = bounds.min_val;
    // A non-zero difference of non-zero operands needs a >= 2.
    let min_a = if min_val > 0 { 2 } else { 0 };
    let cap = bounds.cap();

    if cap < min_a {
        debug!(?bounds, "no valid subtraction pair, using minimal pair");
        return Problem {
            a: min_a,
            op: Operation::Sub,
            b: min_val,
            result: min_a - min_val,
        };
    }

    let a = rng.gen_range(min_a..=cap);
    let max_b = if min_val > 0 { a - 1 } else { a };
    let b = rng.gen_range(min_val..=bounds.max_number.min(max_b));

    Problem {
        a,
        op: Operation::Sub,
        b,
        result: a - b,
    }
}

/// Largest `b` allowed for a given non-zero `a` in a multiplication.
fn mul_max_b(bounds: &Bounds, a: u64) -> u64 {
    (bounds.max_result / a).min(bounds.max_number)
}

/// Range of candidate left operands that admit at least one `b`.
///
/// Candidates run from `min_val` to `max(cap, min_val)`. `mul_max_b` is
/// non-increasing in `a`, so the surviving candidates form a prefix of that
/// range and can be sampled by index instead of being collected.
fn mul_candidates(bounds: &Bounds) -> Option<(u64, u64)> {
    let min_val = bounds.min_val;
    let hi = bounds.cap().max(min_val);
    if min_val == 0 {
        // Zero contributes (0, 0); every other `a` admits b = 0.
        return Some((0, hi));
    }
    if bounds.max_number < min_val {
        return None;
    }
    // With b >= 1 required, `a` survives exactly when a <= max_result.
    let last = hi.min(bounds.max_result);
    (last >= min_val).then_some((min_val, last))
}

fn gen_mul<R: Rng + ?Sized>(bounds: &Bounds, rng: &mut R) -> Problem {
    let min_val = bounds.min_val;
    let Some((lo, hi)) = mul_candidates(bounds) else {
        debug!(?bounds, "no multiplication candidates, using minimal pair");
        return Problem {
            a: min_val,
            op: Operation::Mul,
            b: min_val,
            result: min_val * min_val,
        };
    };

    let a = rng.gen_range(lo..=hi);
    let b = if a == 0 {
        0
    } else {
        rng.gen_range(min_val..=mul_max_b(bounds, a))
    };

    Problem {
        a,
        op: Operation::Mul,
        b,
        result: a * b,
    }
}

fn gen_div<R: Rng + ?Sized>(bounds: &Bounds, rng: &mut R) -> Problem {
    let min_val = bounds.min_val;
    let cap = bounds.cap();

    if cap < min_val {
        debug!(?bounds, "no valid division triple, using 1 / 1");
        return Problem {
            a: 1,
            op: Operation::Div,
            b: 1,
            result: 1,
        };
    }

    let c = rng.gen_range(min_val..=cap);
    let divisor_hi = bounds.max_number.min(bounds.max_result.max(1)).max(1);
    let mut b = rng.gen_range(1..=divisor_hi);
    let mut a = b.saturating_mul(c);

    if a > cap {
        // Only possible for c >= 1, and c <= cap, so cap / c >= 1.
        b = rng.gen_range(1..=(cap / c).max(1));
        a = b * c;
    }

    Problem {
        a,
        op: Operation::Div,
        b,
        result: c,
    }
}

/// Draws problems for one run from a fixed operation list.
///
/// Owns its random source, so two generators never share entropy state.
#[derive(Debug, Clone)]
pub struct ProblemGenerator<R> {
    operations: Vec<Operation>,
    constraints: Constraints,
    rng: R,
}

impl<R: Rng> ProblemGenerator<R> {
    /// Create a generator. Fails when `operations` is empty.
    pub fn new(operations: Vec<Operation>, constraints: Constraints, rng: R) -> Result<Self> {
        if operations.is_empty() {
            return Err(MathsheetError::NoValidOperation {
                input: String::new(),
            });
        }
        Ok(Self {
            operations,
            constraints,
            rng,
        })
    }

    /// Create a generator from an operations string such as `"+-*/"`.
    pub fn from_symbols(symbols: &str, constraints: Constraints, rng: R) -> Result<Self> {
        let operations = parse_operations(symbols);
        if operations.is_empty() {
            return Err(MathsheetError::NoValidOperation {
                input: symbols.to_string(),
            });
        }
        Self::new(operations, constraints, rng)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Draw an operation uniformly from the list, then a problem for it.
    pub fn next_problem(&mut self) -> Problem {
        // `new` guarantees the list is non-empty.
        let op = self
            .operations
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Operation::Add);
        generate(op, &self.constraints, &mut self.rng)
    }

    /// Draw `count` problems.
    pub fn problems(&mut self, count: usize) -> Vec<Problem> {
        (0..count).map(|_| self.next_problem()).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn bounds(max_number: u64, max_result: u64, min_val: u64) -> Bounds {
        Bounds {
            max_number,
            max_result,
            min_val,
        }
    }

    /// Literal enumeration of multiplication candidates.
    fn enumerate_mul_candidates(b: &Bounds) -> Vec<u64> {
        let hi = b.cap().max(b.min_val);
        (b.min_val..=hi)
            .filter(|&a| a == 0 || mul_max_b(b, a) >= b.min_val)
            .collect()
    }

    #[test]
    fn test_mul_candidates_match_enumeration() {
        for max_number in [0, 1, 5, 9, 99] {
            for max_result in [0, 1, 2, 7, 30, 200] {
                for min_val in [0, 1] {
                    let b = bounds(max_number, max_result, min_val);
                    let listed = enumerate_mul_candidates(&b);
                    let range = mul_candidates(&b);
                    match range {
                        None => assert!(listed.is_empty(), "{b:?}"),
                        Some((lo, hi)) => {
                            assert_eq!(listed, (lo..=hi).collect::<Vec<_>>(), "{b:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_add_fallback_when_no_pair() {
        let mut rng = rng_from_seed(Some(1));
        let p = gen_add(&bounds(9, 1, 1), &mut rng);
        assert_eq!((p.a, p.b, p.result), (1, 1, 2));
    }

    #[test]
    fn test_add_resample_keeps_sum_in_bound() {
        let mut rng = rng_from_seed(Some(3));
        for _ in 0..500 {
            let p = gen_add(&bounds(9, 10, 1), &mut rng);
            assert!(p.a >= 1 && p.b >= 1);
            assert!(p.a <= 9 && p.b <= 9);
            assert!(p.result <= 10);
        }
    }

    #[test]
    fn test_sub_fallback_under_exclude_zero() {
        let mut rng = rng_from_seed(Some(1));
        let p = gen_sub(&bounds(1, 1, 1), &mut rng);
        assert_eq!((p.a, p.b, p.result), (2, 1, 1));
    }

    #[test]
    fn test_div_zero_bound() {
        let mut rng = rng_from_seed(Some(1));
        let p = gen_div(&bounds(0, 0, 0), &mut rng);
        assert_eq!((p.a, p.b, p.result), (0, 1, 0));

        let p = gen_div(&bounds(0, 0, 1), &mut rng);
        assert_eq!((p.a, p.b, p.result), (1, 1, 1));
    }

    #[test]
    fn test_div_shrinks_divisor() {
        let mut rng = rng_from_seed(Some(9));
        for _ in 0..500 {
            let p = gen_div(&bounds(99, 12, 0), &mut rng);
            assert!(p.a <= 12, "{p:?}");
            assert!(p.b >= 1 && p.b <= 12);
            assert_eq!(p.a, p.b * p.result);
        }
    }

    #[test]
    fn test_generator_requires_operations() {
        let err = ProblemGenerator::new(Vec::new(), Constraints::default(), rng_from_seed(None))
            .unwrap_err();
        assert!(matches!(err, MathsheetError::NoValidOperation { .. }));

        let err = ProblemGenerator::from_symbols("?%", Constraints::default(), rng_from_seed(None))
            .unwrap_err();
        assert!(err.to_string().contains("?%"));
    }

    #[test]
    fn test_generator_only_uses_listed_operations() {
        let mut g =
            ProblemGenerator::from_symbols("x", Constraints::default(), rng_from_seed(Some(5)))
                .unwrap();
        assert_eq!(g.operations(), &[Operation::Mul]);
        assert!(g.problems(50).iter().all(|p| p.op == Operation::Mul));
    }
}
