//! Combinatorics utilities.
//!
//! Factorials, Fibonacci numbers, the binomial distribution and exhaustive
//! permutation enumeration.

use std::fmt;

use crate::error::{BioError, BioResult};

/// Factorial of `n` as a float, so it stays finite up to `170!`.
pub fn factorial(n: u32) -> f64 {
    (1..=n).fold(1.0, |acc, i| acc * i as f64)
}

/// The `n`-th Fibonacci number of the sequence seeded `1, 1`.
///
/// `n <= 2` yields 1.
///
/// # Errors
///
/// Returns an error if the value does not fit in a `u64`.
pub fn fibonacci(n: u32) -> BioResult<u64> {
    let (mut previous, mut current) = (1u64, 1u64);
    for _ in 2..n {
        let next = previous
            .checked_add(current)
            .ok_or_else(|| BioError::overflow(format!("fibonacci({n}) exceeds u64")))?;
        previous = current;
        current = next;
    }
    Ok(current)
}

/// Probability of exactly `x` successes in `n` trials with success probability `p`.
///
/// # Errors
///
/// Returns an error if `x > n` or `p` is not within `[0, 1]`.
pub fn binomial_distribution(n: u32, x: u32, p: f64) -> BioResult<f64> {
    if x > n {
        return Err(BioError::invalid_input(format!(
            "binomial_distribution: x ({x}) must be <= n ({n})"
        )));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(BioError::invalid_input(format!(
            "binomial_distribution: p ({p}) must be within [0, 1]"
        )));
    }

    Ok(binomial_coefficient(n, x) * p.powf(x as f64) * (1.0 - p).powf((n - x) as f64))
}

/// C(n, k) computed multiplicatively to avoid intermediate factorial overflow.
fn binomial_coefficient(n: u32, k: u32) -> f64 {
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Every ordering of `1..=n`, in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutations {
    n: u32,
    orderings: Vec<Vec<u32>>,
}

impl Permutations {
    pub fn new(n: u32) -> Self {
        let mut current: Vec<u32> = (1..=n).collect();
        let mut orderings = vec![current.clone()];
        while next_permutation(&mut current) {
            orderings.push(current.clone());
        }

        Self { n, orderings }
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn len(&self) -> usize {
        self.orderings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orderings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<u32>> {
        self.orderings.iter()
    }
}

/// The count on the first line, then one permutation per line
impl fmt::Display for Permutations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.orderings.len())?;
        for ordering in &self.orderings {
            writeln!(f)?;
            let line: Vec<String> = ordering.iter().map(|v| v.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Advance `values` to the next lexicographic permutation; false once it wraps.
fn next_permutation(values: &mut [u32]) -> bool {
    let Some(pivot) = values.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(successor) = values.iter().rposition(|&v| v > values[pivot]) else {
        return false;
    };
    values.swap(pivot, successor);
    values[pivot + 1..].reverse();
    true
}
