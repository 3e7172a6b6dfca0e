//! Brute-force search for moduli in which a Gibonacci sequence has period
//! dividing `n`.
//!
//! With `G_0 = a`, `G_1 = b`:
//!   G_n     = b*F(n) + a*F(n-1)
//!   G_{n+1} = (a + b)*F(n) + b*F(n-1)
//!
//! A modulus `m` is a solution when `G_n mod m` equals `a` and
//! `G_{n+1} mod m` equals `b`. The residues are compared with the seeds
//! themselves, so every solution exceeds `max(a, b)`. With
//! [`SolverQuery::with_reduced_seeds`] the seeds are reduced first and a
//! solution is any `m` in which the state `(a mod m, b mod m)` recurs
//! after `n` steps.

use num_bigint::BigUint;
use rayon::prelude::*;
use serde::Serialize;

use crate::constants::{
    DEFAULT_INDEX, DEFAULT_SEARCH_LIMIT, DEFAULT_SEARCH_START, DEFAULT_SEED_A, DEFAULT_SEED_B,
    MAX_INDEX, MAX_SEARCH_LIMIT, MAX_SEED, MIN_MODULUS,
};
use crate::cycles::period;
use crate::error::GibError;
use crate::fibonacci::reduce;

/// Inputs of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolverQuery {
    /// Seed `G_0`.
    pub a: u64,
    /// Seed `G_1`.
    pub b: u64,
    /// Step count after which the seed must recur.
    pub n: u64,
    /// First modulus tried.
    pub start: u64,
    /// Exclusive end of the search.
    pub limit: u64,
    /// Compare against `a mod m` and `b mod m` instead of the raw seeds.
    pub reduce_seeds: bool,
}

impl Default for SolverQuery {
    fn default() -> Self {
        Self::new(DEFAULT_SEED_A, DEFAULT_SEED_B, DEFAULT_INDEX)
    }
}

impl SolverQuery {
    /// Query over the default range `3..3000`.
    #[must_use]
    pub fn new(a: u64, b: u64, n: u64) -> Self {
        Self {
            a,
            b,
            n,
            start: DEFAULT_SEARCH_START,
            limit: DEFAULT_SEARCH_LIMIT,
            reduce_seeds: false,
        }
    }

    /// Override the searched range `start..limit`.
    #[must_use]
    pub fn with_range(mut self, start: u64, limit: u64) -> Self {
        self.start = start;
        self.limit = limit;
        self
    }

    /// Accept moduli at or below the seeds by reducing them first.
    #[must_use]
    pub fn with_reduced_seeds(mut self, reduce_seeds: bool) -> Self {
        self.reduce_seeds = reduce_seeds;
        self
    }

    /// Check seeds, index and range bounds.
    pub fn validate(&self) -> Result<(), GibError> {
        if self.a > MAX_SEED || self.b > MAX_SEED {
            return Err(GibError::InvalidInput(format!(
                "seeds must be in [0, {MAX_SEED}], got a={} b={}",
                self.a, self.b
            )));
        }
        if self.n == 0 || self.n > MAX_INDEX {
            return Err(GibError::InvalidInput(format!(
                "index n must be in [1, {MAX_INDEX}], got {}",
                self.n
            )));
        }
        if self.start < MIN_MODULUS || self.start >= self.limit || self.limit > MAX_SEARCH_LIMIT {
            return Err(GibError::InvalidInput(format!(
                "search range {}..{} must satisfy {MIN_MODULUS} <= start < limit <= {MAX_SEARCH_LIMIT}",
                self.start, self.limit
            )));
        }
        Ok(())
    }
}

/// One modulus satisfying both congruences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolvedModulus {
    pub modulus: u64,
    /// Actual period of `(a mod m, b mod m)`; always divides `n`.
    pub period: usize,
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub query: SolverQuery,
    pub moduli: Vec<SolvedModulus>,
}

impl Solution {
    /// The solving moduli, ascending.
    #[must_use]
    pub fn moduli(&self) -> Vec<u64> {
        self.moduli.iter().map(|s| s.modulus).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moduli.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moduli.len()
    }
}

/// Whether `G_n mod m == a` and `G_{n+1} mod m == b`, given `F(n)` and
/// `F(n-1)` mod `m`.
///
/// A seed at or above `m` never matches its residue.
#[must_use]
pub fn satisfies(a: u64, b: u64, fn_mod: u64, fn1_mod: u64, m: u64) -> bool {
    let (ra, rb) = (u128::from(a % m), u128::from(b % m));
    let (f, g, m) = (u128::from(fn_mod), u128::from(fn1_mod), u128::from(m));

    let g_n = (rb * f + ra * g) % m;
    if g_n != u128::from(a) {
        return false;
    }
    let g_n1 = ((ra + rb) * f + rb * g) % m;
    g_n1 == u128::from(b)
}

/// Search every modulus in `query.start..query.limit`.
///
/// # Example
/// ```
/// use gibcalc_core::solver::{solve, SolverQuery};
/// // Lucas numbers repeat mod 5 every 4 steps.
/// let solution = solve(&SolverQuery::new(2, 1, 4)).unwrap();
/// assert_eq!(solution.moduli(), vec![5]);
/// ```
pub fn solve(query: &SolverQuery) -> Result<Solution, GibError> {
    query.validate()?;

    let (f_prev, f_n) = fibonacci_inputs(query.n)?;
    let (a, b) = (query.a, query.b);

    let mut found: Vec<u64> = (query.start..query.limit)
        .into_par_iter()
        .filter(|&m| {
            let (sa, sb) = if query.reduce_seeds {
                (a % m, b % m)
            } else {
                (a, b)
            };
            satisfies(sa, sb, reduce(&f_n, m), reduce(&f_prev, m), m)
        })
        .collect();
    found.sort_unstable();

    let moduli = found
        .into_iter()
        .map(|m| {
            Ok(SolvedModulus {
                modulus: m,
                period: period(a, b, m)?,
            })
        })
        .collect::<Result<Vec<_>, GibError>>()?;

    tracing::debug!(
        a,
        b,
        n = query.n,
        start = query.start,
        limit = query.limit,
        reduce_seeds = query.reduce_seeds,
        solutions = moduli.len(),
        "modulus search finished"
    );

    Ok(Solution {
        query: *query,
        moduli,
    })
}

/// `(F(n-1), F(n))` for `n >= 1`.
#[cfg(not(feature = "gmp"))]
#[allow(clippy::unnecessary_wraps)]
fn fibonacci_inputs(n: u64) -> Result<(BigUint, BigUint), GibError> {
    Ok(crate::fibonacci::fibonacci_pair(n - 1))
}

/// `(F(n-1), F(n))` for `n >= 1`, computed by GMP.
#[cfg(feature = "gmp")]
fn fibonacci_inputs(n: u64) -> Result<(BigUint, BigUint), GibError> {
    use crate::fibonacci_gmp::fibonacci_gmp;
    Ok((fibonacci_gmp(n - 1)?, fibonacci_gmp(n)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fibonacci_period_divides_24() {
        let solution = solve(&SolverQuery::default()).unwrap();
        assert_eq!(
            solution.moduli(),
            [3, 4, 6, 8, 9, 12, 16, 18, 24, 36, 48, 72, 144]
        );
        for s in &solution.moduli {
            assert_eq!(24 % s.period, 0, "m={}", s.modulus);
        }
    }

    #[test]
    fn lucas_mod_five() {
        let solution = solve(&SolverQuery::new(2, 1, 4)).unwrap();
        assert_eq!(solution.moduli(), [5]);
        assert_eq!(solution.moduli[0].period, 4);
    }

    #[test]
    fn zero_seed_satisfies_everything() {
        let query = SolverQuery::new(0, 0, 7).with_range(3, 50);
        let solution = solve(&query).unwrap();
        assert_eq!(solution.len(), 47);
        assert!(solution.moduli.iter().all(|s| s.period == 1));
    }

    #[test]
    fn empty_result() {
        // F(1) = 1, F(0) = 0: G_1 = b must equal a and G_2 = a + b must equal b.
        let solution = solve(&SolverQuery::new(1, 2, 1)).unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn modulus_must_exceed_seeds() {
        // 7 mod 7 is 0, which never equals the seed 7.
        let query = SolverQuery::new(7, 0, 1).with_range(3, 10);
        assert!(solve(&query).unwrap().is_empty());
        assert!(solve(&SolverQuery::new(5, 0, 1)).unwrap().is_empty());
    }

    #[test]
    fn large_seeds_skip_small_moduli() {
        let solution = solve(&SolverQuery::new(30, 30, 24)).unwrap();
        let moduli = solution.moduli();
        assert_eq!(moduli[..5], [32, 36, 40, 45, 48]);
        assert!(moduli.iter().all(|&m| m > 30));
        for s in &solution.moduli {
            assert_eq!(24 % s.period, 0, "m={}", s.modulus);
        }
    }

    #[test]
    fn reduced_seeds_are_opt_in() {
        // (7, 0) mod 7 is the zero state, which recurs after every step.
        let query = SolverQuery::new(7, 0, 1)
            .with_range(3, 10)
            .with_reduced_seeds(true);
        assert_eq!(solve(&query).unwrap().moduli(), [7]);

        let reduced = solve(&SolverQuery::new(5, 0, 1).with_reduced_seeds(true)).unwrap();
        assert_eq!(reduced.moduli(), [5]);
    }

    #[test]
    fn rejects_index_zero() {
        assert!(matches!(
            solve(&SolverQuery::new(0, 1, 0)),
            Err(GibError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_bad_bounds() {
        assert!(SolverQuery::new(31, 1, 24).validate().is_err());
        assert!(SolverQuery::new(0, 1, 301).validate().is_err());
        assert!(SolverQuery::new(0, 1, 24).with_range(1, 10).validate().is_err());
        assert!(SolverQuery::new(0, 1, 24).with_range(10, 10).validate().is_err());
        assert!(SolverQuery::new(0, 1, 24)
            .with_range(3, MAX_SEARCH_LIMIT + 1)
            .validate()
            .is_err());
        assert!(SolverQuery::new(30, 30, 300).validate().is_ok());
    }

    #[test]
    fn satisfies_matches_period() {
        // Pisano period of 7 is 16.
        assert!(satisfies(0, 1, 0, 1, 7)); // F(16) ≡ 0, F(15) ≡ 1 (mod 7)
        assert!(!satisfies(0, 1, 1, 0, 7));
        // The zero state recurs mod 7, but the seed 7 is not a residue.
        assert!(!satisfies(7, 0, 0, 1, 7));
        assert!(satisfies(0, 0, 0, 1, 7));
    }
}
