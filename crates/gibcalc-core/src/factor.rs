//! Integer factorization by trial division.

use std::fmt;

use serde::Serialize;

/// Prime factorization of a machine-word integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Factorization {
    n: u64,
    factors: Vec<(u64, u32)>,
}

impl Factorization {
    /// The factored integer.
    #[must_use]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// `(prime, exponent)` pairs, primes ascending.
    #[must_use]
    pub fn factors(&self) -> &[(u64, u32)] {
        &self.factors
    }

    /// Whether `n` is prime.
    #[must_use]
    pub fn is_prime(&self) -> bool {
        matches!(self.factors.as_slice(), [(_, 1)])
    }

    /// Multiply the factors back together.
    #[must_use]
    pub fn product(&self) -> u64 {
        self.factors
            .iter()
            .map(|&(p, e)| p.pow(e))
            .product::<u64>()
    }

    /// Prime powers `p^e`, one per distinct prime.
    pub fn prime_powers(&self) -> impl Iterator<Item = u64> + '_ {
        self.factors.iter().map(|&(p, e)| p.pow(e))
    }

    /// Render the right-hand side as LaTeX, e.g. `2^{2} \times 3^{1}`.
    #[must_use]
    pub fn to_latex(&self) -> String {
        if self.factors.is_empty() {
            return self.n.to_string();
        }
        self.factors
            .iter()
            .map(|(p, e)| format!("{p}^{{{e}}}"))
            .collect::<Vec<_>>()
            .join(" \\times ")
    }

    /// Render the right-hand side as plain text, e.g. `2^2 × 3^1`.
    #[must_use]
    pub fn factors_text(&self) -> String {
        if self.factors.is_empty() {
            return self.n.to_string();
        }
        self.factors
            .iter()
            .map(|(p, e)| format!("{p}^{e}"))
            .collect::<Vec<_>>()
            .join(" × ")
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.n, self.factors_text())
    }
}

/// Factorize `n` by trial division.
///
/// `0` and `1` have no prime factors.
///
/// # Example
/// ```
/// let f = gibcalc_core::factor::factorize(360);
/// assert_eq!(f.factors(), &[(2, 3), (3, 2), (5, 1)]);
/// assert_eq!(f.to_string(), "360 = 2^3 × 3^2 × 5^1");
/// ```
#[must_use]
pub fn factorize(n: u64) -> Factorization {
    let mut factors = Vec::new();
    if n < 2 {
        return Factorization { n, factors };
    }

    let mut rest = n;
    for p in [2u64, 3] {
        let e = strip(&mut rest, p);
        if e > 0 {
            factors.push((p, e));
        }
    }

    // Candidates of the form 6k ± 1.
    let mut p = 5u64;
    while p.saturating_mul(p) <= rest {
        for q in [p, p + 2] {
            let e = strip(&mut rest, q);
            if e > 0 {
                factors.push((q, e));
            }
        }
        p += 6;
    }

    if rest > 1 {
        factors.push((rest, 1));
    }

    Factorization { n, factors }
}

fn strip(rest: &mut u64, p: u64) -> u32 {
    let mut e = 0;
    while *rest % p == 0 {
        *rest /= p;
        e += 1;
    }
    e
}
