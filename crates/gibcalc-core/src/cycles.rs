//! Cycles of the Gibonacci recurrence modulo m.
//!
//! The map `(x, y) -> (y, x + y mod m)` is a bijection on state pairs, so
//! every pair lies on exactly one cycle. A cycle is stored as the sequence of
//! values it produces, rotated to its lexicographically smallest form.

use std::collections::BTreeMap;
use std::fmt;

use num_integer::lcm;
use serde::Serialize;

use crate::error::GibError;
use crate::factor::Factorization;
use crate::palette::{seeded_color, Rgba};

/// A cycle in canonical (least rotation) form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Cycle {
    values: Vec<u64>,
}

impl Cycle {
    /// Build a canonical cycle from one period of values.
    #[must_use]
    pub fn from_period(mut values: Vec<u64>) -> Self {
        let start = least_rotation(&values);
        values.rotate_left(start);
        Self { values }
    }

    /// Number of values in one period.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// The smallest state pair on the cycle.
    #[must_use]
    pub fn head_pair(&self) -> Option<(u64, u64)> {
        match self.values.as_slice() {
            [a, b, ..] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Orbit color; the zero cycle has none.
    #[must_use]
    pub fn color(&self) -> Option<Rgba> {
        self.head_pair().map(|(a, b)| seeded_color(a, b))
    }

    /// Whether this is the fixed point `(0, 0)`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values == [0]
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

/// Index of the lexicographically smallest rotation of `s`.
#[must_use]
pub fn least_rotation<T: Ord>(s: &[T]) -> usize {
    let n = s.len();
    let (mut i, mut j, mut k) = (0usize, 1usize, 0usize);
    while i < n && j < n && k < n {
        let a = &s[(i + k) % n];
        let b = &s[(j + k) % n];
        if a == b {
            k += 1;
            continue;
        }
        if a > b {
            i += k + 1;
        } else {
            j += k + 1;
        }
        if i == j {
            j += 1;
        }
        k = 0;
    }
    i.min(j).min(n.saturating_sub(1))
}

/// Find the canonical cycle through the state `(a, b)` mod `m`.
///
/// # Example
/// ```
/// use gibcalc_core::cycles::find_cycle;
/// let c = find_cycle(1, 1, 2).unwrap();
/// assert_eq!(c.values(), &[0, 1, 1]);
/// ```
pub fn find_cycle(a: u64, b: u64, m: u64) -> Result<Cycle, GibError> {
    Ok(Cycle::from_period(orbit_values(a, b, m)?))
}

/// Length of the cycle through `(a, b)` mod `m`.
pub fn period(a: u64, b: u64, m: u64) -> Result<usize, GibError> {
    Ok(orbit_values(a, b, m)?.len())
}

/// Pisano period: the period of F(n) mod `m`.
///
/// # Example
/// ```
/// assert_eq!(gibcalc_core::cycles::pisano_period(10).unwrap(), 60);
/// ```
pub fn pisano_period(m: u64) -> Result<usize, GibError> {
    period(0, 1, m)
}

/// Pisano period assembled from prime powers: `π(m) = lcm π(p^e)`.
pub fn pisano_period_from_factors(factors: &Factorization) -> Result<usize, GibError> {
    factors
        .prime_powers()
        .try_fold(1usize, |acc, q| Ok(lcm(acc, pisano_period(q)?)))
}

/// One period of values starting at `(a, b)`.
fn orbit_values(a: u64, b: u64, m: u64) -> Result<Vec<u64>, GibError> {
    if m == 0 {
        return Err(GibError::Config("modulus cannot be zero".into()));
    }
    let (a, b) = (a % m, b % m);
    let mut values = Vec::new();
    let (mut x, mut y) = (a, b);
    loop {
        values.push(x);
        (x, y) = (y, (x + y) % m);
        if x == a && y == b {
            return Ok(values);
        }
    }
}

/// All distinct cycles modulo `m`.
#[derive(Debug, Clone)]
pub struct CycleTable {
    modulus: u64,
    cycles: Vec<Cycle>,
}

impl CycleTable {
    /// Enumerate every cycle mod `m`, ordered by canonical values.
    pub fn enumerate(m: u64) -> Result<Self, GibError> {
        if m == 0 {
            return Err(GibError::Config("modulus cannot be zero".into()));
        }
        let size = usize::try_from(m * m)
            .map_err(|_| GibError::InvalidInput(format!("modulus {m} too large")))?;
        let mut visited = vec![false; size];
        let mut cycles = Vec::new();

        for i in 0..m {
            for j in 0..m {
                if visited[pair_index(i, j, m)] {
                    continue;
                }
                let values = orbit_values(i, j, m)?;
                let len = values.len();
                for (k, &x) in values.iter().enumerate() {
                    visited[pair_index(x, values[(k + 1) % len], m)] = true;
                }
                cycles.push(Cycle::from_period(values));
            }
        }

        cycles.sort();
        tracing::debug!(modulus = m, cycles = cycles.len(), "enumerated cycles");
        Ok(Self { modulus: m, cycles })
    }

    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    #[must_use]
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Cycle lengths in table order.
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.cycles.iter().map(Cycle::len).collect()
    }

    /// Number of cycles per length.
    #[must_use]
    pub fn length_frequencies(&self) -> BTreeMap<usize, usize> {
        let mut freq = BTreeMap::new();
        for c in &self.cycles {
            *freq.entry(c.len()).or_insert(0) += 1;
        }
        freq
    }

    /// Sum of cycle lengths; equals m².
    #[must_use]
    pub fn total_states(&self) -> usize {
        self.cycles.iter().map(Cycle::len).sum()
    }

    /// The cycle containing the state `(a, b)`.
    #[must_use]
    pub fn cycle_of(&self, a: u64, b: u64) -> Option<&Cycle> {
        let target = find_cycle(a, b, self.modulus).ok()?;
        self.cycles.binary_search(&target).ok().map(|i| &self.cycles[i])
    }
}

#[allow(clippy::cast_possible_truncation)]
fn pair_index(a: u64, b: u64, m: u64) -> usize {
    (a * m + b) as usize
}
