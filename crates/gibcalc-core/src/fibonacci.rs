//! Fast Doubling Fibonacci, exact and modular.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k+1)^2 + F(k)^2
//!
//! Iterates from MSB to LSB. Indices up to 93 are served from `FIB_TABLE`.

use num_bigint::BigUint;
use num_traits::One;

use crate::constants::{FIB_TABLE, MAX_FIB_U64};
use crate::error::GibError;

/// Compute F(n) exactly.
///
/// # Example
/// ```
/// assert_eq!(gibcalc_core::fibonacci::fibonacci(24).to_string(), "46368");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    if n <= MAX_FIB_U64 {
        return BigUint::from(FIB_TABLE[table_index(n)]);
    }
    fibonacci_pair(n).0
}

/// Compute `(F(n), F(n+1))` exactly.
#[must_use]
pub fn fibonacci_pair(n: u64) -> (BigUint, BigUint) {
    if n < MAX_FIB_U64 {
        let i = table_index(n);
        return (BigUint::from(FIB_TABLE[i]), BigUint::from(FIB_TABLE[i + 1]));
    }

    let num_bits = 64 - n.leading_zeros();
    let mut fk = BigUint::ZERO;
    let mut fk1 = BigUint::one();

    for i in (0..num_bits).rev() {
        // F(2k) = F(k) * (2F(k+1) - F(k)); 2F(k+1) >= F(k) always holds.
        let f2k = &fk * ((&fk1 << 1u32) - &fk);
        let f2k1 = &fk * &fk + &fk1 * &fk1;

        if (n >> i) & 1 == 1 {
            fk1 = &f2k + &f2k1;
            fk = f2k1;
        } else {
            fk = f2k;
            fk1 = f2k1;
        }
    }

    (fk, fk1)
}

/// Compute F(n) mod `modulus` with modular Fast Doubling.
pub fn fibonacci_mod(n: u64, modulus: u64) -> Result<u64, GibError> {
    if modulus == 0 {
        return Err(GibError::Config("modulus cannot be zero".into()));
    }
    if modulus == 1 {
        return Ok(0);
    }

    let m = u128::from(modulus);
    let num_bits = 64 - n.leading_zeros();
    let mut fk: u128 = 0;
    let mut fk1: u128 = 1;

    for i in (0..num_bits).rev() {
        let twice = (2 * fk1) % m;
        let f2k = fk * ((twice + m - fk) % m) % m;
        let f2k1 = (fk * fk % m + fk1 * fk1 % m) % m;

        if (n >> i) & 1 == 1 {
            fk1 = (f2k + f2k1) % m;
            fk = f2k1;
        } else {
            fk = f2k;
            fk1 = f2k1;
        }
    }

    // fk < modulus, which came from a u64.
    Ok(u64::try_from(fk).unwrap_or_default())
}

/// Reduce a `BigUint` modulo a machine-word modulus.
#[must_use]
pub fn reduce(value: &BigUint, modulus: u64) -> u64 {
    let rem = value % modulus;
    u64::try_from(&rem).unwrap_or_default()
}

#[allow(clippy::cast_possible_truncation)]
fn table_index(n: u64) -> usize {
    n as usize
}
