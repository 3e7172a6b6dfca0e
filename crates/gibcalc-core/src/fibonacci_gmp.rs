//! GMP-backed Fibonacci using the `rug` crate.
//!
//! Only available when the `gmp` feature is enabled.

use num_bigint::BigUint;
use rug::integer::Order;
use rug::Integer;

use crate::error::GibError;

/// Compute F(n) with GMP's `mpz_fib_ui`.
pub fn fibonacci_gmp(n: u64) -> Result<BigUint, GibError> {
    let n = u32::try_from(n)
        .map_err(|_| GibError::InvalidInput(format!("index {n} too large for GMP")))?;
    let value = Integer::from(Integer::fibonacci(n));
    Ok(BigUint::from_bytes_le(&value.to_digits::<u8>(Order::Lsf)))
}
