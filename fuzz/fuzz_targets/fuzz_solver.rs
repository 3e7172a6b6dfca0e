#![no_main]

use libfuzzer_sys::fuzz_target;

use gibcalc_core::cycles::period;
use gibcalc_core::solver::{solve, SolverQuery};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let a = u64::from(data[0] % 31);
    let b = u64::from(data[1] % 31);
    let n = u64::from(u16::from_le_bytes([data[2], data[3]]) % 300) + 1;

    let query = SolverQuery::new(a, b, n).with_range(3, 120);
    let solution = solve(&query).unwrap();
    let found = solution.moduli();

    // A modulus solves the query exactly when it exceeds both seeds and the
    // seed's period divides n.
    for m in 3..120 {
        let divides = n % period(a, b, m).unwrap() as u64 == 0;
        let expected = divides && m > a && m > b;
        assert_eq!(found.contains(&m), expected, "a={a} b={b} n={n} m={m}");
    }
});
