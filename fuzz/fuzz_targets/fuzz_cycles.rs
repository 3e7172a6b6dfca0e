#![no_main]

use libfuzzer_sys::fuzz_target;

use gibcalc_core::cycles::{find_cycle, least_rotation, CycleTable};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Small moduli keep each run under a millisecond.
    let m = u64::from(data[0] % 60) + 2;
    let a = u64::from(data[1]) % m;
    let b = u64::from(data[2]) % m;

    let cycle = find_cycle(a, b, m).unwrap();
    let values = cycle.values();
    assert_eq!(least_rotation(values), 0, "cycle not canonical for m={m}");

    let table = CycleTable::enumerate(m).unwrap();
    assert_eq!(table.cycle_of(a, b), Some(&cycle));
    assert_eq!(table.total_states() as u64, m * m);
});
