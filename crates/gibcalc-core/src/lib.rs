//! # gibcalc-core
//!
//! Core library for GibCalc-rs, an explorer for Gibonacci sequences
//! `G[n] = (G[n-1] + G[n-2]) mod m`.
//! Implements Fibonacci numbers, factorization, cycle enumeration, the
//! colored state grid and the modulus solver.

pub mod constants;
pub mod cycles;
pub mod error;
pub mod factor;
pub mod fibonacci;
pub mod grid;
pub mod palette;
pub mod report;
pub mod solver;

#[cfg(feature = "gmp")]
pub mod fibonacci_gmp;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_GRID_COLUMNS, DEFAULT_MAX_MODULUS, DEFAULT_MODULUS, HARD_MAX_MODULUS,
    MIN_MODULUS,
};
pub use cycles::{find_cycle, pisano_period, Cycle, CycleTable};
pub use error::GibError;
pub use factor::{factorize, Factorization};
pub use grid::{Cell, StateGrid};
pub use palette::{seeded_color, Rgba};
pub use report::ModulusReport;
pub use solver::{solve, Solution, SolverQuery};
