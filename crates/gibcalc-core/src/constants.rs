//! Constants for moduli bounds, solver defaults, and exit codes.

/// Smallest modulus accepted by the state grid.
pub const MIN_MODULUS: u64 = 2;

/// Default modulus shown on startup.
pub const DEFAULT_MODULUS: u64 = 2;

/// Default upper bound for the interactive modulus.
pub const DEFAULT_MAX_MODULUS: u64 = 100;

/// Hard ceiling for the modulus; the grid holds m² cells.
pub const HARD_MAX_MODULUS: u64 = 1000;

/// Number of cells per row in the state grid.
pub const DEFAULT_GRID_COLUMNS: usize = 15;

/// Largest seed value (`a` or `b`) accepted by the solver.
pub const MAX_SEED: u64 = 30;

/// Largest sequence index accepted by the solver.
pub const MAX_INDEX: u64 = 300;

/// Default solver seed `G_0`.
pub const DEFAULT_SEED_A: u64 = 0;

/// Default solver seed `G_1`.
pub const DEFAULT_SEED_B: u64 = 1;

/// Default solver index `n`.
pub const DEFAULT_INDEX: u64 = 24;

/// First modulus tried by the solver.
pub const DEFAULT_SEARCH_START: u64 = 3;

/// Exclusive upper bound of the solver search.
pub const DEFAULT_SEARCH_LIMIT: u64 = 3000;

/// Hard ceiling for the solver search range.
pub const MAX_SEARCH_LIMIT: u64 = 1_000_000;

/// Alpha channel applied to every seeded cell color.
pub const CELL_ALPHA: u8 = 0xaa;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
    /// Cancelled by the user.
    pub const ERROR_CANCELED: i32 = 130;
}
