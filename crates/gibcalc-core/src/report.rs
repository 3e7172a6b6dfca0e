//! Everything shown for one modulus, plus serializable summaries.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cycles::{pisano_period, CycleTable};
use crate::error::GibError;
use crate::factor::{factorize, Factorization};
use crate::grid::{Cell, StateGrid};
use crate::palette::Rgba;
use crate::solver::{Solution, SolvedModulus, SolverQuery};

/// Factorization, grid and cycle table for a modulus.
#[derive(Debug, Clone)]
pub struct ModulusReport {
    pub factorization: Factorization,
    pub grid: StateGrid,
    pub cycles: CycleTable,
    pub pisano_period: usize,
}

impl ModulusReport {
    /// Compute the full report for `m`, rejecting moduli above `max`.
    pub fn build(m: u64, max: u64) -> Result<Self, GibError> {
        let grid = StateGrid::build(m, max)?;
        let cycles = CycleTable::enumerate(m)?;
        let pisano_period = pisano_period(m)?;
        Ok(Self {
            factorization: factorize(m),
            grid,
            cycles,
            pisano_period,
        })
    }

    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.grid.modulus()
    }

    /// Serializable view; cells are included only when `with_cells`.
    #[must_use]
    pub fn summary(&self, with_cells: bool) -> ModulusSummary {
        ModulusSummary {
            modulus: self.modulus(),
            factorization: self.factorization.to_string(),
            factors: self.factorization.factors().to_vec(),
            pisano_period: self.pisano_period,
            orbit_count: self.grid.orbit_count(),
            cycles: self
                .cycles
                .cycles()
                .iter()
                .map(|c| CycleRow {
                    length: c.len(),
                    values: c.values().to_vec(),
                    color: c.color(),
                })
                .collect(),
            frequencies: self.cycles.length_frequencies(),
            cells: with_cells.then(|| self.grid.cells().to_vec()),
        }
    }
}

/// One row of the cycle table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleRow {
    pub length: usize,
    pub values: Vec<u64>,
    pub color: Option<Rgba>,
}

/// JSON form of a [`ModulusReport`].
#[derive(Debug, Clone, Serialize)]
pub struct ModulusSummary {
    pub modulus: u64,
    pub factorization: String,
    pub factors: Vec<(u64, u32)>,
    pub pisano_period: usize,
    pub orbit_count: usize,
    pub cycles: Vec<CycleRow>,
    pub frequencies: BTreeMap<usize, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<Cell>>,
}

/// JSON form of a [`Solution`].
#[derive(Debug, Clone, Serialize)]
pub struct SolutionSummary {
    pub query: SolverQuery,
    pub moduli: Vec<SolvedModulus>,
    pub elapsed_ms: f64,
}

impl SolutionSummary {
    #[must_use]
    pub fn new(solution: &Solution, elapsed: std::time::Duration) -> Self {
        Self {
            query: solution.query,
            moduli: solution.moduli.clone(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }
}
