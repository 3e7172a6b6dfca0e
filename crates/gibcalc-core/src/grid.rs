//! State pairs mod m, colored by the sequence they belong to.

use serde::Serialize;

use crate::constants::MIN_MODULUS;
use crate::error::{check_modulus, GibError};
use crate::palette::{seeded_color, Rgba};

/// One state pair `(a, b)` of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub a: u64,
    pub b: u64,
    pub color: Rgba,
    /// Index of the orbit in discovery order.
    pub orbit: usize,
}

impl Cell {
    /// Label shown inside the cell, e.g. `3,4`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{},{}", self.a, self.b)
    }
}

/// Every state pair mod `m` in discovery order.
///
/// Pairs are visited row-major; each unseen pair starts a new orbit whose
/// successors follow it with the same color.
#[derive(Debug, Clone)]
pub struct StateGrid {
    modulus: u64,
    cells: Vec<Cell>,
    orbit_count: usize,
}

impl StateGrid {
    /// Build the grid for `m`, rejecting moduli above `max`.
    pub fn build(m: u64, max: u64) -> Result<Self, GibError> {
        check_modulus(m, MIN_MODULUS, max)?;
        let size = usize::try_from(m * m)
            .map_err(|_| GibError::InvalidInput(format!("modulus {m} too large")))?;

        let mut seen = vec![false; size];
        let mut cells = Vec::with_capacity(size);
        let mut orbit = 0;

        for i in 0..m {
            for j in 0..m {
                if seen[index(i, j, m)] {
                    continue;
                }
                let color = seeded_color(i, j);
                let (mut x, mut y) = (i, j);
                while !seen[index(x, y, m)] {
                    seen[index(x, y, m)] = true;
                    cells.push(Cell {
                        a: x,
                        b: y,
                        color,
                        orbit,
                    });
                    (x, y) = (y, (x + y) % m);
                }
                orbit += 1;
            }
        }

        tracing::debug!(modulus = m, cells = cells.len(), orbits = orbit, "built state grid");
        Ok(Self {
            modulus: m,
            cells,
            orbit_count: orbit,
        })
    }

    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn orbit_count(&self) -> usize {
        self.orbit_count
    }

    /// Cells chunked into display rows of `columns` cells.
    pub fn rows(&self, columns: usize) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(columns.max(1))
    }

    /// Number of display rows for `columns` cells per row.
    #[must_use]
    pub fn row_count(&self, columns: usize) -> usize {
        self.cells.len().div_ceil(columns.max(1))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn index(a: u64, b: u64, m: u64) -> usize {
    (a * m + b) as usize
}
