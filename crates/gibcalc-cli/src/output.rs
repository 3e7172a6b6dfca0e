//! CLI output formatting.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Duration;

use gibcalc_core::cycles::{Cycle, CycleTable};
use gibcalc_core::grid::StateGrid;

use crate::ui::{paint_cell, swatch};

/// Values shown before a long cycle is abbreviated.
pub const CYCLE_PREVIEW: usize = 24;

/// Widest bar in the frequency chart.
pub const BAR_WIDTH: usize = 40;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a cycle, abbreviating long ones unless `verbose`.
#[must_use]
pub fn format_cycle(cycle: &Cycle, verbose: bool) -> String {
    if verbose || cycle.len() <= CYCLE_PREVIEW {
        return cycle.to_string();
    }
    let head = cycle.values()[..CYCLE_PREVIEW]
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("({head}, …) [{} values]", cycle.len())
}

/// Format a list of moduli as `[3, 4, 6]`.
#[must_use]
pub fn format_moduli(moduli: &[u64]) -> String {
    let inner = moduli
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

/// Render the state grid, `columns` cells per line.
#[must_use]
pub fn render_grid(grid: &StateGrid, columns: usize, color: bool) -> String {
    let digits = (grid.modulus().saturating_sub(1)).to_string().len();
    let width = 2 * digits + 1;
    let mut out = String::new();
    for row in grid.rows(columns) {
        let line: Vec<String> = row
            .iter()
            .map(|cell| paint_cell(&format!("{:>width$}", cell.label()), cell.color, color))
            .collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}

/// Render the cycle table: length, color and canonical cycle.
#[must_use]
pub fn render_cycle_table(table: &CycleTable, verbose: bool, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>8}  {:<14} Cycle", "Length", "Color");
    let _ = writeln!(out, "{:-<60}", "");
    for cycle in table.cycles() {
        let sw = swatch(cycle.color(), color);
        // Escape sequences do not count towards the column width.
        let pad = 14usize.saturating_sub(console::measure_text_width(&sw));
        let _ = writeln!(
            out,
            "{:>8}  {sw}{:pad$} {}",
            cycle.len(),
            "",
            format_cycle(cycle, verbose)
        );
    }
    out
}

/// Render cycle length frequencies as horizontal bars.
#[must_use]
pub fn render_frequencies(freq: &BTreeMap<usize, usize>) -> String {
    let max = freq.values().copied().max().unwrap_or(0).max(1);
    let label_width = freq
        .keys()
        .map(|k| k.to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for (&len, &count) in freq {
        let bar = (count * BAR_WIDTH).div_ceil(max);
        let _ = writeln!(
            out,
            "{len:>label_width$} │ {} {count}",
            "█".repeat(bar)
        );
    }
    out
}

/// Write text to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, text: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}
