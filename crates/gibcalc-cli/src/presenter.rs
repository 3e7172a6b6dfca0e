//! CLI result presenter.

use std::fmt::Write as _;
use std::time::Duration;

use gibcalc_core::report::ModulusReport;
use gibcalc_core::solver::Solution;

use crate::output::{
    format_duration, format_moduli, render_cycle_table, render_frequencies, render_grid,
};
use crate::ui::{heading, is_color_disabled, print_error, title};

/// Presents modulus reports and solver results to the user.
pub trait Presenter {
    /// Render a modulus report to text.
    fn render_modulus(&self, report: &ModulusReport) -> String;

    /// Render a solver result to text.
    fn render_solution(&self, solution: &Solution, duration: Duration) -> String;

    /// Present a modulus report.
    fn present_modulus(&self, report: &ModulusReport) {
        print!("{}", self.render_modulus(report));
    }

    /// Present a solver result.
    fn present_solution(&self, solution: &Solution, duration: Duration) {
        print!("{}", self.render_solution(solution, duration));
    }

    /// Present an error.
    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Human-readable presenter.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
    show_grid: bool,
    columns: usize,
    color: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, show_grid: bool, columns: usize) -> Self {
        Self {
            verbose,
            quiet,
            show_grid,
            columns,
            color: !is_color_disabled(),
        }
    }

    /// Enable or disable ANSI colors (always off for file output).
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn section(&self, out: &mut String, text: &str) {
        let _ = writeln!(out, "\n{}", heading(text, self.color));
    }
}

impl Presenter for CliPresenter {
    fn render_modulus(&self, report: &ModulusReport) -> String {
        let mut out = String::new();
        let m = report.modulus();

        if self.quiet {
            for cycle in report.cycles.cycles() {
                let _ = writeln!(out, "{}\t{cycle}", cycle.len());
            }
            return out;
        }

        let _ = writeln!(out, "{}", title("Gibonacci period calculators", self.color));
        let _ = writeln!(out, "m: {}", report.factorization);
        let _ = writeln!(out, "Pisano period: {}", report.pisano_period);

        if self.show_grid {
            self.section(&mut out, &format!("G0, G1 state pairs mod {m} colored by sequence"));
            out.push_str(&render_grid(&report.grid, self.columns, self.color));
        }

        self.section(&mut out, &format!("Cycle lengths for {m}"));
        out.push_str(&render_cycle_table(&report.cycles, self.verbose, self.color));

        self.section(&mut out, "Frequencies");
        out.push_str(&render_frequencies(&report.cycles.length_frequencies()));
        out
    }

    fn render_solution(&self, solution: &Solution, duration: Duration) -> String {
        let mut out = String::new();
        let moduli = solution.moduli();

        if self.quiet {
            let _ = writeln!(out, "{}", format_moduli(&moduli));
            return out;
        }

        let q = &solution.query;
        self.section(&mut out, "Modular equation solver");
        let _ = writeln!(out, "G_n     = b*F_n + a*F_(n-1)       ≡ a (mod m)");
        let _ = writeln!(out, "G_(n+1) = (b+a)*F_n + b*F_(n-1)   ≡ b (mod m)");
        let _ = writeln!(
            out,
            "Moduli with period p*k={} for Gibonacci sequence G0={},G1={} (m in {}..{})",
            q.n, q.a, q.b, q.start, q.limit
        );
        if q.reduce_seeds {
            let _ = writeln!(out, "Seeds reduced mod m before comparing.");
        }

        if solution.is_empty() {
            let _ = writeln!(out, "No solutions found.");
        } else {
            let _ = writeln!(out, "Solutions for m: {}", format_moduli(&moduli));
            if self.verbose {
                for s in &solution.moduli {
                    let _ = writeln!(out, "  m={:<6} period={}", s.modulus, s.period);
                }
            }
        }

        if self.verbose {
            let _ = writeln!(out, "Search took {}", format_duration(duration));
        }
        out
    }
}
