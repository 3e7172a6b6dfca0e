//! JSON presenter.

use std::time::Duration;

use serde::Serialize;

use gibcalc_core::report::{ModulusReport, SolutionSummary};
use gibcalc_core::solver::Solution;

use crate::presenter::Presenter;

/// Emits one pretty-printed JSON document per presentation.
pub struct JsonPresenter {
    with_cells: bool,
}

impl JsonPresenter {
    #[must_use]
    pub fn new(with_cells: bool) -> Self {
        Self { with_cells }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(s) => s + "\n",
        Err(e) => {
            tracing::error!("failed to serialize JSON output: {e}");
            String::new()
        }
    }
}

impl Presenter for JsonPresenter {
    fn render_modulus(&self, report: &ModulusReport) -> String {
        to_json(&report.summary(self.with_cells))
    }

    fn render_solution(&self, solution: &Solution, duration: Duration) -> String {
        to_json(&SolutionSummary::new(solution, duration))
    }

    fn present_error(&self, error: &str) {
        eprintln!("{}", serde_json::json!({ "error": error }));
    }
}
