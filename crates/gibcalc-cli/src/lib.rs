//! # gibcalc-cli
//!
//! CLI output for the Gibonacci explorer: colored state grid, cycle
//! tables, frequency bars, solver results, JSON and shell completion.

pub mod completion;
pub mod json;
pub mod output;
pub mod presenter;
pub mod ui;

pub use json::JsonPresenter;
pub use presenter::{CliPresenter, Presenter};
