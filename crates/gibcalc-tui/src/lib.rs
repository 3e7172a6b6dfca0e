//! # gibcalc-tui
//!
//! Interactive Gibonacci explorer using ratatui with Elm architecture.

pub mod chart;
pub mod footer;
pub mod form;
pub mod grid;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod styles;
pub mod table;

pub use form::{Field, SolverForm};
pub use messages::TuiMessage;
pub use model::{TuiApp, TuiSettings};
