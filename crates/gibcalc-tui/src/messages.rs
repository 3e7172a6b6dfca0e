//! TUI message types (Elm Messages).

use std::time::Duration;

use gibcalc_core::solver::Solution;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Switch to a new modulus and rebuild its report.
    ModulusChanged(u64),
    /// Background search finished.
    Solved {
        solution: Solution,
        duration: Duration,
    },
    /// Log message.
    Log(String),
    /// Error message.
    Error(String),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
    /// Tick event for periodic updates.
    Tick,
    /// Quit the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gibcalc_core::solver::SolverQuery;

    #[test]
    fn message_variants() {
        let msg = TuiMessage::ModulusChanged(12);
        assert!(matches!(msg, TuiMessage::ModulusChanged(12)));

        let msg = TuiMessage::Solved {
            solution: Solution {
                query: SolverQuery::default(),
                moduli: Vec::new(),
            },
            duration: Duration::from_millis(1),
        };
        assert!(matches!(msg, TuiMessage::Solved { .. }));

        let msg = TuiMessage::Resize {
            width: 80,
            height: 24,
        };
        assert!(matches!(msg, TuiMessage::Resize { .. }));

        assert!(matches!(TuiMessage::Tick, TuiMessage::Tick));
    }
}
