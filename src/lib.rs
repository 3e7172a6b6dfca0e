//! Workspace-level integration tests for GibCalc-rs live in `tests/`.
