//! GibCalc-rs library: configuration, dispatch and exit codes.

pub mod app;
pub mod config;
pub mod errors;
