//! CLI command handlers.

mod probe;

pub use probe::run_probe;
