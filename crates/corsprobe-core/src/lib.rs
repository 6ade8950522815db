pub mod config;
pub mod logging;

pub mod checklist;
pub mod error;
pub mod http;
pub mod probe;
pub mod report;

pub use error::ProbeError;
pub use probe::{CorsProbe, ProbeReport};
