//! Telemetry module
//!
//! Structured logging for the host application

mod logging;

pub use logging::{init_logging, LogFormat};
