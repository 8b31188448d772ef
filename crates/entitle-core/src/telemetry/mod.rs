//! Telemetry: error capture and tracing subscriber setup.

pub mod collector;
pub mod subscriber;

pub use collector::{BufferedErrorCollector, CapturedError, ErrorCollector, TracingErrorCollector};
pub use subscriber::init_tracing;
