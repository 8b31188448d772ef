//! Deployment mode: hosted (vendor-operated) vs. self-managed.
//!
//! A static classification fixed at process start. Reads are a single
//! atomic load.

pub mod mode;

pub use mode::{DeploymentFlag, DeploymentModeCache};
