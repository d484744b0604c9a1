//! Health Probe - liveness endpoint plus in-process and network health checks
//!
//! This library exposes the core modules for testing and reuse.

pub mod config;
pub mod error;
pub mod probe;
pub mod routes;
