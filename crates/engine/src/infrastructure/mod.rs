//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus the
//! configuration and logging setup the binaries share.

pub mod config;
pub mod groq;
pub mod ports;
pub mod telemetry;
