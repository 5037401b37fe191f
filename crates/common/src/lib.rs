//! Tweenkit Common Utilities
//!
//! Shared infrastructure for all tweenkit crates:
//! - Error types and result aliases
//! - Tick-rate clock for converting animation ticks to wall-clock time
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
