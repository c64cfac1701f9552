//! Core functionality.

/// Configuration support
pub mod config;
/// The environment variable table as an explicit key-value store
pub mod env;

pub use env::{EnvStore, MemoryEnv, ProcessEnv};
