//! Compiled constants and their runtime overrides.

pub mod constants;
pub mod runtime_config;

pub use runtime_config::RuntimeConfig;
