//! Adapters - Concrete implementations of ports.

pub mod aws;
pub mod memory;

#[cfg(feature = "local")]
pub mod local;
