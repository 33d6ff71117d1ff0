//! Local adapters for running the clip query API outside Lambda.

pub mod http;
