//! Error types raised by this crate. SDK errors are boxed and passed through unchanged.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} env var required")]
    MissingVar(&'static str),
}

/// Faults in the shape of an inbound event.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("no path parameter named '{0}'")]
    MissingPathParameter(&'static str),
    #[error("failed to encode response body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Faults in the shape of data coming back from a managed service.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("{operation} response has no {field}")]
    MissingResponseField {
        operation: &'static str,
        field: &'static str,
    },
    #[error("clip item attribute '{0}' is missing or has the wrong type")]
    MalformedAttribute(String),
}
