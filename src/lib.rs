//! Clipper - Live-to-VOD clipping on AWS Elemental MediaPackage
//!
//! Hexagonal Architecture:
//! - domain/: Clip windows, harvest jobs, assets and clip records
//! - ports/: Trait definitions
//! - adapters/: Concrete implementations (AWS, in-memory, local HTTP)
//! - application/: One service per entry point
//! - lambda: Event and response shaping for the Lambda binaries
//! - config: Environment configuration
//!
//! # Features
//! - `local`: axum server exposing the clip query API outside Lambda

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod lambda;
pub mod ports;
pub mod telemetry;

// Re-exports for convenience
pub use config::AwsConfig;

#[cfg(feature = "local")]
pub use config::LocalConfig;
