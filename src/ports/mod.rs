//! Ports - Traits the application layer depends on.

pub mod clock;
pub mod live;
pub mod repository;
pub mod vod;
