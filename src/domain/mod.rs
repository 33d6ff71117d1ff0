//! Domain layer - Clip windows, harvest jobs, assets and clip records.

pub mod asset;
pub mod clip;
pub mod harvest;
pub mod packaging;
