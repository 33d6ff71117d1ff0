use crate::domain::asset::{Asset, AssetRequest};
use crate::domain::packaging::HlsPackagingConfiguration;
use async_trait::async_trait;
use std::error::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VodPackagingPort: Send + Sync {
    /// Register a harvested manifest as an asset and return its egress endpoints
    async fn create_asset(
        &self,
        request: &AssetRequest,
    ) -> Result<Asset, Box<dyn Error + Send + Sync>>;

    /// Create an empty packaging group, returning its id
    async fn create_packaging_group(
        &self,
        group_id: &str,
    ) -> Result<String, Box<dyn Error + Send + Sync>>;

    /// Attach an HLS packaging configuration to an existing group
    async fn create_hls_packaging_configuration(
        &self,
        config_id: &str,
        group_id: &str,
        config: &HlsPackagingConfiguration,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}
