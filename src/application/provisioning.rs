use crate::domain::packaging::HlsPackagingConfiguration;
use crate::ports::vod::VodPackagingPort;
use tracing::info;

/// One-shot setup of the packaging group clip assets are registered with.
pub struct Provisioner<V> {
    packager: V,
    hls: HlsPackagingConfiguration,
}

impl<V> Provisioner<V>
where
    V: VodPackagingPort,
{
    pub fn new(packager: V) -> Self {
        Self {
            packager,
            hls: HlsPackagingConfiguration::default(),
        }
    }

    /// Create the group, then its HLS configuration. Returns the group id.
    pub async fn create_hls_packaging_group(
        &self,
        group_id: &str,
        hls_packaging_config_id: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let created = self.packager.create_packaging_group(group_id).await?;
        info!(group_id = %created, "Created packaging group");

        self.packager
            .create_hls_packaging_configuration(hls_packaging_config_id, &created, &self.hls)
            .await?;
        info!(
            group_id = %created,
            config_id = %hls_packaging_config_id,
            "Created HLS packaging configuration"
        );

        Ok(created)
    }
}
