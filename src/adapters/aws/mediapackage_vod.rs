use crate::domain::asset::{Asset, AssetRequest, EgressEndpoint};
use crate::domain::packaging::HlsPackagingConfiguration;
use crate::error::AdapterError;
use crate::ports::vod::VodPackagingPort;
use async_trait::async_trait;
use aws_sdk_mediapackagevod::types::{AdMarkers, HlsManifest, HlsPackage};
use aws_sdk_mediapackagevod::Client;
use std::error::Error;

/// MediaPackageVodAdapter implements VodPackagingPort for MediaPackage VOD.
#[derive(Clone)]
pub struct MediaPackageVodAdapter {
    client: Client,
}

impl MediaPackageVodAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn hls_package(config: &HlsPackagingConfiguration) -> HlsPackage {
    let ad_markers = if config.ad_markers {
        AdMarkers::Passthrough
    } else {
        AdMarkers::None
    };
    let manifest = HlsManifest::builder()
        .ad_markers(ad_markers)
        .manifest_name(&config.manifest_name)
        .program_date_time_interval_seconds(config.program_date_time_interval_seconds)
        .build();

    HlsPackage::builder()
        .hls_manifests(manifest)
        .segment_duration_seconds(config.segment_duration_seconds)
        .use_audio_rendition_group(config.use_audio_rendition_group)
        .build()
}

#[async_trait]
impl VodPackagingPort for MediaPackageVodAdapter {
    async fn create_asset(
        &self,
        request: &AssetRequest,
    ) -> Result<Asset, Box<dyn Error + Send + Sync>> {
        let resp = self
            .client
            .create_asset()
            .id(&request.id)
            .packaging_group_id(&request.packaging_group_id)
            .source_arn(&request.source_arn)
            .source_role_arn(&request.source_role_arn)
            .send()
            .await?;

        let id = resp.id.ok_or(AdapterError::MissingResponseField {
            operation: "CreateAsset",
            field: "Id",
        })?;
        let egress_endpoints = resp
            .egress_endpoints
            .unwrap_or_default()
            .into_iter()
            .map(|endpoint| EgressEndpoint {
                packaging_configuration_id: endpoint.packaging_configuration_id,
                status: endpoint.status,
                url: endpoint.url,
            })
            .collect();

        Ok(Asset {
            id,
            egress_endpoints,
        })
    }

    async fn create_packaging_group(
        &self,
        group_id: &str,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let resp = self
            .client
            .create_packaging_group()
            .id(group_id)
            .send()
            .await?;

        Ok(resp.id.unwrap_or_else(|| group_id.to_string()))
    }

    async fn create_hls_packaging_configuration(
        &self,
        config_id: &str,
        group_id: &str,
        config: &HlsPackagingConfiguration,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.client
            .create_packaging_configuration()
            .id(config_id)
            .packaging_group_id(group_id)
            .hls_package(hls_package(config))
            .send()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hls_package() {
        let package = hls_package(&HlsPackagingConfiguration::default());

        assert_eq!(package.segment_duration_seconds(), Some(6));
        assert_eq!(package.use_audio_rendition_group(), Some(true));

        let manifests = package.hls_manifests();
        assert_eq!(manifests.len(), 1);
        assert_eq!(manifests[0].ad_markers(), Some(&AdMarkers::None));
        assert_eq!(manifests[0].manifest_name(), Some("index"));
        assert_eq!(manifests[0].program_date_time_interval_seconds(), Some(60));
    }

    #[test]
    fn test_ad_markers_passthrough_when_enabled() {
        let config = HlsPackagingConfiguration {
            ad_markers: true,
            ..HlsPackagingConfiguration::default()
        };

        let package = hls_package(&config);

        assert_eq!(
            package.hls_manifests()[0].ad_markers(),
            Some(&AdMarkers::Passthrough)
        );
    }
}
