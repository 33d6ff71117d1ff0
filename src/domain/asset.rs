use serde::{Deserialize, Serialize};

/// Request to register a harvested manifest as a VOD asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub id: String,
    pub packaging_group_id: String,
    pub source_arn: String,
    pub source_role_arn: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: String,
    pub egress_endpoints: Vec<EgressEndpoint>,
}

/// Playback endpoint of an asset, kept with the service's own key names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EgressEndpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_configuration_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
