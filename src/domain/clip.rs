use crate::domain::asset::{Asset, EgressEndpoint};
use serde::{Deserialize, Serialize};

/// Competition every clip in this deployment belongs to.
pub const COMPETITION_ID: &str = "100m-dash";

/// Length of a harvested clip, in seconds.
pub const CLIP_DURATION_SECS: i64 = 60;

/// A closed time range of the live stream, in unix epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipWindow {
    pub start: i64,
    pub end: i64,
}

impl ClipWindow {
    /// The window of `CLIP_DURATION_SECS` that ends at `end`.
    pub fn ending_at(end: i64) -> Self {
        Self {
            start: end - CLIP_DURATION_SECS,
            end,
        }
    }

    /// Clip id, shared by the harvest job, the VOD asset and the table row.
    pub fn id(&self) -> String {
        format!("{}_{}", self.start, self.end)
    }

    pub fn manifest_key(&self) -> String {
        format!("{}.m3u8", self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipMeta {
    pub id: String,
    pub title: String,
}

/// Row of the clips table. `competition` is the partition key, `clip` the sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipRecord {
    pub competition: String,
    pub clip: String,
    pub meta: ClipMeta,
    pub manifests: Vec<EgressEndpoint>,
}

impl ClipRecord {
    pub fn from_asset(competition: &str, asset: Asset) -> Self {
        Self {
            competition: competition.to_string(),
            clip: asset.id.clone(),
            meta: ClipMeta {
                title: format!("Clip: ${}", asset.id),
                id: asset.id,
            },
            manifests: asset.egress_endpoints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_one_minute_ending_now() {
        let window = ClipWindow::ending_at(1_700_000_060);
        assert_eq!(window.end - window.start, 60);
        assert_eq!(window.start, 1_700_000_000);
        assert_eq!(window.id(), "1700000000_1700000060");
        assert_eq!(window.manifest_key(), "1700000000_1700000060.m3u8");
    }

    #[test]
    fn test_record_from_asset_keeps_endpoints() {
        let asset = Asset {
            id: "100_160".to_string(),
            egress_endpoints: vec![EgressEndpoint {
                packaging_configuration_id: Some("hls".to_string()),
                status: Some("PLAYABLE".to_string()),
                url: Some("https://example.com/out/v1/index.m3u8".to_string()),
            }],
        };

        let record = ClipRecord::from_asset(COMPETITION_ID, asset.clone());

        assert_eq!(record.competition, "100m-dash");
        assert_eq!(record.clip, "100_160");
        assert_eq!(record.meta.id, "100_160");
        assert_eq!(record.meta.title, "Clip: $100_160");
        assert_eq!(record.manifests, asset.egress_endpoints);
    }

    #[test]
    fn test_record_json_shape() {
        let record = ClipRecord::from_asset(
            COMPETITION_ID,
            Asset {
                id: "1_61".to_string(),
                egress_endpoints: vec![EgressEndpoint {
                    packaging_configuration_id: Some("hls".to_string()),
                    status: None,
                    url: Some("https://cdn/1_61.m3u8".to_string()),
                }],
            },
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "competition": "100m-dash",
                "clip": "1_61",
                "meta": { "id": "1_61", "title": "Clip: $1_61" },
                "manifests": [
                    { "PackagingConfigurationId": "hls", "Url": "https://cdn/1_61.m3u8" }
                ]
            })
        );
    }
}
