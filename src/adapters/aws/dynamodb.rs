use crate::domain::asset::EgressEndpoint;
use crate::domain::clip::{ClipMeta, ClipRecord};
use crate::error::AdapterError;
use crate::ports::repository::ClipRepository;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;
use std::error::Error;

type Item = HashMap<String, AttributeValue>;

/// DynamoClipRepository implements ClipRepository for AWS DynamoDB.
#[derive(Clone)]
pub struct DynamoClipRepository {
    client: Client,
    table_name: String,
}

impl DynamoClipRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl ClipRepository for DynamoClipRepository {
    async fn put_clip(&self, record: &ClipRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await?;
        Ok(())
    }

    async fn clips_for_competition(
        &self,
        competition: &str,
    ) -> Result<Vec<ClipRecord>, Box<dyn Error + Send + Sync>> {
        let resp = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("competition = :id")
            .expression_attribute_values(":id", AttributeValue::S(competition.to_string()))
            .send()
            .await?;

        let clips = resp
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(clips)
    }
}

fn endpoint_to_attribute(endpoint: &EgressEndpoint) -> AttributeValue {
    let mut map = HashMap::new();
    let fields = [
        ("PackagingConfigurationId", &endpoint.packaging_configuration_id),
        ("Status", &endpoint.status),
        ("Url", &endpoint.url),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            map.insert(key.to_string(), AttributeValue::S(value.clone()));
        }
    }
    AttributeValue::M(map)
}

pub(crate) fn record_to_item(record: &ClipRecord) -> Item {
    let meta = HashMap::from([
        ("id".to_string(), AttributeValue::S(record.meta.id.clone())),
        ("title".to_string(), AttributeValue::S(record.meta.title.clone())),
    ]);

    HashMap::from([
        (
            "competition".to_string(),
            AttributeValue::S(record.competition.clone()),
        ),
        ("clip".to_string(), AttributeValue::S(record.clip.clone())),
        ("meta".to_string(), AttributeValue::M(meta)),
        (
            "manifests".to_string(),
            AttributeValue::L(record.manifests.iter().map(endpoint_to_attribute).collect()),
        ),
    ])
}

fn string_attr(item: &Item, key: &str) -> Result<String, AdapterError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| AdapterError::MalformedAttribute(key.to_string()))
}

fn optional_string_attr(item: &Item, key: &str) -> Option<String> {
    item.get(key).and_then(|v| v.as_s().ok()).cloned()
}

fn attribute_to_endpoint(value: &AttributeValue) -> Result<EgressEndpoint, AdapterError> {
    let map = value
        .as_m()
        .map_err(|_| AdapterError::MalformedAttribute("manifests".to_string()))?;
    Ok(EgressEndpoint {
        packaging_configuration_id: optional_string_attr(map, "PackagingConfigurationId"),
        status: optional_string_attr(map, "Status"),
        url: optional_string_attr(map, "Url"),
    })
}

pub(crate) fn item_to_record(item: &Item) -> Result<ClipRecord, AdapterError> {
    let meta = item
        .get("meta")
        .and_then(|v| v.as_m().ok())
        .ok_or_else(|| AdapterError::MalformedAttribute("meta".to_string()))?;
    let manifests = match item.get("manifests") {
        Some(value) => value
            .as_l()
            .map_err(|_| AdapterError::MalformedAttribute("manifests".to_string()))?
            .iter()
            .map(attribute_to_endpoint)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(ClipRecord {
        competition: string_attr(item, "competition")?,
        clip: string_attr(item, "clip")?,
        meta: ClipMeta {
            id: string_attr(meta, "id")?,
            title: string_attr(meta, "title")?,
        },
        manifests,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::Asset;
    use crate::domain::clip::COMPETITION_ID;

    fn record() -> ClipRecord {
        ClipRecord::from_asset(
            COMPETITION_ID,
            Asset {
                id: "100_160".to_string(),
                egress_endpoints: vec![
                    EgressEndpoint {
                        packaging_configuration_id: Some("hls".to_string()),
                        status: Some("PLAYABLE".to_string()),
                        url: Some("https://vod.example.com/100_160/index.m3u8".to_string()),
                    },
                    EgressEndpoint {
                        packaging_configuration_id: Some("dash".to_string()),
                        status: None,
                        url: None,
                    },
                ],
            },
        )
    }

    #[test]
    fn test_item_layout() {
        let item = record_to_item(&record());

        assert_eq!(
            item.get("competition"),
            Some(&AttributeValue::S("100m-dash".to_string()))
        );
        assert_eq!(item.get("clip"), Some(&AttributeValue::S("100_160".to_string())));

        let meta = item.get("meta").unwrap().as_m().unwrap();
        assert_eq!(meta.get("id"), Some(&AttributeValue::S("100_160".to_string())));
        assert_eq!(
            meta.get("title"),
            Some(&AttributeValue::S("Clip: $100_160".to_string()))
        );

        let manifests = item.get("manifests").unwrap().as_l().unwrap();
        assert_eq!(manifests.len(), 2);
        let dash = manifests[1].as_m().unwrap();
        assert_eq!(dash.len(), 1);
        assert!(!dash.contains_key("Url"));
    }

    #[test]
    fn test_item_converts_back_to_same_record() {
        let original = record();
        let restored = item_to_record(&record_to_item(&original)).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_item_without_meta_is_rejected() {
        let mut item = record_to_item(&record());
        item.remove("meta");

        let err = item_to_record(&item).unwrap_err();
        assert!(matches!(err, AdapterError::MalformedAttribute(ref key) if key == "meta"));
    }

    #[test]
    fn test_item_with_numeric_clip_is_rejected() {
        let mut item = record_to_item(&record());
        item.insert("clip".to_string(), AttributeValue::N("100".to_string()));

        assert!(item_to_record(&item).is_err());
    }
}
