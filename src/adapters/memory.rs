use crate::domain::clip::ClipRecord;
use crate::ports::repository::ClipRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process clip table keyed by (competition, clip).
/// Queries return clips in ascending sort-key order, as DynamoDB does.
#[derive(Clone, Default)]
pub struct InMemoryClipRepository {
    clips: Arc<RwLock<BTreeMap<(String, String), ClipRecord>>>,
}

impl InMemoryClipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClipRepository for InMemoryClipRepository {
    async fn put_clip(&self, record: &ClipRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.clips.write().await.insert(
            (record.competition.clone(), record.clip.clone()),
            record.clone(),
        );
        Ok(())
    }

    async fn clips_for_competition(
        &self,
        competition: &str,
    ) -> Result<Vec<ClipRecord>, Box<dyn Error + Send + Sync>> {
        let clips = self.clips.read().await;
        Ok(clips
            .iter()
            .filter(|((partition, _), _)| partition == competition)
            .map(|(_, record)| record.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::Asset;

    fn record(competition: &str, id: &str) -> ClipRecord {
        ClipRecord::from_asset(
            competition,
            Asset {
                id: id.to_string(),
                egress_endpoints: Vec::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_query_is_scoped_to_partition_and_sorted() {
        let repo = InMemoryClipRepository::new();
        repo.put_clip(&record("100m-dash", "160_220")).await.unwrap();
        repo.put_clip(&record("long-jump", "100_160")).await.unwrap();
        repo.put_clip(&record("100m-dash", "100_160")).await.unwrap();

        let clips = repo.clips_for_competition("100m-dash").await.unwrap();
        let ids: Vec<&str> = clips.iter().map(|c| c.clip.as_str()).collect();

        assert_eq!(ids, vec!["100_160", "160_220"]);
    }

    #[tokio::test]
    async fn test_put_with_same_key_replaces() {
        let repo = InMemoryClipRepository::new();
        repo.put_clip(&record("100m-dash", "100_160")).await.unwrap();

        let mut replacement = record("100m-dash", "100_160");
        replacement.meta.title = "Final".to_string();
        repo.put_clip(&replacement).await.unwrap();

        let clips = repo.clips_for_competition("100m-dash").await.unwrap();
        assert_eq!(clips, vec![replacement]);
    }
}
