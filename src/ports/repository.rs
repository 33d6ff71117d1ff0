use crate::domain::clip::ClipRecord;
use async_trait::async_trait;
use std::error::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipRepository: Send + Sync {
    /// Store a clip record, replacing any record with the same key
    async fn put_clip(&self, record: &ClipRecord) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// All clips of a competition
    async fn clips_for_competition(
        &self,
        competition: &str,
    ) -> Result<Vec<ClipRecord>, Box<dyn Error + Send + Sync>>;
}
