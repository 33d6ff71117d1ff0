use crate::domain::harvest::HarvestJobRequest;
use async_trait::async_trait;
use std::error::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HarvestPort: Send + Sync {
    /// Schedule a harvest of a live time range into storage
    async fn create_harvest_job(
        &self,
        request: &HarvestJobRequest,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}
