use crate::domain::asset::AssetRequest;
use crate::domain::clip::ClipRecord;
use crate::domain::harvest::HarvestJob;
use crate::ports::repository::ClipRepository;
use crate::ports::vod::VodPackagingPort;
use tracing::info;

/// Fixed parameters of every asset registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionSettings {
    pub packaging_group_id: String,
    pub source_role_arn: String,
    pub competition: String,
}

pub struct HarvestCompletionService<V, R> {
    packager: V,
    repo: R,
    settings: CompletionSettings,
}

impl<V, R> HarvestCompletionService<V, R>
where
    V: VodPackagingPort,
    R: ClipRepository,
{
    pub fn new(packager: V, repo: R, settings: CompletionSettings) -> Self {
        Self {
            packager,
            repo,
            settings,
        }
    }

    /// Turn a finished harvest into a VOD asset and a clip record.
    /// Jobs that did not succeed are skipped without any outbound call.
    pub async fn handle(
        &self,
        job: &HarvestJob,
    ) -> Result<Option<ClipRecord>, Box<dyn std::error::Error + Send + Sync>> {
        if !job.succeeded() {
            info!(clip_id = %job.id, status = ?job.status, "Skipping harvest job");
            return Ok(None);
        }

        let request = AssetRequest {
            id: job.id.clone(),
            packaging_group_id: self.settings.packaging_group_id.clone(),
            source_arn: job.source_arn(),
            source_role_arn: self.settings.source_role_arn.clone(),
        };
        info!(clip_id = %request.id, source_arn = %request.source_arn, "Creating asset");
        let asset = self.packager.create_asset(&request).await?;

        let record = ClipRecord::from_asset(&self.settings.competition, asset);
        self.repo.put_clip(&record).await?;
        info!(
            clip_id = %record.clip,
            competition = %record.competition,
            manifests = record.manifests.len(),
            "Stored clip"
        );

        Ok(Some(record))
    }
}
