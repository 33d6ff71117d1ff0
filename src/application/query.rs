use crate::domain::clip::ClipRecord;
use crate::ports::repository::ClipRepository;
use tracing::info;

pub struct ClipQueryService<R> {
    repo: R,
}

impl<R> ClipQueryService<R>
where
    R: ClipRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn clips_for_competition(
        &self,
        competition: &str,
    ) -> Result<Vec<ClipRecord>, Box<dyn std::error::Error + Send + Sync>> {
        let clips = self.repo.clips_for_competition(competition).await?;
        info!(competition = %competition, count = clips.len(), "Queried clips");
        Ok(clips)
    }
}
