use crate::domain::clip::ClipWindow;
use crate::domain::harvest::{HarvestJobRequest, HarvestTarget};
use crate::ports::clock::Clock;
use crate::ports::live::HarvestPort;
use tracing::info;

pub struct ClipRequesterService<H, C> {
    harvester: H,
    clock: C,
    target: HarvestTarget,
}

impl<H, C> ClipRequesterService<H, C>
where
    H: HarvestPort,
    C: Clock,
{
    pub fn new(harvester: H, clock: C, target: HarvestTarget) -> Self {
        Self {
            harvester,
            clock,
            target,
        }
    }

    /// Harvest the minute of live stream that ends now.
    /// Overlapping invocations are not deduplicated.
    pub async fn request_clip(
        &self,
    ) -> Result<HarvestJobRequest, Box<dyn std::error::Error + Send + Sync>> {
        let window = ClipWindow::ending_at(self.clock.now_unix());
        let request = HarvestJobRequest::for_window(&window, &self.target);

        info!(
            clip_id = %request.id,
            manifest_key = %request.s3_destination.manifest_key,
            "Requesting harvest job"
        );
        self.harvester.create_harvest_job(&request).await?;

        Ok(request)
    }
}
