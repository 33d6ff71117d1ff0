use crate::domain::harvest::HarvestJobRequest;
use crate::ports::live::HarvestPort;
use async_trait::async_trait;
use aws_sdk_mediapackage::types::S3Destination;
use aws_sdk_mediapackage::Client;
use std::error::Error;

/// MediaPackageAdapter implements HarvestPort for AWS Elemental MediaPackage.
#[derive(Clone)]
pub struct MediaPackageAdapter {
    client: Client,
}

impl MediaPackageAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn s3_destination(request: &HarvestJobRequest) -> S3Destination {
    S3Destination::builder()
        .bucket_name(&request.s3_destination.bucket_name)
        .manifest_key(&request.s3_destination.manifest_key)
        .role_arn(&request.s3_destination.role_arn)
        .build()
}

#[async_trait]
impl HarvestPort for MediaPackageAdapter {
    async fn create_harvest_job(
        &self,
        request: &HarvestJobRequest,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.client
            .create_harvest_job()
            .id(&request.id)
            .start_time(&request.start_time)
            .end_time(&request.end_time)
            .origin_endpoint_id(&request.origin_endpoint_id)
            .s3_destination(s3_destination(request))
            .send()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clip::ClipWindow;
    use crate::domain::harvest::HarvestTarget;

    #[test]
    fn test_destination_points_at_clip_manifest() {
        let request = HarvestJobRequest::for_window(
            &ClipWindow::ending_at(160),
            &HarvestTarget {
                origin_endpoint_id: "clips-endpoint".to_string(),
                bucket: "clips-bucket".to_string(),
                role_arn: "arn:aws:iam::123456789012:role/mp-s3".to_string(),
            },
        );

        let destination = s3_destination(&request);

        assert_eq!(destination.bucket_name(), Some("clips-bucket"));
        assert_eq!(destination.manifest_key(), Some("100_160.m3u8"));
        assert_eq!(
            destination.role_arn(),
            Some("arn:aws:iam::123456789012:role/mp-s3")
        );
    }
}
