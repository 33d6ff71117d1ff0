use crate::domain::clip::ClipWindow;
use serde::{Deserialize, Serialize};

/// Live origin endpoint and S3 location every harvest is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestTarget {
    pub origin_endpoint_id: String,
    pub bucket: String,
    pub role_arn: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Destination {
    pub bucket_name: String,
    pub manifest_key: String,
    pub role_arn: String,
}

/// Outbound create-harvest-job call. Times are epoch seconds as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestJobRequest {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub origin_endpoint_id: String,
    pub s3_destination: S3Destination,
}

impl HarvestJobRequest {
    pub fn for_window(window: &ClipWindow, target: &HarvestTarget) -> Self {
        Self {
            id: window.id(),
            start_time: window.start.to_string(),
            end_time: window.end.to_string(),
            origin_endpoint_id: target.origin_endpoint_id.clone(),
            s3_destination: S3Destination {
                bucket_name: target.bucket.clone(),
                manifest_key: window.manifest_key(),
                role_arn: target.role_arn.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarvestStatus {
    InProgress,
    Succeeded,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestDestination {
    pub bucket_name: String,
    pub manifest_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

/// Harvest job as reported by the job-status-change notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestJob {
    pub id: String,
    pub status: HarvestStatus,
    pub s3_destination: HarvestDestination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_endpoint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl HarvestJob {
    pub fn succeeded(&self) -> bool {
        self.status == HarvestStatus::Succeeded
    }

    /// S3 object ARN of the harvested manifest.
    pub fn source_arn(&self) -> String {
        format!(
            "arn:aws:s3:::{}/{}",
            self.s3_destination.bucket_name, self.s3_destination.manifest_key
        )
    }
}

/// `detail` of the "MediaPackage HarvestJob Notification" event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestJobNotification {
    pub harvest_job: HarvestJob,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_for_window() {
        let target = HarvestTarget {
            origin_endpoint_id: "clips-endpoint".to_string(),
            bucket: "clips-bucket".to_string(),
            role_arn: "arn:aws:iam::123456789012:role/mp-s3".to_string(),
        };

        let request = HarvestJobRequest::for_window(&ClipWindow::ending_at(160), &target);

        assert_eq!(request.id, "100_160");
        assert_eq!(request.start_time, "100");
        assert_eq!(request.end_time, "160");
        assert_eq!(request.origin_endpoint_id, "clips-endpoint");
        assert_eq!(request.s3_destination.bucket_name, "clips-bucket");
        assert_eq!(request.s3_destination.manifest_key, "100_160.m3u8");
        assert_eq!(request.s3_destination.role_arn, target.role_arn);
    }

    #[test]
    fn test_parse_notification_detail() {
        let detail = json!({
            "harvest_job": {
                "id": "100_160",
                "arn": "arn:aws:mediapackage:us-east-1:123456789012:harvest_jobs/100_160",
                "status": "SUCCEEDED",
                "origin_endpoint_id": "clips-endpoint",
                "start_time": "1970-01-01T00:01:40+00:00",
                "end_time": "1970-01-01T00:02:40+00:00",
                "s3_destination": {
                    "bucket_name": "b",
                    "manifest_key": "100_160.m3u8",
                    "role_arn": "arn:aws:iam::123456789012:role/mp-s3"
                },
                "created_at": "1970-01-01T00:02:41+00:00"
            }
        });

        let notification: HarvestJobNotification = serde_json::from_value(detail).unwrap();
        let job = notification.harvest_job;

        assert!(job.succeeded());
        assert_eq!(job.source_arn(), "arn:aws:s3:::b/100_160.m3u8");
    }

    #[test]
    fn test_unrecognised_status_is_not_success() {
        let job: HarvestJob = serde_json::from_value(json!({
            "id": "1_61",
            "status": "CANCELLED",
            "s3_destination": { "bucket_name": "b", "manifest_key": "1_61.m3u8" }
        }))
        .unwrap();

        assert_eq!(job.status, HarvestStatus::Unknown);
        assert!(!job.succeeded());
    }
}
