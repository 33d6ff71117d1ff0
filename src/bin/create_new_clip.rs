//! Clip Requester Binary
//!
//! Deployed as an AWS Lambda function on a one-minute schedule. Every invocation
//! asks MediaPackage to harvest the last 60 seconds of the live stream into S3.
//!
//! Environment Variables:
//! - PACKAGING_GROUP_ID, CLIPS_TABLE: required by every handler
//! - CLIPS_ORIGIN_ENDPOINT_ID: MediaPackage origin endpoint to harvest from
//! - CLIPS_BUCKET: S3 bucket for harvested manifests
//! - MEDIA_PACKAGE_S3_ROLE_ARN: role MediaPackage uses to write the bucket

use clipper::adapters::aws::{mediapackage::MediaPackageAdapter, AwsClients};
use clipper::application::requester::ClipRequesterService;
use clipper::domain::harvest::HarvestTarget;
use clipper::ports::clock::SystemClock;
use clipper::{lambda, telemetry, AwsConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();

    let config = AwsConfig::from_env()?;
    let clients = AwsClients::from_env().await;

    let service = ClipRequesterService::new(
        MediaPackageAdapter::new(clients.mediapackage),
        SystemClock,
        HarvestTarget {
            origin_endpoint_id: config.clips_origin_endpoint_id,
            bucket: config.clips_bucket,
            role_arn: config.media_package_s3_role_arn,
        },
    );

    run(service_fn(|event: LambdaEvent<Value>| {
        lambda::create_new_clip(&service, event.payload)
    }))
    .await
}
