//! Harvest Completion Binary
//!
//! Deployed as an AWS Lambda function behind an EventBridge rule matching
//! "MediaPackage HarvestJob Notification". Succeeded harvests become VOD assets
//! and clip records; any other status is dropped.
//!
//! Environment Variables:
//! - PACKAGING_GROUP_ID: MediaPackage VOD packaging group for clip assets
//! - MEDIA_PACKAGE_S3_ROLE_ARN: role MediaPackage VOD uses to read the bucket
//! - CLIPS_TABLE: DynamoDB table for clip records
//! - CLIPS_ORIGIN_ENDPOINT_ID, CLIPS_BUCKET: required by every handler

use aws_lambda_events::eventbridge::EventBridgeEvent;
use clipper::adapters::aws::{
    dynamodb::DynamoClipRepository, mediapackage_vod::MediaPackageVodAdapter, AwsClients,
};
use clipper::application::completion::{CompletionSettings, HarvestCompletionService};
use clipper::domain::clip::COMPETITION_ID;
use clipper::domain::harvest::HarvestJobNotification;
use clipper::{lambda, telemetry, AwsConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();

    let config = AwsConfig::from_env()?;
    let clients = AwsClients::from_env().await;

    let service = HarvestCompletionService::new(
        MediaPackageVodAdapter::new(clients.mediapackage_vod),
        DynamoClipRepository::new(clients.dynamodb, config.clips_table),
        CompletionSettings {
            packaging_group_id: config.packaging_group_id,
            source_role_arn: config.media_package_s3_role_arn,
            competition: COMPETITION_ID.to_string(),
        },
    );

    run(service_fn(
        |event: LambdaEvent<EventBridgeEvent<HarvestJobNotification>>| {
            lambda::process_harvested_clip(&service, event.payload)
        },
    ))
    .await
}
