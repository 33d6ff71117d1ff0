//! Clip Query Binary
//!
//! Deployed as an AWS Lambda function behind API Gateway
//! (`GET /competitions/{competitionId}/clips`). Returns every clip record of
//! the competition as a JSON array.
//!
//! Environment Variables:
//! - CLIPS_TABLE: DynamoDB table for clip records
//! - PACKAGING_GROUP_ID, CLIPS_ORIGIN_ENDPOINT_ID, CLIPS_BUCKET,
//!   MEDIA_PACKAGE_S3_ROLE_ARN: required by every handler

use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use clipper::adapters::aws::{dynamodb::DynamoClipRepository, AwsClients};
use clipper::application::query::ClipQueryService;
use clipper::{lambda, telemetry, AwsConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();

    let config = AwsConfig::from_env()?;
    let clients = AwsClients::from_env().await;

    let service =
        ClipQueryService::new(DynamoClipRepository::new(clients.dynamodb, config.clips_table));

    run(service_fn(|event: LambdaEvent<ApiGatewayProxyRequest>| {
        lambda::get_all_clips_for_competition(&service, event.payload)
    }))
    .await
}
