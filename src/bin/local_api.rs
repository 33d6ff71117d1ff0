//! Local Clip API Binary
//!
//! Serves the clip query endpoint over HTTP for local development.
//! Point `DYNAMODB_ENDPOINT` at DynamoDB Local to run without an AWS account.
//!
//! Environment Variables:
//! - ADDR / PORT: bind address (default 127.0.0.1:3000)
//! - CLIPS_TABLE: DynamoDB table for clip records
//! - DYNAMODB_ENDPOINT: optional endpoint override

use clipper::adapters::aws::dynamodb::DynamoClipRepository;
use clipper::adapters::local::http;
use clipper::application::query::ClipQueryService;
use clipper::{telemetry, LocalConfig};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = LocalConfig::from_env()?;

    telemetry::init();

    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(endpoint) = &config.dynamodb_endpoint {
        loader = loader.endpoint_url(endpoint);
    }
    let sdk_config = loader.load().await;

    let repo = DynamoClipRepository::new(
        aws_sdk_dynamodb::Client::new(&sdk_config),
        config.clips_table.clone(),
    );
    let app = http::router(Arc::new(ClipQueryService::new(repo)));

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.addr, config.port)).await?;
    info!("Listening at {}:{}", config.addr, config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
