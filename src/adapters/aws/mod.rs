//! AWS adapters: MediaPackage (live harvests), MediaPackage VOD (assets)
//! and DynamoDB (clip records).

pub mod dynamodb;
pub mod mediapackage;
pub mod mediapackage_vod;

use aws_config::SdkConfig;

/// Service clients built once per process from a single SDK config.
#[derive(Clone, Debug)]
pub struct AwsClients {
    pub mediapackage: aws_sdk_mediapackage::Client,
    pub mediapackage_vod: aws_sdk_mediapackagevod::Client,
    pub dynamodb: aws_sdk_dynamodb::Client,
}

impl AwsClients {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            mediapackage: aws_sdk_mediapackage::Client::new(config),
            mediapackage_vod: aws_sdk_mediapackagevod::Client::new(config),
            dynamodb: aws_sdk_dynamodb::Client::new(config),
        }
    }

    /// Load region and credentials from the environment.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(&config)
    }
}
