//! Configuration for the Lambda handlers and the local API.

use crate::error::ConfigError;
use std::env;

/// Configuration shared by every Lambda handler and the provisioning tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AwsConfig {
    /// MediaPackage VOD packaging group clip assets are registered with
    pub packaging_group_id: String,
    /// MediaPackage live origin endpoint clips are harvested from
    pub clips_origin_endpoint_id: String,
    /// S3 bucket harvest jobs write manifests into
    pub clips_bucket: String,
    /// DynamoDB table holding clip records
    pub clips_table: String,
    /// Role MediaPackage assumes to read and write the clips bucket
    pub media_package_s3_role_arn: String,
}

impl AwsConfig {
    /// Load configuration from environment variables.
    /// Every variable is required; the first missing one is reported.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        Ok(Self {
            packaging_group_id: required("PACKAGING_GROUP_ID")?,
            clips_origin_endpoint_id: required("CLIPS_ORIGIN_ENDPOINT_ID")?,
            clips_bucket: required("CLIPS_BUCKET")?,
            clips_table: required("CLIPS_TABLE")?,
            media_package_s3_role_arn: required("MEDIA_PACKAGE_S3_ROLE_ARN")?,
        })
    }
}

/// Configuration for running the clip query API locally.
#[cfg(feature = "local")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalConfig {
    /// HTTP server bind address
    pub addr: String,
    /// HTTP server port
    pub port: String,
    /// DynamoDB table holding clip records
    pub clips_table: String,
    /// Endpoint override, e.g. DynamoDB Local
    pub dynamodb_endpoint: Option<String>,
}

#[cfg(feature = "local")]
impl LocalConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Ok(Self {
            addr: env::var("ADDR").unwrap_or_else(|_| String::from("127.0.0.1")),
            port: env::var("PORT").unwrap_or_else(|_| String::from("3000")),
            clips_table: env::var("CLIPS_TABLE")
                .ok()
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVar("CLIPS_TABLE"))?,
            dynamodb_endpoint: env::var("DYNAMODB_ENDPOINT").ok(),
        })
    }
}
