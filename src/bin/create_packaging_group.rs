//! Packaging Group Provisioning
//!
//! One-shot setup of the MediaPackage VOD packaging group and its HLS
//! packaging configuration.
//!
//! Usage: create_packaging_group <GROUP_ID> <HLS_PACKAGING_CONFIG_ID>

use clipper::adapters::aws::{mediapackage_vod::MediaPackageVodAdapter, AwsClients};
use clipper::application::provisioning::Provisioner;
use clipper::telemetry;
use std::process::ExitCode;

const USAGE: &str = "Usage: create_packaging_group <GROUP_ID> <HLS_PACKAGING_CONFIG_ID>";

/// Exactly two positional arguments: group id, then HLS packaging configuration id.
fn parse_args<I>(args: I) -> Result<(String, String), &'static str>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    match (args.next(), args.next(), args.next()) {
        (Some(group_id), Some(config_id), None) => Ok((group_id, config_id)),
        _ => Err(USAGE),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let (group_id, hls_packaging_config_id) = match parse_args(std::env::args().skip(1)) {
        Ok(ids) => ids,
        Err(usage) => {
            eprintln!("{}", usage);
            return ExitCode::from(2);
        }
    };

    telemetry::init();

    let clients = AwsClients::from_env().await;
    let provisioner = Provisioner::new(MediaPackageVodAdapter::new(clients.mediapackage_vod));

    match provisioner
        .create_hls_packaging_group(&group_id, &hls_packaging_config_id)
        .await
    {
        Ok(group_id) => {
            println!("[OK] PACKAGING_GROUP_ID={}", group_id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to create packaging group: {}", e);
            ExitCode::FAILURE
        }
    }
}
