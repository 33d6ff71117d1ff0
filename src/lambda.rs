//! Lambda entry points. Each handler turns one inbound event into a service call
//! and shapes the service result into the response the trigger expects.

use crate::application::completion::HarvestCompletionService;
use crate::application::query::ClipQueryService;
use crate::application::requester::ClipRequesterService;
use crate::domain::harvest::HarvestJobNotification;
use crate::error::EventError;
use crate::ports::clock::Clock;
use crate::ports::live::HarvestPort;
use crate::ports::repository::ClipRepository;
use crate::ports::vod::VodPackagingPort;
use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use aws_lambda_events::eventbridge::EventBridgeEvent;
use lambda_runtime::Error;
use serde_json::{json, Value};

/// Path parameter carrying the competition id.
pub const COMPETITION_PATH_PARAMETER: &str = "competitionId";

/// Scheduled trigger; the payload is ignored.
pub async fn create_new_clip<H, C>(
    service: &ClipRequesterService<H, C>,
    _event: Value,
) -> Result<Value, Error>
where
    H: HarvestPort,
    C: Clock,
{
    service.request_clip().await?;

    Ok(json!({
        "statusCode": 200,
        "headers": { "Content-Type": "application/json" }
    }))
}

pub async fn process_harvested_clip<V, R>(
    service: &HarvestCompletionService<V, R>,
    event: EventBridgeEvent<HarvestJobNotification>,
) -> Result<(), Error>
where
    V: VodPackagingPort,
    R: ClipRepository,
{
    service.handle(&event.detail.harvest_job).await?;
    Ok(())
}

pub async fn get_all_clips_for_competition<R>(
    service: &ClipQueryService<R>,
    request: ApiGatewayProxyRequest,
) -> Result<ApiGatewayProxyResponse, Error>
where
    R: ClipRepository,
{
    let competition_id = request
        .path_parameters
        .get(COMPETITION_PATH_PARAMETER)
        .ok_or(EventError::MissingPathParameter(COMPETITION_PATH_PARAMETER))?;

    let clips = service.clips_for_competition(competition_id).await?;
    let body = serde_json::to_string(&clips).map_err(EventError::from)?;

    Ok(ApiGatewayProxyResponse {
        status_code: 200,
        body: Some(Body::Text(body)),
        ..Default::default()
    })
}
