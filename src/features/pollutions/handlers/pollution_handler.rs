use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::pollutions::dtos::{
    PollutionQueryParams, PollutionRequestDto, PollutionResponseDto,
};
use crate::features::pollutions::services::PollutionService;
use crate::shared::types::ApiResponse;

/// List pollution declarations
///
/// All query parameters are optional; supplied ones must all match.
#[utoipa::path(
    get,
    path = "/api/pollutions",
    params(PollutionQueryParams),
    responses(
        (status = 200, description = "Matching declarations", body = ApiResponse<Vec<PollutionResponseDto>>),
        (status = 400, description = "Unknown type or unparseable date")
    ),
    tag = "pollutions"
)]
pub async fn list_pollutions(
    State(service): State<Arc<PollutionService>>,
    AppQuery(query): AppQuery<PollutionQueryParams>,
) -> Result<Json<ApiResponse<Vec<PollutionResponseDto>>>> {
    let pollutions = service.list(query).await?;
    Ok(Json(ApiResponse::list(pollutions)))
}

/// Get a pollution declaration by id
#[utoipa::path(
    get,
    path = "/api/pollutions/{id}",
    params(
        ("id" = i32, Path, description = "Declaration id")
    ),
    responses(
        (status = 200, description = "Declaration found", body = ApiResponse<PollutionResponseDto>),
        (status = 404, description = "Declaration not found")
    ),
    tag = "pollutions"
)]
pub async fn get_pollution(
    State(service): State<Arc<PollutionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<PollutionResponseDto>>> {
    let pollution = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(pollution), None, None)))
}

/// Declare a pollution
#[utoipa::path(
    post,
    path = "/api/pollutions",
    request_body = PollutionRequestDto,
    responses(
        (status = 201, description = "Declaration created", body = ApiResponse<PollutionResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "pollutions"
)]
pub async fn create_pollution(
    State(service): State<Arc<PollutionService>>,
    AppJson(dto): AppJson<PollutionRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<PollutionResponseDto>>)> {
    let pollution = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(pollution),
            Some("Pollution declared successfully".to_string()),
            None,
        )),
    ))
}

/// Replace a pollution declaration
#[utoipa::path(
    put,
    path = "/api/pollutions/{id}",
    params(
        ("id" = i32, Path, description = "Declaration id")
    ),
    request_body = PollutionRequestDto,
    responses(
        (status = 200, description = "Declaration updated", body = ApiResponse<PollutionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Declaration not found")
    ),
    tag = "pollutions"
)]
pub async fn update_pollution(
    State(service): State<Arc<PollutionService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<PollutionRequestDto>,
) -> Result<Json<ApiResponse<PollutionResponseDto>>> {
    let pollution = service.update(id, dto).await?;

    Ok(Json(ApiResponse::success(
        Some(pollution),
        Some("Pollution updated successfully".to_string()),
        None,
    )))
}

/// Delete a pollution declaration
#[utoipa::path(
    delete,
    path = "/api/pollutions/{id}",
    params(
        ("id" = i32, Path, description = "Declaration id")
    ),
    responses(
        (status = 200, description = "Declaration deleted"),
        (status = 404, description = "Declaration not found")
    ),
    tag = "pollutions"
)]
pub async fn delete_pollution(
    State(service): State<Arc<PollutionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some(format!("Pollution {} deleted", id)),
        None,
    )))
}
