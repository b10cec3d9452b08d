//! Section endpoint handlers.
//!
//! Each handler decodes its inputs, calls the service and maps the outcome to a status.
//! Extractor rejections are taken as `Result`s so they leave through [`ApiError`] and the
//! same error envelope as every other failure.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use super::errors::{ApiError, ApiResult};
use super::response::{DataResponse, HealthStatus};
use crate::{
    core::{SectionPatch, SectionService},
    entities::{NewSection, SectionModel},
};

/// Shared state type
pub type AppState = Arc<SectionService>;

/// `GET /health`
pub async fn health() -> Json<DataResponse<HealthStatus>> {
    Json(DataResponse::new(HealthStatus { status: "ok" }))
}

/// `GET /sections` - every section; any failure is reported as 400.
pub async fn list_sections(
    State(service): State<AppState>,
) -> ApiResult<Json<DataResponse<Vec<SectionModel>>>> {
    let sections = service
        .list_all()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(Json(DataResponse::new(sections)))
}

/// `GET /sections/{id}`
pub async fn get_section(
    State(service): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DataResponse<SectionModel>>> {
    let Path(id) = id?;
    let section = service.get_by_id(id).await?;
    Ok(Json(DataResponse::new(section)))
}

/// `POST /sections` - all eight fields required; shape errors are 422.
pub async fn create_section(
    State(service): State<AppState>,
    body: Result<Json<NewSection>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DataResponse<SectionModel>>)> {
    let Json(new_section) = body.map_err(|r| ApiError::Unprocessable(r.body_text()))?;
    let created = service.create(new_section).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

/// `PATCH /sections/{id}` - any subset of fields; shape errors are 400.
pub async fn update_section(
    State(service): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<SectionPatch>, JsonRejection>,
) -> ApiResult<Json<DataResponse<SectionModel>>> {
    let Path(id) = id?;
    let Json(patch) = body.map_err(|r| ApiError::BadRequest(r.body_text()))?;
    let updated = service.update(id, &patch).await?;
    Ok(Json(DataResponse::new(updated)))
}

/// `DELETE /sections/{id}` - 204 with an empty body.
pub async fn delete_section(
    State(service): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
