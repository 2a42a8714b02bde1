//! Axum route handlers for the application tracker.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::application::{ApplicationPatch, JobApplication, NewApplication};
use crate::state::AppState;
use crate::tracker::applications::{
    add_application, build_board, delete_application, list_applications, update_application,
    BoardColumn,
};

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    Ok(Json(list_applications(state.store.as_ref()).await?))
}

/// GET /api/v1/applications/board
pub async fn handle_board(
    State(state): State<AppState>,
) -> Result<Json<Vec<BoardColumn>>, AppError> {
    let applications = list_applications(state.store.as_ref()).await?;
    Ok(Json(build_board(&applications)))
}

/// POST /api/v1/applications
pub async fn handle_add_application(
    State(state): State<AppState>,
    Json(request): Json<NewApplication>,
) -> Result<(StatusCode, Json<JobApplication>), AppError> {
    if request.company.trim().is_empty() || request.role.trim().is_empty() {
        return Err(AppError::Validation(
            "company and role are required".to_string(),
        ));
    }

    let application = add_application(state.store.as_ref(), request).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// PATCH /api/v1/applications/:id
pub async fn handle_update_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ApplicationPatch>,
) -> Result<Json<JobApplication>, AppError> {
    update_application(state.store.as_ref(), &id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))
}

/// DELETE /api/v1/applications/:id
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    delete_application(state.store.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
