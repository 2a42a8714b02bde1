use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::settings::{export_backup, import_backup, Backup, ImportSummary};
use crate::state::AppState;

/// GET /api/v1/settings/backup. Served as a dated attachment.
pub async fn handle_export_backup(State(state): State<AppState>) -> Result<Response, AppError> {
    let backup = export_backup(state.store.as_ref()).await?;
    let filename = format!(
        "foster_backup_{}.json",
        chrono::Utc::now().format("%Y-%m-%d")
    );

    Ok((
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )],
        Json(backup),
    )
        .into_response())
}

/// POST /api/v1/settings/backup. Overwrites current data.
pub async fn handle_import_backup(
    State(state): State<AppState>,
    Json(backup): Json<Backup>,
) -> Result<Json<ImportSummary>, AppError> {
    Ok(Json(import_backup(state.store.as_ref(), &backup).await?))
}
