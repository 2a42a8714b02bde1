use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::note::{InterviewNote, NewNote, NotePatch};
use crate::notes::{add_note, categories, delete_note, list_notes, update_note};
use crate::state::AppState;

/// GET /api/v1/notes
pub async fn handle_list_notes(
    State(state): State<AppState>,
) -> Result<Json<Vec<InterviewNote>>, AppError> {
    Ok(Json(list_notes(state.store.as_ref()).await?))
}

/// GET /api/v1/notes/categories
pub async fn handle_note_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let notes = list_notes(state.store.as_ref()).await?;
    Ok(Json(categories(&notes)))
}

/// POST /api/v1/notes
pub async fn handle_add_note(
    State(state): State<AppState>,
    Json(request): Json<NewNote>,
) -> Result<(StatusCode, Json<InterviewNote>), AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    let note = add_note(state.store.as_ref(), request).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// PATCH /api/v1/notes/:id
pub async fn handle_update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<NotePatch>,
) -> Result<Json<InterviewNote>, AppError> {
    update_note(state.store.as_ref(), &id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Note {id} not found")))
}

/// DELETE /api/v1/notes/:id
pub async fn handle_delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    delete_note(state.store.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
