//! Axum route handlers for the resume profile and the PDF library.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::profile::{
    BasicsPatch, Education, EducationPatch, ResumeProfile, StoredResume, WorkExperience,
    WorkExperiencePatch,
};
use crate::resume::library::{
    add_resume, delete_resume, find_resume, list_resumes, load_resume_file, resumes_by_role,
    roles, ResumeUpload, PDF_CONTENT_TYPE,
};
use crate::resume::profile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    pub skills: Vec<String>,
}

/// GET /api/v1/resume
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<ResumeProfile>, AppError> {
    Ok(Json(profile::get_profile(state.store.as_ref()).await?))
}

/// PUT /api/v1/resume
pub async fn handle_replace_profile(
    State(state): State<AppState>,
    Json(new_profile): Json<ResumeProfile>,
) -> Result<Json<ResumeProfile>, AppError> {
    profile::save_profile(state.store.as_ref(), &new_profile).await?;
    Ok(Json(new_profile))
}

/// PATCH /api/v1/resume/basics
pub async fn handle_update_basics(
    State(state): State<AppState>,
    Json(patch): Json<BasicsPatch>,
) -> Result<Json<ResumeProfile>, AppError> {
    Ok(Json(profile::update_basics(state.store.as_ref(), patch).await?))
}

/// PUT /api/v1/resume/skills
pub async fn handle_update_skills(
    State(state): State<AppState>,
    Json(request): Json<SkillsRequest>,
) -> Result<Json<ResumeProfile>, AppError> {
    let skills = request
        .skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    Ok(Json(profile::update_skills(state.store.as_ref(), skills).await?))
}

/// POST /api/v1/resume/work
pub async fn handle_add_work(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<WorkExperience>), AppError> {
    let work = profile::add_work(state.store.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(work)))
}

/// PATCH /api/v1/resume/work/:id
pub async fn handle_update_work(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<WorkExperiencePatch>,
) -> Result<Json<WorkExperience>, AppError> {
    profile::update_work(state.store.as_ref(), &id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Work entry {id} not found")))
}

/// DELETE /api/v1/resume/work/:id
pub async fn handle_remove_work(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    profile::remove_work(state.store.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resume/education
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Education>), AppError> {
    let education = profile::add_education(state.store.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(education)))
}

/// PATCH /api/v1/resume/education/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EducationPatch>,
) -> Result<Json<Education>, AppError> {
    profile::update_education(state.store.as_ref(), &id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Education entry {id} not found")))
}

/// DELETE /api/v1/resume/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    profile::remove_education(state.store.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// PDF library
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub role: Option<String>,
}

/// GET /api/v1/resumes?role=
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(query): Query<RoleQuery>,
) -> Result<Json<Vec<StoredResume>>, AppError> {
    let resumes = list_resumes(state.store.as_ref()).await?;
    Ok(Json(match query.role {
        Some(role) => resumes_by_role(resumes, &role),
        None => resumes,
    }))
}

/// GET /api/v1/resumes/roles
pub async fn handle_resume_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let resumes = list_resumes(state.store.as_ref()).await?;
    Ok(Json(roles(&resumes)))
}

/// POST /api/v1/resumes (multipart: `file`, optional `name`, optional `role`)
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<StoredResume>), AppError> {
    let mut name = None;
    let mut role = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("name") => name = Some(field.text().await.map_err(multipart_error)?),
            Some("role") => role = Some(field.text().await.map_err(multipart_error)?),
            Some("file") => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some((file_name, content_type, bytes));
            }
            _ => {}
        }
    }

    let (file_name, content_type, bytes) =
        file.ok_or_else(|| AppError::Validation("multipart field 'file' is required".to_string()))?;

    let resume = add_resume(
        state.store.as_ref(),
        state.files.as_ref(),
        ResumeUpload {
            name,
            role,
            file_name,
            content_type,
            bytes,
        },
        state.config.max_upload_bytes,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/v1/resumes/:id. The raw PDF.
pub async fn handle_download_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let resume = find_resume(state.store.as_ref(), &id).await?;
    let bytes = load_resume_file(state.files.as_ref(), &resume).await?;

    Ok((
        [
            (header::CONTENT_TYPE, PDF_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", resume.file_name.replace('"', "")),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    delete_resume(state.store.as_ref(), state.files.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}
