pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::ats::handlers as scan;
use crate::chat::handlers as chat;
use crate::notes::handlers as notes;
use crate::resume::handlers as resume;
use crate::settings::handlers as settings;
use crate::state::AppState;
use crate::tracker::handlers as tracker;

/// Room for multipart framing and text fields on top of the PDF itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // ATS scanner
        .route("/api/v1/scan", post(scan::handle_scan))
        // Tracker
        .route(
            "/api/v1/applications",
            get(tracker::handle_list_applications).post(tracker::handle_add_application),
        )
        .route("/api/v1/applications/board", get(tracker::handle_board))
        .route(
            "/api/v1/applications/:id",
            patch(tracker::handle_update_application).delete(tracker::handle_delete_application),
        )
        // Resume profile
        .route(
            "/api/v1/resume",
            get(resume::handle_get_profile).put(resume::handle_replace_profile),
        )
        .route("/api/v1/resume/basics", patch(resume::handle_update_basics))
        .route("/api/v1/resume/skills", put(resume::handle_update_skills))
        .route("/api/v1/resume/work", post(resume::handle_add_work))
        .route(
            "/api/v1/resume/work/:id",
            patch(resume::handle_update_work).delete(resume::handle_remove_work),
        )
        .route("/api/v1/resume/education", post(resume::handle_add_education))
        .route(
            "/api/v1/resume/education/:id",
            patch(resume::handle_update_education).delete(resume::handle_remove_education),
        )
        // PDF resume library
        .route(
            "/api/v1/resumes",
            get(resume::handle_list_resumes)
                .post(resume::handle_upload_resume)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/resumes/roles", get(resume::handle_resume_roles))
        .route(
            "/api/v1/resumes/:id",
            get(resume::handle_download_resume).delete(resume::handle_delete_resume),
        )
        // Interview notes
        .route(
            "/api/v1/notes",
            get(notes::handle_list_notes).post(notes::handle_add_note),
        )
        .route("/api/v1/notes/categories", get(notes::handle_note_categories))
        .route(
            "/api/v1/notes/:id",
            patch(notes::handle_update_note).delete(notes::handle_delete_note),
        )
        // Chat assistant
        .route("/api/v1/chat", post(chat::handle_chat))
        .route("/api/v1/chat/key", put(chat::handle_save_api_key))
        // Settings
        .route(
            "/api/v1/settings/backup",
            get(settings::handle_export_backup).post(settings::handle_import_backup),
        )
        .with_state(state)
}
