//! Axum route handler for the ATS scan.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::ats::{analyze, ResumeSource, ScanResult};
use crate::errors::AppError;
use crate::models::profile::ResumeProfile;
use crate::resume::library::extract_resume_text;
use crate::resume::profile::get_profile;
use crate::state::AppState;

/// Which resume to scan against.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanResumeInput {
    /// `{"text": "..."}`: raw resume text.
    Text(String),
    /// `{"profile": {...}}`: an inline structured profile.
    Profile(ResumeProfile),
    /// `"storedProfile"`: the saved resume profile.
    StoredProfile,
    /// `{"resumeId": "..."}`: a PDF from the resume library.
    ResumeId(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub job_description: String,
    pub resume: ScanResumeInput,
}

/// POST /api/v1/scan
///
/// Resolves the resume to text or a profile, then scores it against the job description.
/// A blank job description is rejected here; the matcher itself would return a vacuous 0%.
pub async fn handle_scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResult>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let jd = request.job_description.as_str();
    let (result, source) = match request.resume {
        ScanResumeInput::Text(text) => (analyze(jd, ResumeSource::Text(&text)), "text"),
        ScanResumeInput::Profile(profile) => {
            (analyze(jd, ResumeSource::Profile(&profile)), "profile")
        }
        ScanResumeInput::StoredProfile => {
            let profile = get_profile(state.store.as_ref()).await?;
            (analyze(jd, ResumeSource::Profile(&profile)), "stored_profile")
        }
        ScanResumeInput::ResumeId(id) => {
            let text = extract_resume_text(state.store.as_ref(), state.files.as_ref(), &id).await?;
            (analyze(jd, ResumeSource::Text(&text)), "pdf")
        }
    };

    info!(
        "Scan ({source}): score={} matched={} missing={} total={}",
        result.score,
        result.matched_keywords.len(),
        result.missing_keywords.len(),
        result.total_keywords
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_request_variants_deserialize() {
        let text: ScanRequest = serde_json::from_str(
            r#"{"jobDescription": "Rust", "resume": {"text": "rust"}}"#,
        )
        .unwrap();
        assert!(matches!(text.resume, ScanResumeInput::Text(ref t) if t == "rust"));

        let stored: ScanRequest =
            serde_json::from_str(r#"{"jobDescription": "Rust", "resume": "storedProfile"}"#)
                .unwrap();
        assert!(matches!(stored.resume, ScanResumeInput::StoredProfile));

        let pdf: ScanRequest = serde_json::from_str(
            r#"{"jobDescription": "Rust", "resume": {"resumeId": "abc"}}"#,
        )
        .unwrap();
        assert!(matches!(pdf.resume, ScanResumeInput::ResumeId(ref id) if id == "abc"));

        let profile: ScanRequest = serde_json::from_str(
            r#"{"jobDescription": "Rust", "resume": {"profile": {"skills": ["Rust"]}}}"#,
        )
        .unwrap();
        match profile.resume {
            ScanResumeInput::Profile(p) => assert_eq!(p.skills, vec!["Rust"]),
            other => panic!("unexpected {other:?}"),
        }
    }
}
