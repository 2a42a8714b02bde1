//! PDF resume library: metadata under `foster_resumes`, PDF bytes in the file store.

use std::collections::BTreeSet;

use bytes::Bytes;
use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::files::FileStore;
use crate::models::profile::StoredResume;
use crate::pdf;
use crate::store::{load_or_default, save_value, KeyValueStore, RESUME_LIBRARY_KEY};

pub const DEFAULT_ROLE: &str = "General";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A PDF received from the client, before it is stored.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    /// Display name; defaults to the file name when blank.
    pub name: Option<String>,
    /// Role / category; defaults to "General" when blank.
    pub role: Option<String>,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

pub async fn list_resumes(store: &dyn KeyValueStore) -> Result<Vec<StoredResume>, AppError> {
    Ok(load_or_default(store, RESUME_LIBRARY_KEY).await?)
}

pub async fn find_resume(store: &dyn KeyValueStore, id: &str) -> Result<StoredResume, AppError> {
    list_resumes(store)
        .await?
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

pub fn resumes_by_role(resumes: Vec<StoredResume>, role: &str) -> Vec<StoredResume> {
    resumes.into_iter().filter(|r| r.role == role).collect()
}

/// Distinct roles in ascending order.
pub fn roles(resumes: &[StoredResume]) -> Vec<String> {
    resumes
        .iter()
        .map(|r| r.role.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Validates and stores an uploaded PDF, returning the new library entry (listed first).
pub async fn add_resume(
    store: &dyn KeyValueStore,
    files: &dyn FileStore,
    upload: ResumeUpload,
    max_bytes: usize,
) -> Result<StoredResume, AppError> {
    if upload.bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if upload.bytes.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File is too large. Please upload a PDF under {} MB.",
            max_bytes / (1024 * 1024)
        )));
    }
    if !is_pdf(&upload.file_name, upload.content_type.as_deref()) {
        return Err(AppError::Validation("Only PDF resumes are supported".to_string()));
    }

    let id = Uuid::new_v4().to_string();
    let file_url = format!("resumes/{id}.pdf");
    files.put(&file_url, upload.bytes, PDF_CONTENT_TYPE).await?;

    let resume = StoredResume {
        id,
        name: non_blank(upload.name).unwrap_or_else(|| upload.file_name.clone()),
        role: non_blank(upload.role).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        file_url,
        file_name: upload.file_name,
        date_uploaded: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    if let Err(e) = save_metadata(store, &resume).await {
        // The blob is unreachable without its library entry.
        if let Err(cleanup) = files.delete(&resume.file_url).await {
            warn!("Failed to remove orphaned blob {}: {cleanup}", resume.file_url);
        }
        return Err(e);
    }

    info!("Stored resume {} ({}) for role '{}'", resume.id, resume.file_name, resume.role);
    Ok(resume)
}

async fn save_metadata(store: &dyn KeyValueStore, resume: &StoredResume) -> Result<(), AppError> {
    let mut resumes = list_resumes(store).await?;
    resumes.insert(0, resume.clone());
    save_value(store, RESUME_LIBRARY_KEY, &resumes).await?;
    Ok(())
}

/// Removes the PDF, then its library entry. Unknown ids are a no-op.
///
/// If the entry cannot be saved afterwards it still lists the deleted blob,
/// and deleting it again completes the removal.
pub async fn delete_resume(
    store: &dyn KeyValueStore,
    files: &dyn FileStore,
    id: &str,
) -> Result<(), AppError> {
    let mut resumes = list_resumes(store).await?;
    let Some(position) = resumes.iter().position(|r| r.id == id) else {
        return Ok(());
    };
    let removed = resumes.remove(position);

    files.delete(&removed.file_url).await?;
    save_value(store, RESUME_LIBRARY_KEY, &resumes).await?;

    info!("Deleted resume {id}");
    Ok(())
}

/// Loads the PDF bytes behind a library entry.
pub async fn load_resume_file(
    files: &dyn FileStore,
    resume: &StoredResume,
) -> Result<Bytes, AppError> {
    files
        .get(&resume.file_url)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("PDF for resume {} is missing", resume.id)))
}

/// Loads and extracts the text of a stored PDF resume.
pub async fn extract_resume_text(
    store: &dyn KeyValueStore,
    files: &dyn FileStore,
    id: &str,
) -> Result<String, AppError> {
    let resume = find_resume(store, id).await?;
    let bytes = load_resume_file(files, &resume).await?;
    Ok(pdf::extract_text(bytes).await?)
}

fn is_pdf(file_name: &str, content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        || file_name.to_ascii_lowercase().ends_with(".pdf")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
