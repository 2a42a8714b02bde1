//! Settings: backup export and import of every stored document.
//!
//! The backup keeps each document as a JSON *string*, so files written by the
//! browser version of the app (which dumped raw storage values) import unchanged.

pub mod handlers;

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::store::{
    KeyValueStore, AI_KEY_KEY, APPLICATIONS_KEY, INTERVIEW_NOTES_KEY, RESUME_LIBRARY_KEY,
    RESUME_PROFILE_KEY,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Backup {
    pub applications: Option<String>,
    pub resumes: Option<String>,
    pub interview_notes: Option<String>,
    pub ai_key: Option<String>,
    pub resume_profile: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub imported: Vec<&'static str>,
}

impl Backup {
    /// (backup field name, storage key, value) for every data field.
    fn entries(&self) -> [(&'static str, &'static str, Option<&String>); 5] {
        [
            ("applications", APPLICATIONS_KEY, self.applications.as_ref()),
            ("resumes", RESUME_LIBRARY_KEY, self.resumes.as_ref()),
            ("interviewNotes", INTERVIEW_NOTES_KEY, self.interview_notes.as_ref()),
            ("aiKey", AI_KEY_KEY, self.ai_key.as_ref()),
            ("resumeProfile", RESUME_PROFILE_KEY, self.resume_profile.as_ref()),
        ]
    }
}

async fn load_as_string(store: &dyn KeyValueStore, key: &str) -> Result<Option<String>> {
    match store.load(key).await? {
        Some(value) => Ok(Some(serde_json::to_string(&value)?)),
        None => Ok(None),
    }
}

pub async fn export_backup(store: &dyn KeyValueStore) -> Result<Backup> {
    Ok(Backup {
        applications: load_as_string(store, APPLICATIONS_KEY).await?,
        resumes: load_as_string(store, RESUME_LIBRARY_KEY).await?,
        interview_notes: load_as_string(store, INTERVIEW_NOTES_KEY).await?,
        ai_key: load_as_string(store, AI_KEY_KEY).await?,
        resume_profile: load_as_string(store, RESUME_PROFILE_KEY).await?,
        timestamp: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    })
}

/// Overwrites every key present in `backup`. All fields are parsed before anything
/// is written, so an invalid field leaves storage untouched.
pub async fn import_backup(
    store: &dyn KeyValueStore,
    backup: &Backup,
) -> Result<ImportSummary, AppError> {
    let mut parsed: Vec<(&'static str, &'static str, Value)> = Vec::new();
    for (field, key, raw) in backup.entries() {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            continue;
        };
        let value = serde_json::from_str(raw).map_err(|e| {
            AppError::Validation(format!(
                "Failed to import data. Field '{field}' is not valid JSON: {e}"
            ))
        })?;
        parsed.push((field, key, value));
    }

    let mut imported = Vec::with_capacity(parsed.len());
    for (field, key, value) in parsed {
        store.save(key, value).await?;
        imported.push(field);
    }

    info!("Imported backup fields: {}", imported.join(", "));
    Ok(ImportSummary { imported })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryKeyValueStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_export_empty_store_has_nulls_and_timestamp() {
        let store = MemoryKeyValueStore::default();
        let backup = export_backup(&store).await.unwrap();
        assert!(backup.applications.is_none());
        assert!(backup.ai_key.is_none());
        assert!(backup.timestamp.is_some());
    }

    #[tokio::test]
    async fn test_export_stringifies_documents() {
        let store = MemoryKeyValueStore::default();
        store.save(AI_KEY_KEY, json!("secret")).await.unwrap();
        store
            .save(APPLICATIONS_KEY, json!([{"id": "1", "company": "Acme"}]))
            .await
            .unwrap();

        let backup = export_backup(&store).await.unwrap();
        assert_eq!(backup.ai_key.as_deref(), Some("\"secret\""));
        let apps: Value = serde_json::from_str(backup.applications.as_deref().unwrap()).unwrap();
        assert_eq!(apps[0]["company"], "Acme");
    }

    #[tokio::test]
    async fn test_export_then_import_restores() {
        let source = MemoryKeyValueStore::default();
        source.save(INTERVIEW_NOTES_KEY, json!([{"id": "n1"}])).await.unwrap();
        source.save(RESUME_PROFILE_KEY, json!({"id": "default"})).await.unwrap();
        let backup = export_backup(&source).await.unwrap();

        let target = MemoryKeyValueStore::default();
        let summary = import_backup(&target, &backup).await.unwrap();
        assert_eq!(summary.imported, vec!["interviewNotes", "resumeProfile"]);
        assert_eq!(
            target.load(INTERVIEW_NOTES_KEY).await.unwrap(),
            Some(json!([{"id": "n1"}]))
        );
    }

    #[tokio::test]
    async fn test_import_browser_backup_file() {
        let file = r#"{
            "applications": "[{\"id\":\"a\",\"company\":\"Acme\",\"role\":\"SWE\",\"status\":\"applied\",\"dateApplied\":\"2024-01-01T00:00:00.000Z\",\"link\":\"\",\"notes\":\"\"}]",
            "resumes": null,
            "interviewNotes": null,
            "aiKey": "\"abc123\"",
            "timestamp": "2024-05-01T10:00:00.000Z"
        }"#;
        let backup: Backup = serde_json::from_str(file).unwrap();
        let store = MemoryKeyValueStore::default();
        let summary = import_backup(&store, &backup).await.unwrap();
        assert_eq!(summary.imported, vec!["applications", "aiKey"]);
        assert_eq!(store.load(AI_KEY_KEY).await.unwrap(), Some(json!("abc123")));
    }

    #[tokio::test]
    async fn test_invalid_field_writes_nothing() {
        let store = MemoryKeyValueStore::default();
        let backup = Backup {
            applications: Some("[]".to_string()),
            interview_notes: Some("{not json".to_string()),
            ..Backup::default()
        };
        let err = import_backup(&store, &backup).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.load(APPLICATIONS_KEY).await.unwrap().is_none());
    }
}
