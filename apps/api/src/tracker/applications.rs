use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::models::application::{ApplicationPatch, ApplicationStatus, JobApplication, NewApplication};
use crate::store::{load_or_default, save_value, KeyValueStore, APPLICATIONS_KEY};

/// One kanban column.
#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub status: ApplicationStatus,
    pub applications: Vec<JobApplication>,
}

pub async fn list_applications(store: &dyn KeyValueStore) -> Result<Vec<JobApplication>> {
    load_or_default(store, APPLICATIONS_KEY).await
}

/// Creates an application with a fresh id and today's date, newest first.
pub async fn add_application(
    store: &dyn KeyValueStore,
    new: NewApplication,
) -> Result<JobApplication> {
    let mut applications = list_applications(store).await?;

    let application = JobApplication {
        id: Uuid::new_v4().to_string(),
        company: new.company,
        role: new.role,
        status: new.status,
        date_applied: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        link: new.link,
        notes: new.notes,
        salary: new.salary,
        interview_stage: new.interview_stage,
        interview_date: new.interview_date,
    };

    applications.insert(0, application.clone());
    save_value(store, APPLICATIONS_KEY, &applications).await?;

    info!(
        "Added application {} ({} at {}, {})",
        application.id,
        application.role,
        application.company,
        application.status.as_str()
    );
    Ok(application)
}

/// Applies `patch` to the application with `id`. Returns `None` if no such application.
pub async fn update_application(
    store: &dyn KeyValueStore,
    id: &str,
    patch: ApplicationPatch,
) -> Result<Option<JobApplication>> {
    let mut applications = list_applications(store).await?;

    let Some(application) = applications.iter_mut().find(|a| a.id == id) else {
        return Ok(None);
    };
    patch.apply(application);
    let updated = application.clone();

    save_value(store, APPLICATIONS_KEY, &applications).await?;
    Ok(Some(updated))
}

/// Removes the application with `id`. Returns whether anything was removed.
pub async fn delete_application(store: &dyn KeyValueStore, id: &str) -> Result<bool> {
    let mut applications = list_applications(store).await?;
    let before = applications.len();
    applications.retain(|a| a.id != id);

    if applications.len() == before {
        return Ok(false);
    }
    save_value(store, APPLICATIONS_KEY, &applications).await?;
    Ok(true)
}

/// Groups applications into the five board columns, keeping list order within each.
pub fn build_board(applications: &[JobApplication]) -> Vec<BoardColumn> {
    ApplicationStatus::ALL
        .iter()
        .map(|&status| BoardColumn {
            status,
            applications: applications
                .iter()
                .filter(|a| a.status == status)
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryKeyValueStore;

    fn new_app(company: &str, status: ApplicationStatus) -> NewApplication {
        NewApplication {
            company: company.to_string(),
            role: "Engineer".to_string(),
            status,
            link: String::new(),
            notes: String::new(),
            salary: None,
            interview_stage: None,
            interview_date: None,
        }
    }

    #[tokio::test]
    async fn test_add_prepends_and_assigns_id() {
        let store = MemoryKeyValueStore::default();
        let first = add_application(&store, new_app("Acme", ApplicationStatus::Applied))
            .await
            .unwrap();
        let second = add_application(&store, new_app("Globex", ApplicationStatus::Wishlist))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert!(!first.date_applied.is_empty());
        let all = list_applications(&store).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].company, "Globex");
        assert_eq!(all[1].company, "Acme");
    }

    #[tokio::test]
    async fn test_update_moves_between_columns() {
        let store = MemoryKeyValueStore::default();
        let app = add_application(&store, new_app("Acme", ApplicationStatus::Applied))
            .await
            .unwrap();

        let patch = ApplicationPatch {
            status: Some(ApplicationStatus::Interviewing),
            interview_stage: Some(Some("Onsite".to_string())),
            ..ApplicationPatch::default()
        };
        let updated = update_application(&store, &app.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.status, ApplicationStatus::Interviewing);
        assert_eq!(updated.interview_stage.as_deref(), Some("Onsite"));

        let stored = list_applications(&store).await.unwrap();
        assert_eq!(stored[0].status, ApplicationStatus::Interviewing);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let store = MemoryKeyValueStore::default();
        let result = update_application(&store, "nope", ApplicationPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryKeyValueStore::default();
        let app = add_application(&store, new_app("Acme", ApplicationStatus::Applied))
            .await
            .unwrap();
        assert!(delete_application(&store, &app.id).await.unwrap());
        assert!(!delete_application(&store, &app.id).await.unwrap());
        assert!(list_applications(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_board_has_all_columns_in_order() {
        let store = MemoryKeyValueStore::default();
        add_application(&store, new_app("A", ApplicationStatus::Offer)).await.unwrap();
        add_application(&store, new_app("B", ApplicationStatus::Applied)).await.unwrap();
        add_application(&store, new_app("C", ApplicationStatus::Applied)).await.unwrap();

        let board = build_board(&list_applications(&store).await.unwrap());
        let statuses: Vec<_> = board.iter().map(|c| c.status).collect();
        assert_eq!(statuses, ApplicationStatus::ALL.to_vec());
        assert_eq!(board[1].applications.len(), 2);
        assert_eq!(board[1].applications[0].company, "C");
        assert_eq!(board[3].applications[0].company, "A");
        assert!(board[0].applications.is_empty());
    }
}
