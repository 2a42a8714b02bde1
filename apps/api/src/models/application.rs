use serde::{Deserialize, Deserializer, Serialize};

/// Kanban column an application sits in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Wishlist,
    #[default]
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    /// Board columns, left to right.
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Wishlist,
        ApplicationStatus::Applied,
        ApplicationStatus::Interviewing,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Wishlist => "wishlist",
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interviewing => "interviewing",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub company: String,
    pub role: String,
    pub status: ApplicationStatus,
    pub date_applied: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<String>,
}

/// Fields supplied when creating an application; id and date are assigned server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub notes: String,
    pub salary: Option<String>,
    pub interview_stage: Option<String>,
    pub interview_date: Option<String>,
}

/// Partial update. Moving a card between columns is a patch with only `status`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
    pub company: Option<String>,
    pub role: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub link: Option<String>,
    pub notes: Option<String>,
    /// `None` leaves the field alone; `Some(None)` (JSON `null`) clears it.
    #[serde(default, deserialize_with = "nullable")]
    pub salary: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub interview_stage: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub interview_date: Option<Option<String>>,
}

/// Keeps an explicit `null` distinct from a missing field.
fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ApplicationPatch {
    pub fn apply(self, app: &mut JobApplication) {
        if let Some(v) = self.company {
            app.company = v;
        }
        if let Some(v) = self.role {
            app.role = v;
        }
        if let Some(v) = self.status {
            app.status = v;
        }
        if let Some(v) = self.link {
            app.link = v;
        }
        if let Some(v) = self.notes {
            app.notes = v;
        }
        if let Some(v) = self.salary {
            app.salary = v;
        }
        if let Some(v) = self.interview_stage {
            app.interview_stage = v;
        }
        if let Some(v) = self.interview_date {
            app.interview_date = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_lowercase() {
        let status: ApplicationStatus = serde_json::from_str(r#""interviewing""#).unwrap();
        assert_eq!(status, ApplicationStatus::Interviewing);
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::Wishlist).unwrap(),
            r#""wishlist""#
        );
    }

    #[test]
    fn test_status_as_str_matches_serde() {
        for status in ApplicationStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_application_optional_fields_omitted() {
        let app = JobApplication {
            id: "1".to_string(),
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            status: ApplicationStatus::Applied,
            date_applied: "2024-01-01T00:00:00Z".to_string(),
            link: String::new(),
            notes: String::new(),
            salary: None,
            interview_stage: None,
            interview_date: None,
        };
        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["dateApplied"], "2024-01-01T00:00:00Z");
        assert!(value.get("salary").is_none());
    }

    #[test]
    fn test_status_patch_moves_card() {
        let mut app: JobApplication = serde_json::from_str(
            r#"{"id":"1","company":"Acme","role":"SWE","status":"applied","dateApplied":"x"}"#,
        )
        .unwrap();
        let patch: ApplicationPatch =
            serde_json::from_str(r#"{"status":"offer","salary":"150k"}"#).unwrap();
        patch.apply(&mut app);
        assert_eq!(app.status, ApplicationStatus::Offer);
        assert_eq!(app.salary.as_deref(), Some("150k"));
        assert_eq!(app.company, "Acme");
    }

    #[test]
    fn test_null_clears_optional_fields() {
        let mut app: JobApplication = serde_json::from_str(
            r#"{"id":"1","company":"Acme","role":"SWE","status":"interviewing","dateApplied":"x",
                "salary":"150k","interviewStage":"Onsite","interviewDate":"2024-03-01"}"#,
        )
        .unwrap();
        let patch: ApplicationPatch =
            serde_json::from_str(r#"{"salary":null,"interviewStage":null}"#).unwrap();
        assert_eq!(patch.salary, Some(None));
        assert_eq!(patch.interview_date, None);

        patch.apply(&mut app);
        assert_eq!(app.salary, None);
        assert_eq!(app.interview_stage, None);
        assert_eq!(app.interview_date.as_deref(), Some("2024-03-01"));
    }
}
