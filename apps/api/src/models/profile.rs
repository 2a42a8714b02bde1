use serde::{Deserialize, Serialize};

/// Contact details and free-text summary at the top of a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Basics {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    /// Field of study, e.g. "Computer Science".
    pub area: String,
    /// Degree, e.g. "BSc".
    pub study_type: String,
    pub start_date: String,
    pub end_date: String,
}

/// The structured resume edited in the resume editor.
/// Stored as a single document under `foster_resume`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeProfile {
    pub id: String,
    pub basics: Basics,
    pub work: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

impl Default for ResumeProfile {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            basics: Basics::default(),
            work: vec![],
            education: vec![],
            skills: vec![],
        }
    }
}

/// Partial update for `Basics`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BasicsPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

impl BasicsPatch {
    pub fn apply(self, basics: &mut Basics) {
        if let Some(v) = self.name {
            basics.name = v;
        }
        if let Some(v) = self.email {
            basics.email = v;
        }
        if let Some(v) = self.phone {
            basics.phone = v;
        }
        if let Some(v) = self.website {
            basics.website = v;
        }
        if let Some(v) = self.location {
            basics.location = v;
        }
        if let Some(v) = self.summary {
            basics.summary = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub highlights: Option<Vec<String>>,
}

impl WorkExperiencePatch {
    pub fn apply(self, work: &mut WorkExperience) {
        if let Some(v) = self.company {
            work.company = v;
        }
        if let Some(v) = self.position {
            work.position = v;
        }
        if let Some(v) = self.start_date {
            work.start_date = v;
        }
        if let Some(v) = self.end_date {
            work.end_date = v;
        }
        if let Some(v) = self.current {
            work.current = v;
        }
        if let Some(v) = self.highlights {
            work.highlights = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub area: Option<String>,
    pub study_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl EducationPatch {
    pub fn apply(self, education: &mut Education) {
        if let Some(v) = self.institution {
            education.institution = v;
        }
        if let Some(v) = self.area {
            education.area = v;
        }
        if let Some(v) = self.study_type {
            education.study_type = v;
        }
        if let Some(v) = self.start_date {
            education.start_date = v;
        }
        if let Some(v) = self.end_date {
            education.end_date = v;
        }
    }
}

/// A PDF resume in the resume library. The PDF bytes live in the file store
/// under `file_url`; this record is the metadata kept under `foster_resumes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResume {
    pub id: String,
    /// Display name, e.g. "Software Engineer Resume".
    pub name: String,
    /// Target role / category, e.g. "Frontend Developer".
    pub role: String,
    pub file_url: String,
    pub file_name: String,
    pub date_uploaded: String,
}
