use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewNote {
    pub id: String,
    pub category: String,
    pub question: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewNote {
    pub category: String,
    pub question: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotePatch {
    pub category: Option<String>,
    pub question: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn apply(self, note: &mut InterviewNote) {
        if let Some(v) = self.category {
            note.category = v;
        }
        if let Some(v) = self.question {
            note.question = v;
        }
        if let Some(v) = self.content {
            note.content = v;
        }
    }
}
