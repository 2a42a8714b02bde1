// Interview notes: CRUD over `foster_interview_notes`.

pub mod handlers;

use std::collections::BTreeSet;

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::models::note::{InterviewNote, NewNote, NotePatch};
use crate::store::{load_or_default, save_value, KeyValueStore, INTERVIEW_NOTES_KEY};

pub async fn list_notes(store: &dyn KeyValueStore) -> Result<Vec<InterviewNote>> {
    load_or_default(store, INTERVIEW_NOTES_KEY).await
}

pub async fn add_note(store: &dyn KeyValueStore, new: NewNote) -> Result<InterviewNote> {
    let mut notes = list_notes(store).await?;

    let note = InterviewNote {
        id: Uuid::new_v4().to_string(),
        category: new.category,
        question: new.question,
        content: new.content,
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    notes.insert(0, note.clone());
    save_value(store, INTERVIEW_NOTES_KEY, &notes).await?;
    Ok(note)
}

pub async fn update_note(
    store: &dyn KeyValueStore,
    id: &str,
    patch: NotePatch,
) -> Result<Option<InterviewNote>> {
    let mut notes = list_notes(store).await?;

    let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
        return Ok(None);
    };
    patch.apply(note);
    let updated = note.clone();

    save_value(store, INTERVIEW_NOTES_KEY, &notes).await?;
    Ok(Some(updated))
}

pub async fn delete_note(store: &dyn KeyValueStore, id: &str) -> Result<bool> {
    let mut notes = list_notes(store).await?;
    let before = notes.len();
    notes.retain(|n| n.id != id);

    if notes.len() == before {
        return Ok(false);
    }
    save_value(store, INTERVIEW_NOTES_KEY, &notes).await?;
    Ok(true)
}

/// Distinct categories in ascending order.
pub fn categories(notes: &[InterviewNote]) -> Vec<String> {
    notes
        .iter()
        .map(|n| n.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
