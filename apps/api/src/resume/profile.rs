//! Structured resume profile, stored as one document under `foster_resume`.

use anyhow::Result;
use uuid::Uuid;

use crate::models::profile::{
    BasicsPatch, Education, EducationPatch, ResumeProfile, WorkExperience, WorkExperiencePatch,
};
use crate::store::{load_or_default, save_value, KeyValueStore, RESUME_PROFILE_KEY};

pub async fn get_profile(store: &dyn KeyValueStore) -> Result<ResumeProfile> {
    load_or_default(store, RESUME_PROFILE_KEY).await
}

pub async fn save_profile(store: &dyn KeyValueStore, profile: &ResumeProfile) -> Result<()> {
    save_value(store, RESUME_PROFILE_KEY, profile).await
}

/// Loads the profile, applies `edit`, and saves it back if `edit` returned `Some`.
async fn modify_profile<T>(
    store: &dyn KeyValueStore,
    edit: impl FnOnce(&mut ResumeProfile) -> Option<T>,
) -> Result<Option<T>> {
    let mut profile = get_profile(store).await?;
    let outcome = edit(&mut profile);
    if outcome.is_some() {
        save_profile(store, &profile).await?;
    }
    Ok(outcome)
}

pub async fn update_basics(store: &dyn KeyValueStore, patch: BasicsPatch) -> Result<ResumeProfile> {
    let profile = modify_profile(store, |p| {
        patch.apply(&mut p.basics);
        Some(p.clone())
    })
    .await?;
    Ok(profile.unwrap_or_default())
}

pub async fn update_skills(store: &dyn KeyValueStore, skills: Vec<String>) -> Result<ResumeProfile> {
    let profile = modify_profile(store, |p| {
        p.skills = skills;
        Some(p.clone())
    })
    .await?;
    Ok(profile.unwrap_or_default())
}

/// Adds a blank work entry at the top of the list.
pub async fn add_work(store: &dyn KeyValueStore) -> Result<WorkExperience> {
    let work = WorkExperience {
        id: Uuid::new_v4().to_string(),
        ..WorkExperience::default()
    };
    modify_profile(store, |p| {
        p.work.insert(0, work.clone());
        Some(())
    })
    .await?;
    Ok(work)
}

pub async fn update_work(
    store: &dyn KeyValueStore,
    id: &str,
    patch: WorkExperiencePatch,
) -> Result<Option<WorkExperience>> {
    modify_profile(store, |p| {
        let work = p.work.iter_mut().find(|w| w.id == id)?;
        patch.apply(work);
        Some(work.clone())
    })
    .await
}

pub async fn remove_work(store: &dyn KeyValueStore, id: &str) -> Result<bool> {
    let removed = modify_profile(store, |p| {
        let before = p.work.len();
        p.work.retain(|w| w.id != id);
        (p.work.len() < before).then_some(())
    })
    .await?;
    Ok(removed.is_some())
}

/// Adds a blank education entry at the top of the list.
pub async fn add_education(store: &dyn KeyValueStore) -> Result<Education> {
    let education = Education {
        id: Uuid::new_v4().to_string(),
        ..Education::default()
    };
    modify_profile(store, |p| {
        p.education.insert(0, education.clone());
        Some(())
    })
    .await?;
    Ok(education)
}

pub async fn update_education(
    store: &dyn KeyValueStore,
    id: &str,
    patch: EducationPatch,
) -> Result<Option<Education>> {
    modify_profile(store, |p| {
        let education = p.education.iter_mut().find(|e| e.id == id)?;
        patch.apply(education);
        Some(education.clone())
    })
    .await
}

pub async fn remove_education(store: &dyn KeyValueStore, id: &str) -> Result<bool> {
    let removed = modify_profile(store, |p| {
        let before = p.education.len();
        p.education.retain(|e| e.id != id);
        (p.education.len() < before).then_some(())
    })
    .await?;
    Ok(removed.is_some())
}
