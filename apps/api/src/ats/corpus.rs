//! Flattens a structured resume profile into one text blob for keyword extraction.

use crate::models::profile::ResumeProfile;

/// Builds the resume corpus: summary, skills, then `company position highlights...`
/// per work entry, then `institution area studyType` per education entry,
/// all joined by single spaces.
pub fn resume_to_corpus(profile: &ResumeProfile) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(
        1 + profile.skills.len() + profile.work.len() + profile.education.len(),
    );

    parts.push(profile.basics.summary.clone());
    parts.extend(profile.skills.iter().cloned());
    parts.extend(profile.work.iter().map(|w| {
        format!("{} {} {}", w.company, w.position, w.highlights.join(" "))
    }));
    parts.extend(
        profile
            .education
            .iter()
            .map(|e| format!("{} {} {}", e.institution, e.area, e.study_type)),
    );

    parts.join(" ")
}
