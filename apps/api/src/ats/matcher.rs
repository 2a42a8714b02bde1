//! Match Scorer: compares job description keywords against a resume corpus.
//!
//! Pure and synchronous: no I/O, no shared state, total over all string input.
//! An empty job description produces a vacuous 0% result rather than an error.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ats::corpus::resume_to_corpus;
use crate::ats::keywords::KeywordRules;
use crate::models::profile::ResumeProfile;

/// Outcome of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// 0 – 100
    pub score: u32,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Unique job description keywords; the score denominator.
    pub total_keywords: usize,
}

/// Where the resume side of a scan comes from.
#[derive(Debug, Clone, Copy)]
pub enum ResumeSource<'a> {
    /// Raw text, e.g. extracted from a PDF.
    Text(&'a str),
    /// A structured profile, flattened before extraction.
    Profile(&'a ResumeProfile),
}

/// Scores `resume` against `job_description` with the standard keyword rules.
pub fn analyze(job_description: &str, resume: ResumeSource<'_>) -> ScanResult {
    analyze_with(KeywordRules::standard(), job_description, resume)
}

pub fn analyze_with(
    rules: &KeywordRules,
    job_description: &str,
    resume: ResumeSource<'_>,
) -> ScanResult {
    let jd_keywords = rules.extract(job_description);

    let resume_keywords: HashSet<String> = match resume {
        ResumeSource::Text(text) => rules.extract(text),
        ResumeSource::Profile(profile) => rules.extract(&resume_to_corpus(profile)),
    };

    let total = jd_keywords.len();
    let (mut matched, mut missing): (Vec<String>, Vec<String>) = jd_keywords
        .into_iter()
        .partition(|keyword| resume_keywords.contains(keyword));

    matched.sort_unstable();
    missing.sort_unstable();

    ScanResult {
        score: compute_score(matched.len(), total),
        matched_keywords: matched,
        missing_keywords: missing,
        total_keywords: total,
    }
}

/// round(100 × matched / total), or 0 when there is nothing to match.
fn compute_score(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u32
}
