// ATS Scanner: keyword extraction and resume / job description matching.
// `keywords`, `corpus` and `matcher` are pure; only `handlers` touches storage.

pub mod corpus;
pub mod handlers;
pub mod keywords;
pub mod matcher;

pub use matcher::{analyze, ResumeSource, ScanResult};
