use serde::{Deserialize, Serialize};

/// A job posting as the backend serializes it.
///
/// `resume_path`, `experience`, and `skills` are populated depending on
/// whether the posting is technical or non-technical.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub posted_by: Option<i64>,
    /// "Technical" or "Non-Technical".
    pub job_type: Option<String>,
    pub resume_path: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<String>,
}
