use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An application a user has submitted for a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedJob {
    pub id: Option<i64>,
    pub user_id: i64,
    pub job_id: i64,
    pub job_title: String,
    pub company: String,
    /// e.g. "Pending", "Accepted", "Rejected".
    pub status: String,
    pub applied_at: Option<NaiveDateTime>,
    pub resume_path: Option<String>,
}
