use serde::{Deserialize, Serialize};

/// A user account, including the profile fields the AI features read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<i64>,
    pub full_name: String,
    pub username: String,
    pub email: String,
    /// Sent on signup; the backend omits it elsewhere.
    pub password: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub preferred_location: Option<String>,
    pub salary_expectation: Option<String>,
    pub bio: Option<String>,
    pub preferred_job_type: Option<String>,
    pub job_title: Option<String>,
    pub years_experience: Option<i32>,
    pub industries: Option<String>,
    pub certifications: Option<String>,
}
