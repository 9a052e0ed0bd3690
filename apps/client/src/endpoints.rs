//! Endpoint registry: logical operation names mapped to URL paths under the
//! backend's `/api` prefix, grouped by domain. Fixed paths are constants,
//! parameterized ones are builders. Pure string construction throughout.
//!
//! Identifiers are percent-encoded defensively; for the backend's numeric ids
//! the encoding is a no-op.

use std::fmt::Display;

fn encode(value: impl Display) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}

pub mod auth {
    use super::encode;

    pub const SIGNUP: &str = "/api/auth/signup";
    pub const LOGIN: &str = "/api/auth/login";
    pub const LOGOUT: &str = "/api/auth/logout";
    pub const USER_INFO: &str = "/api/auth/user-info";
    pub const UPDATE_PROFILE: &str = "/api/auth/update-profile";
    pub const APPLY_JOB: &str = "/api/auth/apply-job";
    pub const APPLIED_JOBS: &str = "/api/auth/applied-jobs";
    pub const DASHBOARD: &str = "/api/auth/dashboard";
    pub const ALL_POSTED_APPLICATIONS: &str = "/api/auth/get-all-posted-applications";
    pub const APPROVE_APPLICATION: &str = "/api/auth/approve-application";
    pub const APPROVED_JOBS: &str = "/api/auth/approved-jobs";

    pub fn delete_application(id: impl std::fmt::Display) -> String {
        format!("/api/auth/delete-application/{}", encode(id))
    }
}

pub mod jobs {
    use super::encode;

    pub const ALL: &str = "/api/jobs";
    pub const POST: &str = "/api/jobs/post";
    /// Updates go to the collection path, same as listing.
    pub const UPDATE: &str = "/api/jobs";

    pub fn by_id(id: impl std::fmt::Display) -> String {
        format!("/api/jobs/{}", encode(id))
    }

    /// Free-text search; the query lands percent-encoded in the query string.
    pub fn search(query: &str) -> String {
        format!("/api/jobs/search?query={}", urlencoding::encode(query))
    }

    pub fn by_user(user_id: impl std::fmt::Display) -> String {
        format!("/api/jobs/user/{}", encode(user_id))
    }

    pub fn delete(id: impl std::fmt::Display) -> String {
        by_id(id)
    }
}

pub mod applied_jobs {
    use super::encode;

    pub fn view_applications(job_id: impl std::fmt::Display) -> String {
        format!("/api/applied-jobs/view-applications/{}", encode(job_id))
    }
}

pub mod ai {
    use super::encode;

    pub fn profile_score(user_id: impl std::fmt::Display) -> String {
        format!("/api/profile/score?userId={}", encode(user_id))
    }

    pub fn job_recommendations(user_id: impl std::fmt::Display) -> String {
        format!("/api/jobs/ai/recommendations?userId={}", encode(user_id))
    }

    pub fn profile_analysis(user_id: impl std::fmt::Display) -> String {
        format!("/api/profile/analyze?userId={}", encode(user_id))
    }
}
