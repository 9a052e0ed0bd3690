pub mod ai;
pub mod applied_job;
pub mod job;
pub mod user;

pub use ai::{JobRecommendation, ProfileScore, Recommendations};
pub use applied_job::AppliedJob;
pub use job::Job;
pub use user::User;
