use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile completeness analysis. The analyze endpoint aliases the score
/// endpoint on the backend, so both return this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileScore {
    /// 0–100.
    pub score: u32,
    pub suggestion: String,
    pub user_id: Option<i64>,
    /// Epoch-millisecond timestamp as the backend emits it.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub analysis_date: Option<DateTime<Utc>>,
    /// Populated when backend-side analysis failed.
    #[serde(default)]
    pub error: Option<String>,
}

/// One recommended job from the recommendations endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendation {
    pub job_id: i64,
    /// 0–100; the backend drops matches scoring 30 or below.
    pub match_score: u32,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Response of the recommendations endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub recommendations: Vec<JobRecommendation>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub ai_analysis: Option<String>,
    /// Populated when the backend fell back after an AI service failure.
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_score_with_millisecond_date() {
        let score: ProfileScore = serde_json::from_value(json!({
            "score": 85,
            "suggestion": "Add certifications to your profile",
            "user_id": 42,
            "analysis_date": 1767225600000i64
        }))
        .unwrap();

        assert_eq!(score.score, 85);
        assert_eq!(score.user_id, Some(42));
        assert!(score.analysis_date.is_some());
        assert!(score.error.is_none());
    }

    #[test]
    fn test_profile_score_error_fallback_shape() {
        let score: ProfileScore = serde_json::from_value(json!({
            "score": 0,
            "suggestion": "Unable to analyze profile at this time. Please try again later.",
            "error": "Failed to analyze profile: upstream timeout"
        }))
        .unwrap();

        assert_eq!(score.score, 0);
        assert!(score.error.is_some());
        assert!(score.analysis_date.is_none());
    }

    #[test]
    fn test_recommendations_response() {
        let recs: Recommendations = serde_json::from_value(json!({
            "recommendations": [
                { "jobId": 5, "matchScore": 85, "reasons": ["Skills match"] },
                { "jobId": 9, "matchScore": 60, "reasons": [] }
            ],
            "insights": ["AI considered 12 available positions"],
            "ai_analysis": "Powered by the AI language model"
        }))
        .unwrap();

        assert_eq!(recs.recommendations.len(), 2);
        assert_eq!(recs.recommendations[0].job_id, 5);
        assert_eq!(recs.recommendations[0].match_score, 85);
        assert_eq!(recs.insights.len(), 1);
    }

    #[test]
    fn test_recommendations_fallback_shape() {
        let recs: Recommendations = serde_json::from_value(json!({
            "recommendations": [],
            "insights": ["AI analysis temporarily unavailable"],
            "error": "AI service unavailable: connection refused"
        }))
        .unwrap();

        assert!(recs.recommendations.is_empty());
        assert!(recs.error.is_some());
        assert!(recs.ai_analysis.is_none());
    }
}
