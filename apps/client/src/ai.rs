//! AI sub-client: profile scoring, job recommendations, and profile analysis.
//!
//! Unlike the generic wrappers in [`crate::client`], these calls check the
//! HTTP status and surface non-success responses with the status code and
//! body text, and they deserialize the success body into typed models.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use crate::client::ApiClient;
use crate::endpoints;
use crate::errors::ApiError;
use crate::models::{ProfileScore, Recommendations};

/// Caller-supplied reference to a user: either a bare identifier or a
/// profile-shaped value carrying the identifier and an optional bearer token.
///
/// Deserializes from both wire shapes (`"42"`, `42`, or
/// `{"id": ..., "user_id": ..., "token": ...}`), so resolution is a typed
/// match rather than runtime type inspection.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Profile {
        id: Option<Value>,
        user_id: Option<Value>,
        token: Option<String>,
    },
    Id(Value),
}

/// A resolved user reference: the identifier plus the bearer token, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUser {
    pub id: String,
    pub token: Option<String>,
}

impl UserRef {
    /// Reference carrying a bearer token, for endpoints that require one.
    pub fn with_token(id: impl Into<String>, token: impl Into<String>) -> Self {
        UserRef::Profile {
            id: Some(Value::String(id.into())),
            user_id: None,
            token: Some(token.into()),
        }
    }

    /// Resolves the user identifier: profile-shaped values use `id` first,
    /// falling back to `user_id`; empty strings count as absent. Fails with
    /// a validation error when no identifier is present.
    pub fn resolve(&self) -> Result<ResolvedUser, ApiError> {
        let (id, token) = match self {
            UserRef::Profile { id, user_id, token } => (
                id_from(id.as_ref()).or_else(|| id_from(user_id.as_ref())),
                token.clone(),
            ),
            UserRef::Id(value) => (id_from(Some(value)), None),
        };

        match id {
            Some(id) => Ok(ResolvedUser { id, token }),
            None => Err(ApiError::Validation("user id is required".to_string())),
        }
    }
}

fn id_from(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

impl From<&str> for UserRef {
    fn from(id: &str) -> Self {
        UserRef::Id(Value::String(id.to_string()))
    }
}

impl From<String> for UserRef {
    fn from(id: String) -> Self {
        UserRef::Id(Value::String(id))
    }
}

impl From<i64> for UserRef {
    fn from(id: i64) -> Self {
        UserRef::Id(Value::from(id))
    }
}

/// Typed access to the AI endpoints, borrowed from an [`ApiClient`].
pub struct AiClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn ai(&self) -> AiClient<'_> {
        AiClient { api: self }
    }
}

impl AiClient<'_> {
    /// Profile completeness score for the referenced user. No bearer token;
    /// the session cookie is the only credential this endpoint takes.
    pub async fn profile_score(&self, user: &UserRef) -> Result<ProfileScore, ApiError> {
        let user = self.resolve(user, "profile score")?;
        self.get(&endpoints::ai::profile_score(&user.id), None).await
    }

    /// AI job recommendations for the referenced user. Sends
    /// `Authorization: Bearer <token>`, with an empty token when the caller
    /// supplied none; the backend expects the header either way.
    pub async fn job_recommendations(&self, user: &UserRef) -> Result<Recommendations, ApiError> {
        let user = self.resolve(user, "job recommendations")?;
        let bearer = user.token.unwrap_or_default();
        self.get(&endpoints::ai::job_recommendations(&user.id), Some(bearer))
            .await
    }

    /// Full profile analysis. The backend aliases this to the score
    /// endpoint, so the response model is shared.
    pub async fn profile_analysis(&self, user: &UserRef) -> Result<ProfileScore, ApiError> {
        let user = self.resolve(user, "profile analysis")?;
        self.get(&endpoints::ai::profile_analysis(&user.id), None)
            .await
    }

    fn resolve(&self, user: &UserRef, operation: &str) -> Result<ResolvedUser, ApiError> {
        user.resolve().map_err(|e| {
            error!("{operation} request rejected: {e}");
            e
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<String>,
    ) -> Result<T, ApiError> {
        let mut request = self
            .api
            .request(Method::GET, path)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("AI request to {path} failed: {e}");
                return Err(ApiError::Http(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::Api {
                status: status.as_u16(),
                body,
            };
            error!("AI request to {path} failed: {err}");
            return Err(err);
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!("AI request to {path} failed reading body: {e}");
                return Err(ApiError::Http(e));
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                error!("AI response from {path} was not valid JSON: {e}");
                Err(ApiError::Parse(e))
            }
        }
    }
}
