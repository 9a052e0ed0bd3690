use anyhow::Result;

/// Client configuration loaded from environment variables.
/// Every variable has a default, so a locally running backend needs none.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin the endpoint paths are joined onto, without a trailing slash.
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base: std::env::var("SMARTJOBS_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        })
    }
}

/// The backend's default local bind address.
const DEFAULT_API_BASE: &str = "http://localhost:8080";

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.api_base, "http://localhost:8080");
    }
}
