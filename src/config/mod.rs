use serde::{Deserialize, Serialize};

/// Demo backend used when no override is configured.
pub const DEFAULT_BACKEND_URL: &str = "https://api.nivesh-demo.app";

/// Backend endpoint configuration for the auth / document-store service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL, no trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl BackendConfig {
    /// Load backend configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("NIVESH_BACKEND_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout_secs: std::env::var("NIVESH_BACKEND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    pub fn user_doc_url(&self, uid: &str) -> String {
        format!("{}/v1/users/{}", self.base_url, uid)
    }

    pub fn signin_url(&self) -> String {
        format!("{}/v1/auth/signin", self.base_url)
    }

    pub fn signout_url(&self) -> String {
        format!("{}/v1/auth/signout", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_demo_backend() {
        let cfg = BackendConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_BACKEND_URL);
        assert_eq!(cfg.timeout_secs, 10);
    }

    #[test]
    fn endpoint_urls() {
        let cfg = BackendConfig {
            base_url: "https://backend.test".to_string(),
            timeout_secs: 5,
        };
        assert_eq!(cfg.user_doc_url("user123"), "https://backend.test/v1/users/user123");
        assert_eq!(cfg.signin_url(), "https://backend.test/v1/auth/signin");
        assert_eq!(cfg.signout_url(), "https://backend.test/v1/auth/signout");
    }
}
