//! Thin client for the authentication service: sign-in for the login screen,
//! sign-out on logout. No refresh, no session introspection.

use crate::config::BackendConfig;
use crate::error::ApiError;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    pub uid: String,
    pub token: String,
}

pub struct AuthClient {
    client: Client,
    config: BackendConfig,
}

impl AuthClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, ApiError> {
        let response = self
            .client
            .post(self.config.signin_url())
            .json(&SignInRequest { email, password })
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            status if !status.is_success() => Err(ApiError::Status {
                endpoint: "auth/signin",
                status: status.as_u16(),
            }),
            _ => response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string())),
        }
    }

    /// Best-effort: the local token is cleared regardless, so a failed
    /// sign-out call is only worth a log line.
    pub async fn sign_out(&self, token: &str) {
        let result = self
            .client
            .post(self.config.signout_url())
            .bearer_auth(token)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                log::info!("Signed out on backend");
            }
            Ok(response) => {
                log::warn!("Sign-out returned {}", response.status());
            }
            Err(e) => {
                log::warn!("Sign-out request failed: {}", e);
            }
        }
    }
}
