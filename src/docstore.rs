//! Client for the remote document store that holds user profiles.
//!
//! One collection (`users`), one read path: `GET {base}/v1/users/{uid}`.
//! A 404 is a normal outcome (no document for that uid), not a fault.

use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::profile::{ProfileSource, UserProfile};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct UserDoc {
    #[serde(rename = "firstName")]
    first_name: String,
    #[serde(rename = "lastName")]
    last_name: String,
}

pub struct DocStoreClient {
    client: Client,
    config: BackendConfig,
}

impl DocStoreClient {
    pub fn new(config: BackendConfig) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        // reqwest's wasm backend has no client-level timeout
        #[cfg(target_arch = "wasm32")]
        let client = Client::new();

        Self { client, config }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ProfileSource for DocStoreClient {
    async fn fetch_profile(&self, uid: &str) -> Result<Option<UserProfile>, ApiError> {
        let url = self.config.user_doc_url(uid);
        log::info!("Fetching user profile from {}", url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if !status.is_success() => Err(ApiError::Status {
                endpoint: "users",
                status: status.as_u16(),
            }),
            _ => {
                let doc: UserDoc = response
                    .json()
                    .await
                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                Ok(Some(UserProfile {
                    first_name: doc.first_name,
                    last_name: doc.last_name,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_doc_field_names_match_backend() {
        let doc: UserDoc =
            serde_json::from_str(r#"{"firstName":"Asha","lastName":"Rao"}"#).unwrap();
        assert_eq!(doc.first_name, "Asha");
        assert_eq!(doc.last_name, "Rao");
    }
}
