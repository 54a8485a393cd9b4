use crate::error::ApiError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Minimal display data for the signed-in user. Fetched once per home-screen
/// load and dropped when the screen goes away; never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
}

impl UserProfile {
    /// Name used in the dashboard greeting ("Hey, Asha").
    pub fn greeting_name(&self) -> &str {
        &self.first_name
    }

    /// Avatar initials, first letter of each name ("AR"). Empty name parts
    /// are skipped so a profile with only a first name still gets one letter.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.trim().chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// Where user profiles come from. The home screen only ever needs "fetch one
/// profile by uid", so that is the whole seam; tests substitute an in-memory
/// source, production uses the document-store client.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ProfileSource: Send + Sync {
    /// `Ok(None)` means the backend answered but has no document for this
    /// uid; `Err` means the lookup itself failed.
    async fn fetch_profile(&self, uid: &str) -> Result<Option<UserProfile>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_both_names() {
        let p = UserProfile {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
        };
        assert_eq!(p.initials(), "AR");
        assert_eq!(p.greeting_name(), "Asha");
    }

    #[test]
    fn initials_skip_empty_parts() {
        let p = UserProfile {
            first_name: "priya".to_string(),
            last_name: "".to_string(),
        };
        assert_eq!(p.initials(), "P");
    }

    #[test]
    fn initials_uppercase_lowercase_input() {
        let p = UserProfile {
            first_name: "arjun".to_string(),
            last_name: "mehta".to_string(),
        };
        assert_eq!(p.initials(), "AM");
    }
}
