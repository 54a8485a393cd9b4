//! Session resolution and the home-screen load sequence.
//!
//! The home screen shows exactly one of four views; this module owns the
//! state behind that choice. Resolution order for the session identifier:
//! persisted token first, then the uid carried through navigation, else the
//! session is expired. One attempt per trigger, no automatic retry.

use crate::error::{SessionError, StorageError};
use crate::profile::{ProfileSource, UserProfile};

/// State of one home-screen instance.
///
/// `Error` and `SessionExpired` are terminal until the user retries, which
/// runs [`load_home`] again from `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeState {
    Loading,
    MainContent(UserProfile),
    SessionExpired,
    Error(SessionError),
}

/// Pick the session identifier for this load.
///
/// A storage fault wins over any navigation fallback: a device that cannot
/// read its own storage should surface that, not silently continue on the
/// uid that happened to ride along.
pub fn resolve_session_id(
    stored: Result<Option<String>, StorageError>,
    nav_uid: Option<&str>,
) -> Result<Option<String>, SessionError> {
    match stored {
        Err(e) => Err(SessionError::TokenRead(e)),
        Ok(Some(token)) => Ok(Some(token)),
        Ok(None) => Ok(nav_uid
            .map(str::trim)
            .filter(|uid| !uid.is_empty())
            .map(String::from)),
    }
}

/// Run the full load sequence once and return the terminal state.
///
/// When no session identifier can be resolved, no profile fetch is attempted.
pub async fn load_home<S: ProfileSource>(
    source: &S,
    stored: Result<Option<String>, StorageError>,
    nav_uid: Option<&str>,
) -> HomeState {
    let uid = match resolve_session_id(stored, nav_uid) {
        Err(e) => return HomeState::Error(e),
        Ok(None) => {
            log::info!("No session identifier in storage or navigation");
            return HomeState::SessionExpired;
        }
        Ok(Some(uid)) => uid,
    };

    match source.fetch_profile(&uid).await {
        Ok(Some(profile)) => HomeState::MainContent(profile),
        Ok(None) => {
            log::warn!("No profile document for uid {}", uid);
            HomeState::Error(SessionError::ProfileMissing)
        }
        Err(e) => {
            log::error!("Profile fetch failed for uid {}: {}", uid, e);
            HomeState::Error(SessionError::ProfileFetch(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeSource {
        profiles: HashMap<String, UserProfile>,
        fail: bool,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn with_profile(uid: &str, first: &str, last: &str) -> Self {
            let mut profiles = HashMap::new();
            profiles.insert(
                uid.to_string(),
                UserProfile {
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                },
            );
            Self {
                profiles,
                ..Default::default()
            }
        }

        fn fetch_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProfileSource for FakeSource {
        async fn fetch_profile(&self, uid: &str) -> Result<Option<UserProfile>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ApiError::Network("connection refused".to_string()));
            }
            Ok(self.profiles.get(uid).cloned())
        }
    }

    #[tokio::test]
    async fn stored_token_with_profile_reaches_main_content() {
        let source = FakeSource::with_profile("user123", "Asha", "Rao");
        let state = load_home(&source, Ok(Some("user123".to_string())), None).await;

        match state {
            HomeState::MainContent(profile) => {
                assert_eq!(profile.greeting_name(), "Asha");
                assert_eq!(profile.initials(), "AR");
            }
            other => panic!("expected main content, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn navigation_uid_is_the_fallback() {
        let source = FakeSource::with_profile("nav-uid", "Priya", "Shah");
        let state = load_home(&source, Ok(None), Some("nav-uid")).await;
        assert!(matches!(state, HomeState::MainContent(_)));
    }

    #[tokio::test]
    async fn stored_token_wins_over_navigation_uid() {
        let source = FakeSource::with_profile("stored", "Asha", "Rao");
        let state = load_home(&source, Ok(Some("stored".to_string())), Some("other")).await;
        assert!(matches!(state, HomeState::MainContent(_)));
    }

    #[tokio::test]
    async fn no_identifier_anywhere_expires_without_fetching() {
        let source = FakeSource::default();
        let state = load_home(&source, Ok(None), None).await;
        assert_eq!(state, HomeState::SessionExpired);
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn blank_navigation_uid_counts_as_absent() {
        let source = FakeSource::default();
        let state = load_home(&source, Ok(None), Some("   ")).await;
        assert_eq!(state, HomeState::SessionExpired);
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn storage_fault_is_session_load_failure() {
        let source = FakeSource::with_profile("user123", "Asha", "Rao");
        let stored = Err(StorageError::Read("disk error".to_string()));
        let state = load_home(&source, stored, Some("user123")).await;

        match state {
            HomeState::Error(e) => assert_eq!(e.to_string(), "session load failure"),
            other => panic!("expected error state, got {:?}", other),
        }
        // the fault surfaces even though a fallback uid was available
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn missing_document_is_profile_not_found() {
        let source = FakeSource::default();
        let state = load_home(&source, Ok(Some("ghost".to_string())), None).await;

        match state {
            HomeState::Error(e) => assert_eq!(e.to_string(), "profile not found"),
            other => panic!("expected error state, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetch_fault_is_profile_load_failure() {
        let source = FakeSource {
            fail: true,
            ..Default::default()
        };
        let state = load_home(&source, Ok(Some("user123".to_string())), None).await;

        match state {
            HomeState::Error(e) => assert_eq!(e.to_string(), "profile load failure"),
            other => panic!("expected error state, got {:?}", other),
        }
    }
}
