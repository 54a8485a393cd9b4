use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Key under which the session identifier is persisted.
/// On web this is the localStorage key; on native it names the token file.
pub const SESSION_TOKEN_KEY: &str = "userToken";

const AUTOSAVE_KEY: &str = "autosave";

// Get the appropriate storage directory for the current platform
#[cfg(not(feature = "web"))]
fn storage_dir() -> String {
    #[cfg(target_os = "android")]
    {
        // App-internal files directory; matches the bundle identifier
        "/data/data/com.nivesh.app/files".to_string()
    }
    #[cfg(not(target_os = "android"))]
    {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        format!("{home_dir}/.nivesh")
    }
}

#[cfg(not(feature = "web"))]
fn token_file_path() -> String {
    format!("{}/{}", storage_dir(), SESSION_TOKEN_KEY)
}

#[cfg(not(feature = "web"))]
fn autosave_file_path() -> String {
    format!("{}/{}.json", storage_dir(), AUTOSAVE_KEY)
}

#[cfg(not(feature = "web"))]
fn ensure_storage_dir() -> Result<(), StorageError> {
    let dir = storage_dir();
    std::fs::create_dir_all(&dir).map_err(|e| {
        log::error!("Failed to create storage directory {}: {}", dir, e);
        StorageError::Write(format!("{dir}: {e}"))
    })
}

#[cfg(feature = "web")]
fn web_local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

/// Read the persisted session identifier.
///
/// `Ok(None)` means nothing is stored (signed out / first launch); `Err`
/// means the read itself failed. The home screen maps these to different
/// terminal states, so the distinction matters.
pub fn load_session_token() -> Result<Option<String>, StorageError> {
    #[cfg(feature = "web")]
    {
        let storage = web_local_storage()?;
        let token = storage
            .get_item(SESSION_TOKEN_KEY)
            .map_err(|e| StorageError::Read(format!("{e:?}")))?;
        Ok(token.filter(|t| !t.is_empty()))
    }

    #[cfg(not(feature = "web"))]
    {
        let path = token_file_path();
        match std::fs::read_to_string(&path) {
            Ok(data) => {
                let token = data.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                log::error!("Failed to read session token from {}: {}", path, e);
                Err(StorageError::Read(e.to_string()))
            }
        }
    }
}

/// Persist the session identifier (called after a successful sign-in).
pub fn save_session_token(token: &str) -> Result<(), StorageError> {
    #[cfg(feature = "web")]
    {
        let storage = web_local_storage()?;
        storage
            .set_item(SESSION_TOKEN_KEY, token)
            .map_err(|e| StorageError::Write(format!("{e:?}")))?;
        log::info!("Session token saved to web storage");
        Ok(())
    }

    #[cfg(not(feature = "web"))]
    {
        ensure_storage_dir()?;
        let path = token_file_path();
        std::fs::write(&path, token).map_err(|e| {
            log::error!("Failed to write session token to {}: {}", path, e);
            StorageError::Write(e.to_string())
        })?;
        log::info!("Session token saved to {}", path);
        Ok(())
    }
}

/// Remove the persisted session identifier (sign-out).
pub fn clear_session_token() {
    #[cfg(feature = "web")]
    {
        if let Ok(storage) = web_local_storage() {
            let _ = storage.remove_item(SESSION_TOKEN_KEY);
        }
    }

    #[cfg(not(feature = "web"))]
    {
        let path = token_file_path();
        match std::fs::remove_file(&path) {
            Ok(_) => log::info!("Session token removed"),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::error!("Failed to remove session token {}: {}", path, e);
                }
            }
        }
    }
}

/// Automated-savings configuration, persisted on every change from the
/// autosave screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AutosaveSettings {
    /// Master switch for automated savings
    pub enabled: bool,
    /// Round up spare change from transactions
    pub roundup_enabled: bool,
    /// Fixed weekly contribution in rupees
    pub weekly_amount: u32,
}

impl Default for AutosaveSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            roundup_enabled: true,
            weekly_amount: 500,
        }
    }
}

pub fn save_autosave_settings(settings: &AutosaveSettings) {
    #[cfg(feature = "web")]
    {
        if let Ok(storage) = web_local_storage() {
            match serde_json::to_string(settings) {
                Ok(serialized) => {
                    if storage.set_item(AUTOSAVE_KEY, &serialized).is_err() {
                        log::error!("Failed to write autosave settings to web storage");
                    }
                }
                Err(e) => log::error!("Failed to serialize autosave settings: {}", e),
            }
        }
    }

    #[cfg(not(feature = "web"))]
    {
        if ensure_storage_dir().is_ok() {
            let path = autosave_file_path();
            match serde_json::to_string_pretty(settings) {
                Ok(serialized) => match std::fs::write(&path, serialized) {
                    Ok(_) => log::info!("Autosave settings saved to {}", path),
                    Err(e) => log::error!("Failed to write autosave settings to {}: {}", path, e),
                },
                Err(e) => log::error!("Failed to serialize autosave settings: {}", e),
            }
        }
    }
}

pub fn load_autosave_settings() -> AutosaveSettings {
    #[cfg(feature = "web")]
    {
        web_local_storage()
            .ok()
            .and_then(|storage| storage.get_item(AUTOSAVE_KEY).ok().flatten())
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default()
    }

    #[cfg(not(feature = "web"))]
    {
        let path = autosave_file_path();
        if !Path::new(&path).exists() {
            return AutosaveSettings::default();
        }
        match std::fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("Failed to parse autosave settings from {}: {}", path, e);
                    AutosaveSettings::default()
                }
            },
            Err(e) => {
                log::error!("Failed to read autosave settings from {}: {}", path, e);
                AutosaveSettings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autosave_defaults() {
        let s = AutosaveSettings::default();
        assert!(!s.enabled);
        assert!(s.roundup_enabled);
        assert_eq!(s.weekly_amount, 500);
    }

    #[test]
    fn autosave_serde_roundtrip() {
        let s = AutosaveSettings {
            enabled: true,
            roundup_enabled: false,
            weekly_amount: 1000,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: AutosaveSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn autosave_parse_failure_is_not_fatal() {
        let garbage: Result<AutosaveSettings, _> = serde_json::from_str("{\"enabled\":\"yes\"}");
        assert!(garbage.is_err());
    }
}
