use thiserror::Error;

/// Faults from on-device persistence.
///
/// An absent key is not a fault: storage reads return `Ok(None)` for that,
/// so callers can tell "nothing stored" apart from "could not read".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("local storage is unavailable")]
    Unavailable,
}

/// Faults from the auth / document-store backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("backend returned {status} for {endpoint}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("sign-in rejected")]
    Unauthorized,
}

/// Everything that can go wrong while bringing up the home screen.
/// `Display` is the exact static message shown in the error banner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("session load failure")]
    TokenRead(#[source] StorageError),

    #[error("profile not found")]
    ProfileMissing,

    #[error("profile load failure")]
    ProfileFetch(#[source] ApiError),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}
