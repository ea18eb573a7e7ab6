//! Error types for the StaffTrack client.
//!
//! Each concern has its own `thiserror` enum: gateway failures ([`ApiError`]), configuration
//! ([`ConfigError`]), form coercion ([`FormError`]) and persisted storage
//! ([`StorageError`]). They are aggregated into [`Error`] so operations can propagate any of
//! them with `?`.

pub mod api;
pub mod config;
pub mod form;
pub mod storage;

use thiserror::Error;

pub use api::ApiError;
pub use config::ConfigError;
pub use form::FormError;
pub use storage::StorageError;

/// Main error type for the StaffTrack client.
#[derive(Error, Debug)]
pub enum Error {
    /// Request failed in transport or was answered with an error status.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Configuration value missing or invalid.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Form input could not be coerced into a request payload.
    #[error(transparent)]
    FormError(#[from] FormError),
    /// Persisted session storage could not be read or written.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// A change was saved but re-reading the list afterwards failed.
    #[error("Change saved, but reloading the list failed: {0}")]
    RefreshError(#[source] Box<Error>),
}

/// Shown when [`Error::RefreshError`] reaches the page.
pub const REFRESH_FAILED: &str =
    "The change was saved, but the list could not be reloaded. Please refresh the page.";

impl Error {
    /// Text to show the user for this failure.
    ///
    /// Backend `detail` messages and form problems are shown verbatim; everything else is
    /// replaced by `fallback` so transport and server internals never reach the page.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::ApiError(err) => err.user_message(fallback),
            Self::FormError(err) => err.to_string(),
            Self::RefreshError(_) => REFRESH_FAILED.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the failure was a rejected session, which the gateway already handled by
    /// logging out and redirecting.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::ApiError(err) => matches!(err, ApiError::Unauthorized { .. }),
            Self::RefreshError(err) => err.is_unauthorized(),
            _ => false,
        }
    }
}
