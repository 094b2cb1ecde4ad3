//! Error types shared across the workspace.
//!
//! The `FxError` enum unifies the failure cases of talking to the rates API
//! (transport, HTTP status, malformed payloads) with local concerns such as I/O,
//! configuration and lock poisoning, allowing crates to propagate a single error type.
//!
//! The `Display` text of the API variants is what ends up in the error panel of a page,
//! so it is kept short and human-readable.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by the workspace.
#[derive(Error, Debug)]
pub enum FxError {
    /// The request never completed (offline, DNS, refused connection, timeout).
    #[error("Network error: unable to reach the API ({0})")]
    Transport(String),

    /// The API answered with a non-success status.
    ///
    /// `message` holds the `message` field of the JSON error body when it could be read.
    #[error("{}", http_message(*status, message.as_deref()))]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided error message, if any.
        message: Option<String>,
    },

    /// The body of a successful response was not the expected JSON document.
    #[error("Invalid response from the API: {0}")]
    Malformed(String),

    /// Invalid configuration (base URL, HTTP client settings, CLI values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error originating from the standard library or the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The Ctrl+C handler could not be installed.
    #[error("Signal handler error: {0}")]
    Signal(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

fn http_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("HTTP error! status: {}", status),
    }
}

impl<T> From<PoisonError<T>> for FxError {
    fn from(err: PoisonError<T>) -> Self {
        FxError::MutexLock(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_prefers_server_message() {
        let err = FxError::Http {
            status: 503,
            message: Some("Provider Wise is down".to_string()),
        };
        assert_eq!(err.to_string(), "Provider Wise is down");
    }

    #[test]
    fn http_error_falls_back_to_status() {
        let err = FxError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP error! status: 500");

        let err = FxError::Http {
            status: 404,
            message: Some(String::new()),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn poisoned_lock_converts() {
        let lock = std::sync::Mutex::new(0);
        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = lock.lock().unwrap();
                panic!("poison");
            })
            .join()
        });
        let err: FxError = lock.lock().unwrap_err().into();
        assert!(matches!(err, FxError::MutexLock(_)));
    }
}
