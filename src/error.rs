// SPDX-License-Identifier: MIT

//! Error types surfaced by the gateway client and interceptors.

use reqwest::StatusCode;

/// Errors a gateway call can surface to its caller.
///
/// Expected session conditions (absent, expired, or malformed tokens) are
/// never reported through this type; they degrade to fail-closed session
/// facts instead. `SessionExpired` marks the one terminal case: the
/// gateway rejected the credential outright with a 401.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The gateway answered 401: the session was torn down and the user
    /// redirected to the login route. Callers still see this error so
    /// their own handling (toasts, spinners) runs too.
    #[error("session expired or invalid")]
    SessionExpired,

    /// Any other non-success status from the gateway, 403 included.
    /// A valid but under-privileged token must not force a logout, so
    /// forbidden responses stay a caller-level concern.
    #[error("gateway returned {status}")]
    Gateway { status: StatusCode },

    /// Transport-level failure (connection refused, TLS, body decode).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for gateway calls.
pub type Result<T> = std::result::Result<T, ApiError>;
