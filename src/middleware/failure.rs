// SPDX-License-Identifier: MIT

//! Response interceptor: terminal handling of credential rejection.

use reqwest::StatusCode;

use crate::error::ApiError;
use crate::nav::Navigator;
use crate::store::CredentialStore;

/// Inspect a gateway response for a dead session.
///
/// A 401 means the credential itself is expired or invalid: the scope's
/// store is cleared, the user is hard-redirected to the scope's login
/// route, and `SessionExpired` is returned so the caller's own error
/// handling still runs. There is no refresh-and-retry flow; a 401 is
/// always terminal for the session.
///
/// Every other status passes through untouched, 403 included: a valid
/// token lacking a privilege is the caller's problem, not a reason to
/// log anyone out.
pub fn on_response(
    store: &CredentialStore,
    navigator: &dyn Navigator,
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    if response.status() != StatusCode::UNAUTHORIZED {
        return Ok(response);
    }

    tracing::warn!(
        scope = %store.scope(),
        url = %response.url(),
        "Gateway rejected credentials; tearing down session"
    );
    store.clear();
    navigator.redirect(store.scope().login_route());
    Err(ApiError::SessionExpired)
}
