// SPDX-License-Identifier: MIT

//! Request interceptor: bearer-credential stamping.

use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::store::CredentialStore;

/// Attach the stored access token to an outgoing request.
///
/// Expiry is not pre-checked here: an expired token is still sent and
/// left for the gateway to reject, which routes the failure through the
/// response interceptor. With no token stored the request goes out
/// unmodified and fails (or not) server-side.
pub fn on_request(store: &CredentialStore, request: &mut reqwest::Request) {
    let Some(token) = store.get_access_token() else {
        return;
    };

    match HeaderValue::from_str(&format!("Bearer {token}")) {
        Ok(value) => {
            request.headers_mut().insert(AUTHORIZATION, value);
            tracing::trace!(scope = %store.scope(), "Authorization header attached");
        }
        Err(_) => {
            // A token with non-header bytes can't be sent; the request
            // proceeds unauthenticated and the gateway rejects it.
            tracing::warn!(scope = %store.scope(), "Stored access token is not header-safe");
        }
    }
}
