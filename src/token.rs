// SPDX-License-Identifier: MIT

//! Unverified JWT payload decoding.
//!
//! The gateway issues Keycloak realm tokens. The client only needs the
//! payload claims for display and route gating, so no signature check is
//! performed here; the gateway independently verifies every request.
//! Client-side role checks are a UX convenience, not a security control.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;

/// Claims extracted from an access token's payload.
///
/// Every field is optional or defaulted: tokens from other issuers, or
/// truncated/garbled tokens, must degrade to "no claims", never to a
/// parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Claims {
    /// Expiration time (Unix timestamp, seconds).
    pub exp: Option<i64>,
    /// Keycloak realm-role container.
    #[serde(default)]
    pub realm_access: RealmAccess,
    /// Display name of the account.
    pub name: Option<String>,
    /// E-mail of the account.
    pub email: Option<String>,
}

/// The `realm_access` claim as Keycloak lays it out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// Exact, case-sensitive realm-role membership.
    pub fn has_role(&self, role: &str) -> bool {
        self.realm_access.roles.iter().any(|r| r == role)
    }
}

/// Decode the payload segment of a JWT without verifying its signature.
///
/// Returns `None` for anything that is not a three-segment token with a
/// base64url (unpadded) JSON payload. Malformed input is a normal,
/// expected outcome here, not an error.
pub fn decode(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let _signature = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}
