// SPDX-License-Identifier: MIT

//! Session facts derived from the stored access token.
//!
//! Facts are recomputed from storage on every query, never cached: a
//! token cleared or replaced elsewhere (failure interceptor, logout) is
//! reflected by the very next call. All facts fail closed: a missing,
//! malformed, or claim-less token reads as expired and unauthenticated.

use chrono::Utc;

use crate::scope::Scope;
use crate::store::CredentialStore;
use crate::token::{self, Claims};

/// Fallback shown when the token carries no display name.
pub const DISPLAY_NAME_FALLBACK: &str = "Utilisateur";
/// Fallback shown when the token carries no e-mail claim.
pub const EMAIL_FALLBACK: &str = "non renseigné";

/// Read-only view over one scope's session state.
#[derive(Debug, Clone)]
pub struct Session {
    store: CredentialStore,
}

impl Session {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    pub fn scope(&self) -> Scope {
        self.store.scope()
    }

    /// Claims of the current access token, if one is stored and decodes.
    pub fn claims(&self) -> Option<Claims> {
        self.store
            .get_access_token()
            .as_deref()
            .and_then(token::decode)
    }

    /// Whether the current token is past its expiry.
    ///
    /// A missing token, undecodable token, or missing `exp` claim all
    /// count as expired. Wall-clock comparison, no skew tolerance.
    pub fn is_expired(&self) -> bool {
        match self.claims().and_then(|c| c.exp) {
            Some(exp) => Utc::now().timestamp() >= exp,
            None => true,
        }
    }

    /// Whether the current token carries the given realm role.
    pub fn has_role(&self, role: &str) -> bool {
        self.claims().is_some_and(|c| c.has_role(role))
    }

    /// Whether this session may act in the given role: a token is
    /// stored, it has not expired, and it carries the role. An unexpired
    /// admin token is not authenticated for the student scope.
    pub fn is_authenticated(&self, role: &str) -> bool {
        self.store.get_access_token().is_some() && !self.is_expired() && self.has_role(role)
    }

    /// Display name from the token, with a fixed fallback so rendering
    /// never receives an empty value.
    pub fn display_name(&self) -> String {
        self.claims()
            .and_then(|c| c.name)
            .unwrap_or_else(|| DISPLAY_NAME_FALLBACK.to_string())
    }

    /// E-mail from the token, with a fixed fallback.
    pub fn email(&self) -> String {
        self.claims()
            .and_then(|c| c.email)
            .unwrap_or_else(|| EMAIL_FALLBACK.to_string())
    }
}
