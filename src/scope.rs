// SPDX-License-Identifier: MIT

//! Role scopes for the two portals (admin and student).
//!
//! The admin and student portals keep fully independent sessions: each
//! scope has its own pair of storage keys, its own required realm role,
//! and its own login entry point. The two scopes never share state and
//! may coexist in the same storage backend.

/// One portal's session namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Admin,
    Etudiant,
}

impl Scope {
    /// Storage key for this scope's access token.
    pub fn access_token_key(&self) -> &'static str {
        match self {
            Scope::Admin => "admin_access_token",
            Scope::Etudiant => "etudiant_access_token",
        }
    }

    /// Storage key for this scope's refresh token.
    pub fn refresh_token_key(&self) -> &'static str {
        match self {
            Scope::Admin => "admin_refresh_token",
            Scope::Etudiant => "etudiant_refresh_token",
        }
    }

    /// Realm role a token must carry to be authenticated for this scope.
    pub fn required_role(&self) -> &'static str {
        match self {
            Scope::Admin => "ADMIN",
            Scope::Etudiant => "ETUDIANT",
        }
    }

    /// Login route users are sent to when this scope's session is invalid.
    pub fn login_route(&self) -> &'static str {
        match self {
            Scope::Admin => "/admin/login",
            Scope::Etudiant => "/etudiant/login",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Admin => write!(f, "admin"),
            Scope::Etudiant => write!(f, "etudiant"),
        }
    }
}
