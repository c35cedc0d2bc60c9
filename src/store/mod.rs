// SPDX-License-Identifier: MIT

//! Credential storage: one opaque token pair per scope.
//!
//! The store is the single source of truth for the session. Everything
//! else (evaluator, interceptors, guards) re-reads it on demand, so a
//! pair cleared by one collaborator is observed by all others on their
//! next query. Operations are synchronous; within one portal instance
//! there is a single logical writer, so no ordering beyond the backend's
//! own map locking is needed. Concurrent external processes sharing a
//! file backend are not coordinated.

pub mod file;

use std::sync::Arc;

use dashmap::DashMap;

use crate::scope::Scope;

pub use file::FileBackend;

/// String key/value storage, shaped like the browser's localStorage.
///
/// Implementations are injected into [`CredentialStore`]; the crate never
/// reaches for a hidden global. Setting and removing are infallible from
/// the caller's perspective: a backend that cannot persist logs and
/// carries on (an environment without working storage is unsupported).
pub trait StorageBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Volatile in-process backend.
///
/// Used by tests and by embedders that do not want credentials to
/// survive a restart.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: DashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).map(|v| v.clone())
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.remove(key);
    }
}

/// The credential pair for one scope, backed by injected storage.
///
/// Admin and student stores may share one backend: their keys are
/// disjoint (see [`Scope`]), so the two sessions coexist without
/// observing each other.
#[derive(Clone)]
pub struct CredentialStore {
    scope: Scope,
    backend: Arc<dyn StorageBackend>,
}

impl CredentialStore {
    pub fn new(scope: Scope, backend: Arc<dyn StorageBackend>) -> Self {
        Self { scope, backend }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Overwrite both tokens. No shape validation happens here; the
    /// decoder deals with whatever the gateway handed back.
    pub fn save(&self, access_token: &str, refresh_token: &str) {
        self.backend.set_item(self.scope.access_token_key(), access_token);
        self.backend
            .set_item(self.scope.refresh_token_key(), refresh_token);
        tracing::debug!(scope = %self.scope, "Credential pair saved");
    }

    pub fn get_access_token(&self) -> Option<String> {
        self.backend.get_item(self.scope.access_token_key())
    }

    pub fn get_refresh_token(&self) -> Option<String> {
        self.backend.get_item(self.scope.refresh_token_key())
    }

    /// Remove both tokens. Idempotent: clearing an empty store is a no-op.
    pub fn clear(&self) {
        self.backend.remove_item(self.scope.access_token_key());
        self.backend.remove_item(self.scope.refresh_token_key());
        tracing::debug!(scope = %self.scope, "Credential pair cleared");
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
