// SPDX-License-Identifier: MIT

//! Route guards for the protected admin and student subtrees.

use crate::nav::Navigator;
use crate::scope::Scope;
use crate::session::Session;

/// Verdict for one navigation into a guarded subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// The subtree may render its children unchanged.
    Granted,
    /// Rendering was suppressed and the navigator sent to the login
    /// route. The original destination is not queued for later.
    Redirected,
}

/// Gate in front of one scope's protected subtree.
///
/// The router calls [`RouteGuard::check`] on every navigation into the
/// subtree, not once at startup, so a session that expired or was
/// cleared elsewhere is caught on the next route transition without a
/// page reload.
#[derive(Debug, Clone, Copy)]
pub struct RouteGuard {
    scope: Scope,
}

impl RouteGuard {
    pub fn new(scope: Scope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Decide whether the guarded subtree may render.
    ///
    /// Denial only redirects; it never touches the credential store.
    /// Clearing on an expired token is the failure interceptor's job,
    /// triggered by the gateway's 401.
    pub fn check(&self, session: &Session, navigator: &dyn Navigator) -> RouteAccess {
        if session.is_authenticated(self.scope.required_role()) {
            return RouteAccess::Granted;
        }

        tracing::info!(
            scope = %self.scope,
            from = %navigator.current_path(),
            "Unauthenticated navigation into guarded subtree; redirecting to login"
        );
        navigator.redirect(self.scope.login_route());
        RouteAccess::Redirected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CredentialStore, MemoryBackend};
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    struct StubNavigator {
        redirects: Mutex<Vec<String>>,
    }

    impl StubNavigator {
        fn new() -> Self {
            Self {
                redirects: Mutex::new(Vec::new()),
            }
        }

        fn redirects(&self) -> Vec<String> {
            self.redirects.lock().unwrap().clone()
        }
    }

    impl Navigator for StubNavigator {
        fn redirect(&self, route: &str) {
            self.redirects.lock().unwrap().push(route.to_string());
        }

        fn current_path(&self) -> String {
            "/admin".to_string()
        }
    }

    fn token(exp_offset: i64, role: &str) -> String {
        let payload = serde_json::json!({
            "exp": Utc::now().timestamp() + exp_offset,
            "realm_access": { "roles": [role] },
        });
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("eyJhbGciOiJSUzI1NiJ9.{body}.c2ln")
    }

    fn admin_session(stored_token: Option<&str>) -> (Session, CredentialStore) {
        let store = CredentialStore::new(Scope::Admin, Arc::new(MemoryBackend::new()));
        if let Some(t) = stored_token {
            store.save(t, "refresh");
        }
        (Session::new(store.clone()), store)
    }

    #[test]
    fn test_valid_session_is_granted() {
        let (session, _) = admin_session(Some(&token(3600, "ADMIN")));
        let nav = StubNavigator::new();

        let guard = RouteGuard::new(Scope::Admin);
        assert_eq!(guard.check(&session, &nav), RouteAccess::Granted);
        assert!(nav.redirects().is_empty());
    }

    #[test]
    fn test_missing_session_redirects_to_login() {
        let (session, _) = admin_session(None);
        let nav = StubNavigator::new();

        let guard = RouteGuard::new(Scope::Admin);
        assert_eq!(guard.check(&session, &nav), RouteAccess::Redirected);
        assert_eq!(nav.redirects(), vec!["/admin/login".to_string()]);
    }

    #[test]
    fn test_expired_session_redirects_without_clearing_store() {
        let expired = token(-10, "ADMIN");
        let (session, store) = admin_session(Some(&expired));
        let nav = StubNavigator::new();

        let guard = RouteGuard::new(Scope::Admin);
        assert_eq!(guard.check(&session, &nav), RouteAccess::Redirected);
        assert_eq!(nav.redirects(), vec!["/admin/login".to_string()]);
        // Only the failure interceptor clears credentials.
        assert!(store.get_access_token().is_some());
    }

    #[test]
    fn test_wrong_role_redirects() {
        // A valid student token at the admin guard is not authenticated.
        let (session, _) = admin_session(Some(&token(3600, "ETUDIANT")));
        let nav = StubNavigator::new();

        let guard = RouteGuard::new(Scope::Admin);
        assert_eq!(guard.check(&session, &nav), RouteAccess::Redirected);
    }

    #[test]
    fn test_guard_reevaluates_on_every_check() {
        let (session, store) = admin_session(Some(&token(3600, "ADMIN")));
        let nav = StubNavigator::new();
        let guard = RouteGuard::new(Scope::Admin);

        assert_eq!(guard.check(&session, &nav), RouteAccess::Granted);

        // Session cleared elsewhere: the next navigation is denied.
        store.clear();
        assert_eq!(guard.check(&session, &nav), RouteAccess::Redirected);
    }
}
