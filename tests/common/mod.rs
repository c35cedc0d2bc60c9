// SPDX-License-Identifier: MIT

//! Shared helpers for the session scenario tests.

#![allow(dead_code)]

use std::sync::Mutex;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use scolarite_session::Navigator;

const TEST_SIGNING_KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

/// Route crate tracing through the test harness, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs the
/// subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Mint a real HS256-signed token over an arbitrary claim set.
///
/// The client never verifies signatures, but exercising the decoder
/// against properly signed tokens catches payload-encoding drift
/// between the gateway's issuer and the client's decoder.
pub fn mint_token(claims: &serde_json::Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(TEST_SIGNING_KEY),
    )
    .expect("failed to mint test token")
}

/// Token with the given role and an expiry offset from now, seconds.
pub fn role_token(role: &str, exp_offset: i64) -> String {
    mint_token(&serde_json::json!({
        "exp": chrono::Utc::now().timestamp() + exp_offset,
        "realm_access": { "roles": [role] },
        "name": "Awa Diop",
        "email": "awa.diop@uasz.sn",
    }))
}

/// Navigator that records redirects instead of performing them.
pub struct RecordingNavigator {
    current: String,
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            current: path.to_string(),
            redirects: Mutex::new(Vec::new()),
        }
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: &str) {
        self.redirects.lock().unwrap().push(route.to_string());
    }

    fn current_path(&self) -> String {
        self.current.clone()
    }
}
