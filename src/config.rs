// SPDX-License-Identifier: MIT

//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Configuration for the gateway client and durable storage.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API gateway, e.g. `http://localhost:7070/api`.
    pub gateway_url: String,
    /// Path of the JSON file backing durable credential storage.
    pub storage_path: PathBuf,
}

impl Default for Config {
    /// Local-development defaults, also used by tests.
    fn default() -> Self {
        Self {
            gateway_url: "http://localhost:7070/api".to_string(),
            storage_path: PathBuf::from("scolarite-session.json"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// the local-development defaults. A `.env` file is honored if
    /// present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            gateway_url: env::var("SCOLARITE_GATEWAY_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gateway_url),
            storage_path: env::var("SCOLARITE_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_path),
        }
    }
}
