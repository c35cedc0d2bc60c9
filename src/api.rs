// SPDX-License-Identifier: MIT

//! Gateway API client.
//!
//! One `ApiClient` per scope wires the two interceptors around every
//! call: the request hook stamps the bearer credential, the response
//! hook tears the session down on a 401. The CRUD services own their
//! request and response bodies; this client only moves authorized
//! traffic.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::middleware;
use crate::nav::Navigator;
use crate::store::CredentialStore;

/// Token pair returned by the gateway's login endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LogoutRequest<'a> {
    refresh_token: &'a str,
}

/// HTTP client for one scope's gateway traffic.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: CredentialStore,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(config: &Config, store: CredentialStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.gateway_url.clone(),
            store,
            navigator,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange credentials for a token pair and persist it.
    ///
    /// On success the scope's previous pair, if any, is overwritten.
    /// A 401 (bad credentials) flows through the failure interceptor
    /// like any other call and surfaces as `SessionExpired`.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let response = self
            .execute(
                self.http
                    .post(self.url("/auth/login"))
                    .json(&LoginRequest { username, password }),
            )
            .await?;

        let tokens: LoginResponse = response.json().await?;
        self.store.save(&tokens.access_token, &tokens.refresh_token);
        tracing::info!(scope = %self.store.scope(), "Login succeeded; session established");
        Ok(())
    }

    /// Invalidate the session server-side, then clear it locally.
    ///
    /// The local pair is cleared even when the gateway call fails:
    /// logout must never leave credentials behind on this device.
    pub async fn logout(&self) -> Result<()> {
        let result = match self.store.get_refresh_token() {
            Some(refresh) => self
                .execute(
                    self.http.post(self.url("/auth/logout")).json(&LogoutRequest {
                        refresh_token: &refresh,
                    }),
                )
                .await
                .map(|_| ()),
            None => Ok(()),
        };

        self.store.clear();
        tracing::info!(scope = %self.store.scope(), "Session cleared");
        result
    }

    /// Authorized GET, for the CRUD services' reads.
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        self.execute(self.http.get(self.url(path))).await
    }

    /// Authorized POST with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    /// Authorized PUT with a JSON body.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    /// Authorized DELETE.
    pub async fn delete(&self, path: &str) -> Result<reqwest::Response> {
        self.execute(self.http.delete(self.url(path))).await
    }

    /// Run one request through both interceptors.
    ///
    /// Non-2xx statuses other than 401 come back as `Gateway` errors
    /// with the session intact; the 403 case in particular must reach
    /// the caller rather than force a logout.
    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let mut request = builder.build()?;
        middleware::on_request(&self.store, &mut request);

        let response = self.http.execute(request).await?;
        let response = middleware::on_response(&self.store, self.navigator.as_ref(), response)?;

        if !response.status().is_success() {
            return Err(ApiError::Gateway {
                status: response.status(),
            });
        }
        Ok(response)
    }
}
