// SPDX-License-Identifier: MIT

//! Scolarite-Session: session and credential core for the school portal.
//!
//! This crate owns the bearer-token lifecycle of the admin and student
//! portals: persisting the credential pair returned by the gateway's login
//! endpoint, decoding the access token's claims, deriving session facts
//! (authenticated, expired, role membership), stamping outgoing requests,
//! tearing the session down on a 401, and gating protected route subtrees.
//!
//! Rendering, CRUD resource schemas, and the router live outside this
//! crate; they consume the surface re-exported below.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod middleware;
pub mod nav;
pub mod scope;
pub mod session;
pub mod store;
pub mod token;

pub use api::ApiClient;
pub use config::Config;
pub use error::ApiError;
pub use guard::{RouteAccess, RouteGuard};
pub use nav::Navigator;
pub use scope::Scope;
pub use session::Session;
pub use store::{CredentialStore, FileBackend, MemoryBackend, StorageBackend};
pub use token::Claims;
