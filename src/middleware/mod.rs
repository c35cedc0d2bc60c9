// SPDX-License-Identifier: MIT

//! HTTP interceptors wrapped around every gateway call.
//!
//! Both hooks are synchronous and free of I/O beyond the credential
//! store: the HTTP client invokes them around its own asynchronous
//! request/response lifecycle.

pub mod authorize;
pub mod failure;

pub use authorize::on_request;
pub use failure::on_response;
