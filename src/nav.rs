// SPDX-License-Identifier: MIT

//! Navigation primitive supplied by the embedding shell.

/// Hard-redirect capability plus read access to the current route.
///
/// The shell (the router/window layer outside this crate) implements
/// this; the failure interceptor and route guards only ever call it, so
/// session teardown stays testable without a browser.
pub trait Navigator: Send + Sync {
    /// Perform a full navigation to `route`, abandoning the current view.
    fn redirect(&self, route: &str);

    /// The route currently being displayed.
    fn current_path(&self) -> String;
}
