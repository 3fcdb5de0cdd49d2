//! Resource adapter capability.
//!
//! A resource adapter is the bridge to a concrete messaging provider: given
//! an activation spec it opens consumers and pushes deliveries into the
//! endpoint's listener. Concrete adapters live outside this crate; here only
//! the capability surface the container layer relies on is defined.

use crate::activation::ActivationSpec;

/// Bridge to a messaging provider.
pub trait ResourceAdapter: Send + Sync {
    /// Provider identity, for logging and diagnostics.
    fn provider(&self) -> &str;

    /// Whether this adapter can activate the given spec.
    ///
    /// Adapters that cannot honor part of a spec (durable subscriptions,
    /// selectors) reject it here instead of failing at activation time.
    fn supports(&self, _spec: &ActivationSpec) -> bool {
        true
    }
}
