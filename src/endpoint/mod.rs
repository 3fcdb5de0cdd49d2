//! Listener endpoints.
//!
//! An endpoint describes what to invoke when a message arrives. It does not
//! know how containers are assembled; it is handed a freshly configured
//! container and attaches its own listener logic to it.

mod simple;

pub use simple::SimpleListenerEndpoint;

use crate::container::ListenerContainer;

/// A source of message-handling logic that wires itself into a container.
pub trait ListenerEndpoint {
    /// Endpoint identity, for logging and registry keys.
    fn id(&self) -> &str;

    /// Attach this endpoint to the given container.
    ///
    /// Called by the container factory as the final wiring step. Failures
    /// are endpoint-specific and surface to the factory caller unchanged.
    fn setup_container(&self, container: &mut dyn ListenerContainer) -> anyhow::Result<()>;
}
