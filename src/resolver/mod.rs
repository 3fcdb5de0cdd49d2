//! Destination resolution.
//!
//! A [`DestinationResolver`] maps a logical destination name to a concrete
//! [`Destination`]. It is one of two alternative strategies for turning
//! activation settings into something a resource adapter can consume from;
//! the other is a full [`ActivationSpecFactory`](crate::ActivationSpecFactory),
//! which may itself carry a resolver.

mod memory;

pub use memory::StaticDestinationResolver;

use thiserror::Error;

use crate::config::DestinationType;

/// Destination resolution error.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No destination is registered under the requested name.
    #[error("unknown destination '{0}'")]
    UnknownDestination(String),

    /// The name resolved to a destination of the wrong domain.
    #[error("destination '{name}' is a {actual:?}, expected a {expected:?}")]
    WrongType {
        name: String,
        expected: DestinationType,
        actual: DestinationType,
    },
}

/// A concrete, resolved messaging destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    name: String,
    destination_type: DestinationType,
}

impl Destination {
    /// A point-to-point queue.
    pub fn queue(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            destination_type: DestinationType::Queue,
        }
    }

    /// A publish-subscribe topic.
    pub fn topic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            destination_type: DestinationType::Topic,
        }
    }

    /// Provider-side destination name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Queue or topic.
    pub fn destination_type(&self) -> DestinationType {
        self.destination_type
    }
}

/// Strategy mapping logical destination names to concrete destinations.
///
/// Implement this to plug in directory-backed lookup (JNDI-style registries,
/// provider admin APIs, static tables).
pub trait DestinationResolver: Send + Sync {
    /// Resolve `name` to a destination of the expected domain.
    fn resolve(
        &self,
        name: &str,
        expected: DestinationType,
    ) -> Result<Destination, ResolveError>;

    /// Get the resolver name for logging.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_constructors() {
        let queue = Destination::queue("orders");
        assert_eq!(queue.name(), "orders");
        assert_eq!(queue.destination_type(), DestinationType::Queue);

        let topic = Destination::topic("price-updates");
        assert_eq!(topic.destination_type(), DestinationType::Topic);
    }

    #[test]
    fn test_resolve_error_display() {
        let err = ResolveError::UnknownDestination("orders".to_string());
        assert!(err.to_string().contains("orders"));

        let err = ResolveError::WrongType {
            name: "orders".to_string(),
            expected: DestinationType::Topic,
            actual: DestinationType::Queue,
        };
        assert!(err.to_string().contains("expected a Topic"));
    }
}
