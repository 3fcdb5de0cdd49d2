//! Stock activation-spec translation.

use std::sync::Arc;

use tracing::debug;

use super::{ActivationError, ActivationSpec, ActivationSpecFactory};
use crate::adapter::ResourceAdapter;
use crate::config::{ActivationSpecConfig, DestinationType};
use crate::resolver::{Destination, DestinationResolver};

/// Standard [`ActivationSpecFactory`].
///
/// Carries over every delivery setting unchanged. The logical destination
/// name is resolved through the configured [`DestinationResolver`] when one
/// is present; otherwise it maps 1:1 onto a destination of the configured
/// domain. A custom resolver belongs here, not next to a custom spec factory
/// on the container factory.
#[derive(Default)]
pub struct StandardActivationSpecFactory {
    destination_resolver: Option<Arc<dyn DestinationResolver>>,
}

impl StandardActivationSpecFactory {
    /// Create a factory that maps logical names 1:1 onto destinations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve logical names through `resolver` instead of mapping 1:1.
    pub fn with_destination_resolver(mut self, resolver: Arc<dyn DestinationResolver>) -> Self {
        self.destination_resolver = Some(resolver);
        self
    }

    fn resolve_destination(
        &self,
        config: &ActivationSpecConfig,
    ) -> Result<Destination, ActivationError> {
        if config.destination.is_empty() {
            return Err(ActivationError::MissingDestination);
        }

        match &self.destination_resolver {
            Some(resolver) => {
                let destination =
                    resolver.resolve(&config.destination, config.destination_type)?;
                debug!(
                    resolver = resolver.name(),
                    logical = %config.destination,
                    resolved = destination.name(),
                    "destination resolved"
                );
                Ok(destination)
            }
            None => Ok(match config.destination_type {
                DestinationType::Queue => Destination::queue(config.destination.clone()),
                DestinationType::Topic => Destination::topic(config.destination.clone()),
            }),
        }
    }
}

impl ActivationSpecFactory for StandardActivationSpecFactory {
    fn create_activation_spec(
        &self,
        adapter: &dyn ResourceAdapter,
        config: &ActivationSpecConfig,
    ) -> Result<ActivationSpec, ActivationError> {
        let destination = self.resolve_destination(config)?;

        let spec = ActivationSpec {
            destination,
            acknowledge_mode: config.acknowledge_mode,
            message_selector: config.message_selector.clone(),
            subscription_durable: config.subscription_durable,
            subscription_name: config.subscription_name.clone(),
            client_id: config.client_id.clone(),
            max_concurrency: config.max_concurrency,
            prefetch: config.prefetch,
        };

        if !adapter.supports(&spec) {
            return Err(ActivationError::Unsupported {
                provider: adapter.provider().to_string(),
                destination: spec.destination.name().to_string(),
            });
        }

        Ok(spec)
    }
}
