//! Programmatically assembled endpoint.

use std::sync::Arc;

use tracing::debug;

use super::ListenerEndpoint;
use crate::config::DestinationType;
use crate::container::{ListenerContainer, MessageListener};

/// Endpoint built in code from a destination and a listener.
///
/// Wiring overlays the endpoint's destination settings onto whatever
/// activation settings the container already carries, so factory-level
/// defaults (acknowledge mode, prefetch) survive.
pub struct SimpleListenerEndpoint {
    id: String,
    destination: String,
    destination_type: DestinationType,
    message_selector: Option<String>,
    max_concurrency: Option<usize>,
    listener: Arc<dyn MessageListener>,
}

impl SimpleListenerEndpoint {
    /// Create an endpoint consuming `destination` with `listener`.
    pub fn new(
        id: impl Into<String>,
        destination: impl Into<String>,
        listener: Arc<dyn MessageListener>,
    ) -> Self {
        Self {
            id: id.into(),
            destination: destination.into(),
            destination_type: DestinationType::default(),
            message_selector: None,
            max_concurrency: None,
            listener,
        }
    }

    /// Consume from a topic instead of a queue.
    pub fn with_destination_type(mut self, destination_type: DestinationType) -> Self {
        self.destination_type = destination_type;
        self
    }

    /// Filter deliveries with a provider-side selector.
    pub fn with_message_selector(mut self, selector: impl Into<String>) -> Self {
        self.message_selector = Some(selector.into());
        self
    }

    /// Override the container's delivery concurrency.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = Some(max_concurrency);
        self
    }
}

impl ListenerEndpoint for SimpleListenerEndpoint {
    fn id(&self) -> &str {
        &self.id
    }

    fn setup_container(&self, container: &mut dyn ListenerContainer) -> anyhow::Result<()> {
        if self.destination.trim().is_empty() {
            anyhow::bail!("endpoint '{}' has no destination", self.id);
        }

        let mut config = container
            .activation_spec_config()
            .cloned()
            .unwrap_or_default();
        config.destination = self.destination.clone();
        config.destination_type = self.destination_type;
        if let Some(selector) = &self.message_selector {
            config.message_selector = Some(selector.clone());
        }
        if let Some(max_concurrency) = self.max_concurrency {
            config.max_concurrency = max_concurrency;
        }

        debug!(
            endpoint = %self.id,
            destination = %self.destination,
            "attaching endpoint to container"
        );

        container.set_activation_spec_config(config);
        container.set_message_listener(self.listener.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AcknowledgeMode, ActivationSpecConfig};
    use crate::container::{Message, MessageEndpointManager};

    struct NoopListener;

    impl MessageListener for NoopListener {
        fn on_message(&self, _message: &Message) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_setup_installs_listener_and_settings() {
        let endpoint = SimpleListenerEndpoint::new("orders-worker", "orders", Arc::new(NoopListener))
            .with_message_selector("region = 'EMEA'")
            .with_max_concurrency(4);

        let mut container = MessageEndpointManager::new();
        endpoint.setup_container(&mut container).unwrap();

        let config = container.activation_spec_config().unwrap();
        assert_eq!(config.destination, "orders");
        assert_eq!(config.message_selector.as_deref(), Some("region = 'EMEA'"));
        assert_eq!(config.max_concurrency, 4);
        assert!(container.message_listener().is_some());
    }

    #[test]
    fn test_setup_preserves_existing_settings() {
        let endpoint = SimpleListenerEndpoint::new("orders-worker", "orders", Arc::new(NoopListener));

        let mut container = MessageEndpointManager::new();
        let mut existing = ActivationSpecConfig::new("placeholder");
        existing.acknowledge_mode = AcknowledgeMode::Client;
        existing.prefetch = 16;
        container.set_activation_spec_config(existing);

        endpoint.setup_container(&mut container).unwrap();

        let config = container.activation_spec_config().unwrap();
        assert_eq!(config.destination, "orders");
        assert_eq!(config.acknowledge_mode, AcknowledgeMode::Client);
        assert_eq!(config.prefetch, 16);
    }

    #[test]
    fn test_setup_rejects_empty_destination() {
        let endpoint = SimpleListenerEndpoint::new("broken", "", Arc::new(NoopListener));

        let mut container = MessageEndpointManager::new();
        let err = endpoint.setup_container(&mut container).unwrap_err();
        assert!(err.to_string().contains("no destination"));
    }
}
