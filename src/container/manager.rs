//! Default endpoint container.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::{ListenerContainer, MessageListener};
use crate::activation::{
    ActivationError, ActivationSpec, ActivationSpecFactory, StandardActivationSpecFactory,
};
use crate::adapter::ResourceAdapter;
use crate::config::ActivationSpecConfig;
use crate::resolver::DestinationResolver;
use crate::transaction::TransactionManager;

/// Resource-adapter-backed endpoint container.
///
/// Holds the collaborators a container factory wires in and can translate
/// its settings into the [`ActivationSpec`] the adapter activates. A fresh
/// instance has every field absent except the activation-spec factory, which
/// starts out as the standard one.
pub struct MessageEndpointManager {
    resource_adapter: Option<Arc<dyn ResourceAdapter>>,
    activation_spec_factory: Arc<dyn ActivationSpecFactory>,
    destination_resolver: Option<Arc<dyn DestinationResolver>>,
    transaction_manager: Option<TransactionManager>,
    activation_spec_config: Option<ActivationSpecConfig>,
    message_listener: Option<Arc<dyn MessageListener>>,
}

impl fmt::Debug for MessageEndpointManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageEndpointManager")
            .field("resource_adapter", &self.resource_adapter.is_some())
            .field("destination_resolver", &self.destination_resolver.is_some())
            .field("transaction_manager", &self.transaction_manager)
            .field("activation_spec_config", &self.activation_spec_config)
            .field("message_listener", &self.message_listener.is_some())
            .finish()
    }
}

impl Default for MessageEndpointManager {
    fn default() -> Self {
        Self {
            resource_adapter: None,
            activation_spec_factory: Arc::new(StandardActivationSpecFactory::new()),
            destination_resolver: None,
            transaction_manager: None,
            activation_spec_config: None,
            message_listener: None,
        }
    }
}

impl MessageEndpointManager {
    /// Create an unconfigured container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wired resource adapter.
    pub fn resource_adapter(&self) -> Option<&Arc<dyn ResourceAdapter>> {
        self.resource_adapter.as_ref()
    }

    /// Active activation-spec factory.
    pub fn activation_spec_factory(&self) -> &Arc<dyn ActivationSpecFactory> {
        &self.activation_spec_factory
    }

    /// Installed destination resolver.
    pub fn destination_resolver(&self) -> Option<&Arc<dyn DestinationResolver>> {
        self.destination_resolver.as_ref()
    }

    /// Selected transaction strategy.
    pub fn transaction_manager(&self) -> Option<&TransactionManager> {
        self.transaction_manager.as_ref()
    }

    /// Registered message listener.
    pub fn message_listener(&self) -> Option<&Arc<dyn MessageListener>> {
        self.message_listener.as_ref()
    }

    /// Translate the installed settings into the spec the adapter activates.
    ///
    /// Requires both a resource adapter and activation settings to be wired
    /// in already.
    pub fn activation_spec(&self) -> Result<ActivationSpec, ActivationError> {
        let adapter = self
            .resource_adapter
            .as_ref()
            .ok_or(ActivationError::NoResourceAdapter)?;
        let config = self
            .activation_spec_config
            .as_ref()
            .ok_or(ActivationError::NoConfig)?;

        self.activation_spec_factory
            .create_activation_spec(adapter.as_ref(), config)
    }
}

impl ListenerContainer for MessageEndpointManager {
    fn set_resource_adapter(&mut self, adapter: Arc<dyn ResourceAdapter>) {
        self.resource_adapter = Some(adapter);
    }

    fn set_activation_spec_factory(&mut self, factory: Arc<dyn ActivationSpecFactory>) {
        self.activation_spec_factory = factory;
    }

    /// Installing a resolver replaces the activation-spec factory with a
    /// standard one that resolves through it. This is why a custom factory
    /// and a custom resolver cannot be combined upstream.
    fn set_destination_resolver(&mut self, resolver: Arc<dyn DestinationResolver>) {
        debug!(resolver = resolver.name(), "installing destination resolver");
        self.activation_spec_factory = Arc::new(
            StandardActivationSpecFactory::new().with_destination_resolver(resolver.clone()),
        );
        self.destination_resolver = Some(resolver);
    }

    fn set_transaction_manager(&mut self, manager: TransactionManager) {
        self.transaction_manager = Some(manager);
    }

    fn set_activation_spec_config(&mut self, config: ActivationSpecConfig) {
        self.activation_spec_config = Some(config);
    }

    fn set_message_listener(&mut self, listener: Arc<dyn MessageListener>) {
        self.message_listener = Some(listener);
    }

    fn activation_spec_config(&self) -> Option<&ActivationSpecConfig> {
        self.activation_spec_config.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DestinationType;
    use crate::resolver::{Destination, StaticDestinationResolver};

    struct TestAdapter;

    impl ResourceAdapter for TestAdapter {
        fn provider(&self) -> &str {
            "test-mq"
        }
    }

    #[test]
    fn test_defaults() {
        let manager = MessageEndpointManager::new();
        assert!(manager.resource_adapter().is_none());
        assert!(manager.destination_resolver().is_none());
        assert!(manager.transaction_manager().is_none());
        assert!(manager.activation_spec_config().is_none());
        assert!(manager.message_listener().is_none());
    }

    #[test]
    fn test_activation_spec_requires_adapter() {
        let mut manager = MessageEndpointManager::new();
        manager.set_activation_spec_config(ActivationSpecConfig::new("orders"));

        let err = manager.activation_spec().unwrap_err();
        assert!(matches!(err, ActivationError::NoResourceAdapter));
    }

    #[test]
    fn test_activation_spec_requires_settings() {
        let mut manager = MessageEndpointManager::new();
        manager.set_resource_adapter(Arc::new(TestAdapter));

        let err = manager.activation_spec().unwrap_err();
        assert!(matches!(err, ActivationError::NoConfig));
    }

    #[test]
    fn test_activation_spec_via_default_factory() {
        let mut manager = MessageEndpointManager::new();
        manager.set_resource_adapter(Arc::new(TestAdapter));
        manager.set_activation_spec_config(ActivationSpecConfig::new("orders"));

        let spec = manager.activation_spec().unwrap();
        assert_eq!(spec.destination, Destination::queue("orders"));
    }

    #[test]
    fn test_resolver_takes_over_resolution() {
        let resolver = StaticDestinationResolver::new()
            .with("orders", Destination::queue("APP.ORDERS.IN"));

        let mut manager = MessageEndpointManager::new();
        manager.set_resource_adapter(Arc::new(TestAdapter));
        manager.set_destination_resolver(Arc::new(resolver));

        let mut config = ActivationSpecConfig::new("orders");
        config.destination_type = DestinationType::Queue;
        manager.set_activation_spec_config(config);

        let spec = manager.activation_spec().unwrap();
        assert_eq!(spec.destination.name(), "APP.ORDERS.IN");
    }
}
