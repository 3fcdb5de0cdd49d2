//! Listener containers.
//!
//! A container owns one activated endpoint: the resource adapter delivers
//! messages into it and it dispatches them to the registered listener. This
//! crate only assembles containers; starting them and driving deliveries is
//! the outer runtime's job.

mod manager;

pub use manager::MessageEndpointManager;

use std::collections::HashMap;
use std::sync::Arc;

use crate::activation::ActivationSpecFactory;
use crate::adapter::ResourceAdapter;
use crate::config::ActivationSpecConfig;
use crate::resolver::DestinationResolver;
use crate::transaction::TransactionManager;

/// A message delivered to a listener.
#[derive(Debug, Clone, Default)]
pub struct Message {
    /// Destination the message arrived on
    pub destination: String,

    /// Raw payload
    pub body: Vec<u8>,

    /// Provider properties
    pub properties: HashMap<String, String>,
}

/// Handler invoked for each delivered message.
pub trait MessageListener: Send + Sync {
    /// Process one message. An error triggers the container's redelivery
    /// handling; it is not interpreted here.
    fn on_message(&self, message: &Message) -> anyhow::Result<()>;
}

/// Configuration surface of a listener container.
///
/// Factories and endpoints wire containers exclusively through this trait,
/// so specialized container types can be substituted for
/// [`MessageEndpointManager`]. Each setter targets its own field; setters
/// are independent and order-insensitive.
pub trait ListenerContainer {
    /// Wire in the resource adapter backing this container.
    fn set_resource_adapter(&mut self, adapter: Arc<dyn ResourceAdapter>);

    /// Replace the strategy translating settings into activation specs.
    fn set_activation_spec_factory(&mut self, factory: Arc<dyn ActivationSpecFactory>);

    /// Install a custom destination resolver.
    fn set_destination_resolver(&mut self, resolver: Arc<dyn DestinationResolver>);

    /// Select the transaction strategy deliveries run under.
    fn set_transaction_manager(&mut self, manager: TransactionManager);

    /// Install the activation settings.
    fn set_activation_spec_config(&mut self, config: ActivationSpecConfig);

    /// Register the listener deliveries are dispatched to.
    fn set_message_listener(&mut self, listener: Arc<dyn MessageListener>);

    /// Currently installed activation settings, if any.
    fn activation_spec_config(&self) -> Option<&ActivationSpecConfig>;
}
