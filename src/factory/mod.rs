//! Listener container factories.
//!
//! A [`ContainerFactory`] holds a bundle of optional collaborator references
//! and stamps them onto freshly created containers, one per
//! [`create_container`](ContainerFactory::create_container) call. The bundle
//! is immutable once built; configuration happens on
//! [`ContainerFactoryBuilder`], which also enforces the one invariant of this
//! layer: an activation-spec factory and a destination resolver are
//! alternative destination-resolution strategies and cannot be combined.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error};

use crate::activation::ActivationSpecFactory;
use crate::adapter::ResourceAdapter;
use crate::config::ActivationSpecConfig;
use crate::container::{ListenerContainer, MessageEndpointManager};
use crate::endpoint::ListenerEndpoint;
use crate::resolver::DestinationResolver;
use crate::transaction::TransactionManager;

/// Container factory error.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// Both destination-resolution strategies were configured at once.
    #[error(
        "set either an activation-spec factory or a destination resolver, not both; \
         a dedicated activation-spec factory can carry the custom resolver itself"
    )]
    ConflictingDestinationStrategies,

    /// The endpoint's own wiring step failed; passed through unchanged.
    #[error(transparent)]
    Endpoint(#[from] anyhow::Error),
}

/// Factory capability: produce a configured container for an endpoint.
pub trait ListenerContainerFactory {
    /// Container type this factory produces.
    type Container: ListenerContainer;

    /// Create a container wired for `endpoint`, ready to be started.
    fn create_container(
        &self,
        endpoint: &dyn ListenerEndpoint,
    ) -> Result<Self::Container, FactoryError>;
}

type Instantiator<C> = Box<dyn Fn() -> C + Send + Sync>;

/// Configuration for a [`ContainerFactory`].
///
/// Every field is optional and the calls are order-independent; only fields
/// that were set are later copied into produced containers.
pub struct ContainerFactoryBuilder<C = MessageEndpointManager> {
    resource_adapter: Option<Arc<dyn ResourceAdapter>>,
    activation_spec_factory: Option<Arc<dyn ActivationSpecFactory>>,
    destination_resolver: Option<Arc<dyn DestinationResolver>>,
    transaction_manager: Option<TransactionManager>,
    activation_spec_config: Option<ActivationSpecConfig>,
    instantiate: Option<Instantiator<C>>,
}

impl<C> Default for ContainerFactoryBuilder<C> {
    fn default() -> Self {
        Self {
            resource_adapter: None,
            activation_spec_factory: None,
            destination_resolver: None,
            transaction_manager: None,
            activation_spec_config: None,
            instantiate: None,
        }
    }
}

impl<C> ContainerFactoryBuilder<C> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource adapter to wire into produced containers.
    pub fn with_resource_adapter(mut self, adapter: Arc<dyn ResourceAdapter>) -> Self {
        self.resource_adapter = Some(adapter);
        self
    }

    /// Custom activation-spec factory to wire into produced containers.
    ///
    /// Mutually exclusive with [`Self::with_destination_resolver`]; a custom
    /// resolver belongs on the activation-spec factory itself.
    pub fn with_activation_spec_factory(mut self, factory: Arc<dyn ActivationSpecFactory>) -> Self {
        self.activation_spec_factory = Some(factory);
        self
    }

    /// Custom destination resolver to wire into produced containers.
    pub fn with_destination_resolver(mut self, resolver: Arc<dyn DestinationResolver>) -> Self {
        self.destination_resolver = Some(resolver);
        self
    }

    /// Transaction strategy to wire into produced containers, uninterpreted.
    pub fn with_transaction_manager(mut self, manager: TransactionManager) -> Self {
        self.transaction_manager = Some(manager);
        self
    }

    /// Activation settings to copy into produced containers.
    pub fn with_activation_spec_config(mut self, config: ActivationSpecConfig) -> Self {
        self.activation_spec_config = Some(config);
        self
    }

    /// Replace how empty container instances are created.
    ///
    /// Lets callers substitute a specialized container type or pre-seeded
    /// instances; the default is `C::default()`.
    pub fn with_instantiator<F>(mut self, instantiate: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
    {
        self.instantiate = Some(Box::new(instantiate));
        self
    }

    /// Currently configured activation settings.
    pub fn activation_spec_config(&self) -> Option<&ActivationSpecConfig> {
        self.activation_spec_config.as_ref()
    }

    /// Mutable access to the configured activation settings, for adjusting
    /// them after the initial `with_activation_spec_config` call.
    pub fn activation_spec_config_mut(&mut self) -> Option<&mut ActivationSpecConfig> {
        self.activation_spec_config.as_mut()
    }

    /// Validate the configuration and produce an immutable factory.
    ///
    /// Fails with [`FactoryError::ConflictingDestinationStrategies`] when both
    /// an activation-spec factory and a destination resolver were configured.
    /// This is a programmer error, surfaced at the earliest point both fields
    /// can coexist.
    pub fn build(self) -> Result<ContainerFactory<C>, FactoryError>
    where
        C: ListenerContainer + Default + 'static,
    {
        if self.activation_spec_factory.is_some() && self.destination_resolver.is_some() {
            error!("activation-spec factory and destination resolver both configured");
            return Err(FactoryError::ConflictingDestinationStrategies);
        }

        Ok(ContainerFactory {
            resource_adapter: self.resource_adapter,
            activation_spec_factory: self.activation_spec_factory,
            destination_resolver: self.destination_resolver,
            transaction_manager: self.transaction_manager,
            activation_spec_config: self.activation_spec_config,
            instantiate: self.instantiate.unwrap_or_else(|| Box::new(C::default)),
        })
    }
}

/// Immutable bundle of collaborator references that configures containers.
///
/// One factory produces any number of containers; it keeps no reference to
/// the instances it hands out. Strategy collaborators are shared into each
/// container by handle, settings by value.
pub struct ContainerFactory<C = MessageEndpointManager> {
    resource_adapter: Option<Arc<dyn ResourceAdapter>>,
    activation_spec_factory: Option<Arc<dyn ActivationSpecFactory>>,
    destination_resolver: Option<Arc<dyn DestinationResolver>>,
    transaction_manager: Option<TransactionManager>,
    activation_spec_config: Option<ActivationSpecConfig>,
    instantiate: Instantiator<C>,
}

impl<C> std::fmt::Debug for ContainerFactory<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerFactory")
            .field("resource_adapter", &self.resource_adapter.is_some())
            .field("activation_spec_factory", &self.activation_spec_factory.is_some())
            .field("destination_resolver", &self.destination_resolver.is_some())
            .field("transaction_manager", &self.transaction_manager)
            .field("activation_spec_config", &self.activation_spec_config)
            .finish_non_exhaustive()
    }
}

impl<C> ContainerFactory<C> {
    /// Start configuring a factory.
    pub fn builder() -> ContainerFactoryBuilder<C> {
        ContainerFactoryBuilder::new()
    }

    /// Activation settings this factory stamps onto containers.
    pub fn activation_spec_config(&self) -> Option<&ActivationSpecConfig> {
        self.activation_spec_config.as_ref()
    }
}

impl<C: ListenerContainer> ContainerFactory<C> {
    /// Create a container wired for `endpoint`.
    ///
    /// A fresh instance is created, each configured field is copied onto it
    /// (absent fields leave the container's own defaults untouched), and the
    /// endpoint performs its own wiring last. The container is returned
    /// unstarted.
    pub fn create_container(&self, endpoint: &dyn ListenerEndpoint) -> Result<C, FactoryError> {
        debug!(
            endpoint = %endpoint.id(),
            resource_adapter = self.resource_adapter.is_some(),
            activation_spec_factory = self.activation_spec_factory.is_some(),
            destination_resolver = self.destination_resolver.is_some(),
            transaction_manager = self.transaction_manager.is_some(),
            activation_spec_config = self.activation_spec_config.is_some(),
            "creating listener container"
        );

        let mut container = (self.instantiate)();

        if let Some(adapter) = &self.resource_adapter {
            container.set_resource_adapter(adapter.clone());
        }
        if let Some(factory) = &self.activation_spec_factory {
            container.set_activation_spec_factory(factory.clone());
        }
        if let Some(resolver) = &self.destination_resolver {
            container.set_destination_resolver(resolver.clone());
        }
        if let Some(manager) = &self.transaction_manager {
            container.set_transaction_manager(manager.clone());
        }
        if let Some(config) = &self.activation_spec_config {
            container.set_activation_spec_config(config.clone());
        }

        endpoint.setup_container(&mut container)?;

        Ok(container)
    }
}

impl<C: ListenerContainer> ListenerContainerFactory for ContainerFactory<C> {
    type Container = C;

    fn create_container(&self, endpoint: &dyn ListenerEndpoint) -> Result<C, FactoryError> {
        ContainerFactory::create_container(self, endpoint)
    }
}
