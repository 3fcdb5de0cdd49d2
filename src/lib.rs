//! Assembly of resource-adapter-backed message endpoint containers.
//!
//! This crate is the configuration layer of a listener-container subsystem:
//! it wires optional collaborator references (resource adapter, activation-spec
//! factory, destination resolver, transaction manager, activation settings)
//! into endpoint containers that a larger container-management system then
//! starts and drives. Message consumption, redelivery and lifecycle belong to
//! that outer system, not to this crate.
//!
//! The central piece is [`ContainerFactory`]: built once from a
//! [`ContainerFactoryBuilder`], it produces any number of independently
//! configured containers, handing each one to a [`ListenerEndpoint`] for
//! final wiring.

pub mod activation;
pub mod adapter;
pub mod config;
pub mod container;
pub mod endpoint;
pub mod factory;
pub mod resolver;
pub mod transaction;

pub use activation::{
    ActivationError, ActivationSpec, ActivationSpecFactory, StandardActivationSpecFactory,
};
pub use adapter::ResourceAdapter;
pub use config::{AcknowledgeMode, ActivationSpecConfig, DestinationType};
pub use container::{ListenerContainer, Message, MessageEndpointManager, MessageListener};
pub use endpoint::{ListenerEndpoint, SimpleListenerEndpoint};
pub use factory::{
    ContainerFactory, ContainerFactoryBuilder, FactoryError, ListenerContainerFactory,
};
pub use resolver::{Destination, DestinationResolver, ResolveError, StaticDestinationResolver};
pub use transaction::{TransactionManager, XaCoordinator};
