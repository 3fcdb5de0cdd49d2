//! Activation specs and their factories.
//!
//! An [`ActivationSpec`] is the concrete record handed to a resource adapter
//! when an endpoint is activated: a resolved destination plus delivery
//! settings. An [`ActivationSpecFactory`] is the strategy that translates an
//! [`ActivationSpecConfig`] into such a record for a particular adapter.

mod standard;

pub use standard::StandardActivationSpecFactory;

use thiserror::Error;

use crate::adapter::ResourceAdapter;
use crate::config::{AcknowledgeMode, ActivationSpecConfig};
use crate::resolver::{Destination, ResolveError};

/// Activation spec production error.
#[derive(Debug, Error)]
pub enum ActivationError {
    /// The settings carry no destination to consume from.
    #[error("no destination configured in activation settings")]
    MissingDestination,

    /// A custom resolver could not map the logical destination name.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The adapter rejected the spec as outside its capabilities.
    #[error("provider '{provider}' does not support the activation spec for '{destination}'")]
    Unsupported {
        provider: String,
        destination: String,
    },

    /// No resource adapter is wired into the container.
    #[error("no resource adapter configured")]
    NoResourceAdapter,

    /// No activation settings are wired into the container.
    #[error("no activation settings configured")]
    NoConfig,
}

/// Concrete activation record handed to a resource adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationSpec {
    /// Resolved destination to consume from
    pub destination: Destination,

    /// Acknowledgement mode
    pub acknowledge_mode: AcknowledgeMode,

    /// Provider-side message selector
    pub message_selector: Option<String>,

    /// Durable subscription flag (topics only)
    pub subscription_durable: bool,

    /// Durable subscription name
    pub subscription_name: Option<String>,

    /// Client identity presented to the provider
    pub client_id: Option<String>,

    /// Maximum concurrent deliveries
    pub max_concurrency: usize,

    /// Messages fetched ahead per consumer
    pub prefetch: usize,
}

/// Strategy translating activation settings into a spec for an adapter.
///
/// Implementations decide how the logical destination name in the settings
/// becomes a concrete [`Destination`]; everything else is carried over.
pub trait ActivationSpecFactory: Send + Sync {
    /// Produce the activation spec for `adapter` from `config`.
    fn create_activation_spec(
        &self,
        adapter: &dyn ResourceAdapter,
        config: &ActivationSpecConfig,
    ) -> Result<ActivationSpec, ActivationError>;
}
