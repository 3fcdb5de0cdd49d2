use serde::Deserialize;

/// Messaging domain a destination belongs to.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    /// Point-to-point: each message is consumed by one receiver.
    #[default]
    Queue,
    /// Publish-subscribe: each message is broadcast to all subscribers.
    Topic,
}

/// Acknowledgement mode requested from the resource adapter.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AcknowledgeMode {
    /// Acknowledge automatically on successful listener return.
    #[default]
    Auto,
    /// The listener acknowledges explicitly.
    Client,
    /// Lazy acknowledgement; duplicates possible after a crash.
    DupsOk,
    /// Delivery and acknowledgement run inside a transaction.
    Transacted,
}

/// Settings describing how a resource adapter should activate an endpoint.
///
/// This is a plain value object: it carries no references to live
/// collaborators and is cloned into every container it is applied to.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ActivationSpecConfig {
    /// Logical destination name to consume from
    #[serde(default)]
    pub destination: String,

    /// Queue or topic
    #[serde(default)]
    pub destination_type: DestinationType,

    /// Acknowledgement mode
    #[serde(default)]
    pub acknowledge_mode: AcknowledgeMode,

    /// Keep the subscription across disconnects (topics only)
    #[serde(default)]
    pub subscription_durable: bool,

    /// Name registered for a durable subscription
    #[serde(default)]
    pub subscription_name: Option<String>,

    /// Client identity presented to the provider
    #[serde(default)]
    pub client_id: Option<String>,

    /// Provider-side message selector expression
    #[serde(default)]
    pub message_selector: Option<String>,

    /// Maximum concurrent deliveries
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Messages fetched ahead per consumer
    #[serde(default = "default_prefetch")]
    pub prefetch: usize,
}

impl Default for ActivationSpecConfig {
    fn default() -> Self {
        Self {
            destination: String::new(),
            destination_type: DestinationType::default(),
            acknowledge_mode: AcknowledgeMode::default(),
            subscription_durable: false,
            subscription_name: None,
            client_id: None,
            message_selector: None,
            max_concurrency: default_max_concurrency(),
            prefetch: default_prefetch(),
        }
    }
}

impl ActivationSpecConfig {
    /// Create a config for the given destination, everything else defaulted.
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..Self::default()
        }
    }
}

fn default_max_concurrency() -> usize {
    1
}

fn default_prefetch() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ActivationSpecConfig::default();
        assert_eq!(config.destination_type, DestinationType::Queue);
        assert_eq!(config.acknowledge_mode, AcknowledgeMode::Auto);
        assert!(!config.subscription_durable);
        assert_eq!(config.max_concurrency, 1);
        assert_eq!(config.prefetch, 1);
    }

    #[test]
    fn test_new_sets_destination_only() {
        let config = ActivationSpecConfig::new("orders");
        assert_eq!(config.destination, "orders");
        assert_eq!(
            config,
            ActivationSpecConfig {
                destination: "orders".to_string(),
                ..ActivationSpecConfig::default()
            }
        );
    }

    #[test]
    fn test_acknowledge_mode_names() {
        let config: ActivationSpecConfig =
            serde_yaml::from_str("destination: x\nacknowledge_mode: dups_ok").unwrap();
        assert_eq!(config.acknowledge_mode, AcknowledgeMode::DupsOk);

        let config: ActivationSpecConfig =
            serde_yaml::from_str("destination: x\nacknowledge_mode: transacted").unwrap();
        assert_eq!(config.acknowledge_mode, AcknowledgeMode::Transacted);
    }
}
