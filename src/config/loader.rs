use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::types::{ActivationSpecConfig, DestinationType};

impl ActivationSpecConfig {
    /// Load activation settings from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        debug!(path = %path.display(), "loading activation settings");

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read activation settings: {}", path.display()))?;

        Self::from_yaml(&contents)
            .with_context(|| format!("failed to parse activation settings: {}", path.display()))
    }

    /// Parse activation settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ActivationSpecConfig =
            serde_yaml::from_str(yaml).context("failed to parse YAML activation settings")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate activation settings
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            anyhow::bail!("destination must not be empty");
        }

        if self.subscription_durable {
            if self.destination_type != DestinationType::Topic {
                anyhow::bail!(
                    "durable subscription on '{}' requires a topic destination",
                    self.destination
                );
            }
            if self.subscription_name.is_none() {
                anyhow::bail!(
                    "durable subscription on '{}' requires a subscription name",
                    self.destination
                );
            }
        }

        if self.max_concurrency == 0 {
            anyhow::bail!("max_concurrency must be at least 1");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::AcknowledgeMode;
    use super::*;

    #[test]
    fn test_minimal_settings() {
        let yaml = r#"
destination: orders
"#;

        let config = ActivationSpecConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.destination, "orders");
        assert_eq!(config.destination_type, DestinationType::Queue);
        assert_eq!(config.max_concurrency, 1);
    }

    #[test]
    fn test_full_settings() {
        let yaml = r#"
destination: price-updates
destination_type: topic
acknowledge_mode: client
subscription_durable: true
subscription_name: pricing-worker
client_id: pricing-1
message_selector: "region = 'EMEA'"
max_concurrency: 8
prefetch: 32
"#;

        let config = ActivationSpecConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.destination_type, DestinationType::Topic);
        assert_eq!(config.acknowledge_mode, AcknowledgeMode::Client);
        assert!(config.subscription_durable);
        assert_eq!(config.subscription_name.as_deref(), Some("pricing-worker"));
        assert_eq!(config.max_concurrency, 8);
        assert_eq!(config.prefetch, 32);
    }

    #[test]
    fn test_empty_destination() {
        let result = ActivationSpecConfig::from_yaml("destination: \"\"");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must not be empty"));
    }

    #[test]
    fn test_durable_requires_topic() {
        let yaml = r#"
destination: orders
subscription_durable: true
subscription_name: worker
"#;

        let result = ActivationSpecConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("requires a topic"));
    }

    #[test]
    fn test_durable_requires_subscription_name() {
        let yaml = r#"
destination: price-updates
destination_type: topic
subscription_durable: true
"#;

        let result = ActivationSpecConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("requires a subscription name")
        );
    }

    #[test]
    fn test_zero_concurrency() {
        let yaml = r#"
destination: orders
max_concurrency: 0
"#;

        let result = ActivationSpecConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("at least 1"));
    }
}
