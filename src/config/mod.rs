mod loader;
mod types;

pub use types::{AcknowledgeMode, ActivationSpecConfig, DestinationType};
