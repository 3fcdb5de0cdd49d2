//! In-memory destination resolver.
//!
//! Useful for testing and programmatic wiring.

use std::collections::HashMap;

use tracing::trace;

use super::{Destination, DestinationResolver, ResolveError};
use crate::config::DestinationType;

/// Map-backed destination resolver.
///
/// Logical names are registered up front; resolution is a table lookup with
/// a domain check.
#[derive(Debug, Default)]
pub struct StaticDestinationResolver {
    entries: HashMap<String, Destination>,
}

impl StaticDestinationResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a destination under its logical name.
    pub fn insert(&mut self, logical_name: impl Into<String>, destination: Destination) {
        self.entries.insert(logical_name.into(), destination);
    }

    /// Register a destination, builder-style.
    pub fn with(mut self, logical_name: impl Into<String>, destination: Destination) -> Self {
        self.insert(logical_name, destination);
        self
    }
}

impl DestinationResolver for StaticDestinationResolver {
    fn resolve(
        &self,
        name: &str,
        expected: DestinationType,
    ) -> Result<Destination, ResolveError> {
        let destination = self
            .entries
            .get(name)
            .ok_or_else(|| ResolveError::UnknownDestination(name.to_string()))?;

        if destination.destination_type() != expected {
            return Err(ResolveError::WrongType {
                name: name.to_string(),
                expected,
                actual: destination.destination_type(),
            });
        }

        trace!(logical = name, resolved = destination.name(), "destination resolved");

        Ok(destination.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
