//! Transaction strategy wiring.
//!
//! Containers run deliveries under one of two strategies. The value is wired
//! through the container layer uninterpreted; demarcation happens in the
//! runtime that starts the container, not here.

use std::fmt;
use std::sync::Arc;

/// Coordinator for externally managed, distributed transactions.
///
/// Only the identity surface is needed at wiring time; enlistment and
/// demarcation belong to the container runtime.
pub trait XaCoordinator: Send + Sync {
    /// Name the transactional resource is enlisted under.
    fn resource_name(&self) -> &str;
}

/// Transaction strategy a container runs deliveries under.
#[derive(Clone)]
pub enum TransactionManager {
    /// Provider-local transactions, demarcated per delivery.
    Local,
    /// Distributed transactions driven by an external coordinator.
    Xa(Arc<dyn XaCoordinator>),
}

impl TransactionManager {
    /// Coordinator resource name, if this is a distributed strategy.
    pub fn resource_name(&self) -> Option<&str> {
        match self {
            TransactionManager::Local => None,
            TransactionManager::Xa(coordinator) => Some(coordinator.resource_name()),
        }
    }
}

impl fmt::Debug for TransactionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionManager::Local => write!(f, "Local"),
            TransactionManager::Xa(coordinator) => {
                write!(f, "Xa({})", coordinator.resource_name())
            }
        }
    }
}
