//! Savepoint bookkeeping for a single connection.
//!
//! The registry is owned by whatever owns the connection and follows the same
//! single-writer discipline; it holds driver savepoint handles by name.

use std::collections::HashMap;

use tracing::debug;

use crate::error::MssqlAdapterError;

/// Tracks driver savepoint handles by name for one connection.
///
/// `S` is the driver's savepoint handle type; this layer never inspects it.
#[derive(Debug)]
pub struct SavepointRegistry<S> {
    savepoints: HashMap<String, S>,
}

impl<S> SavepointRegistry<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            savepoints: HashMap::new(),
        }
    }

    /// Record a savepoint created on the driver. Re-using a name replaces the
    /// previous handle, matching server behavior where `SAVE TRANSACTION`
    /// with an existing name moves the savepoint.
    pub fn register(&mut self, name: impl Into<String>, handle: S) {
        self.savepoints.insert(name.into(), handle);
    }

    /// Take the handle for a rollback-to-savepoint, removing it.
    ///
    /// # Errors
    ///
    /// Fails with [`MssqlAdapterError::SavepointNotSet`] when the name was
    /// never registered or was already released.
    pub fn take(&mut self, name: &str) -> Result<S, MssqlAdapterError> {
        self.savepoints
            .remove(name)
            .ok_or_else(|| MssqlAdapterError::SavepointNotSet {
                name: name.to_string(),
                action: "rollback",
            })
    }

    /// Release a savepoint.
    ///
    /// Only the bookkeeping entry is removed; no driver call is made because
    /// the Microsoft SQL Server driver does not implement savepoint release.
    /// The operation still reports success — a deliberate compatibility shim,
    /// not a swallowed failure.
    ///
    /// # Errors
    ///
    /// Fails with [`MssqlAdapterError::SavepointNotSet`] when the name was
    /// never registered or was already released.
    pub fn release(&mut self, name: &str) -> Result<(), MssqlAdapterError> {
        match self.savepoints.remove(name) {
            Some(_) => {
                debug!(savepoint = name, "released savepoint (bookkeeping only)");
                Ok(())
            }
            None => Err(MssqlAdapterError::SavepointNotSet {
                name: name.to_string(),
                action: "release",
            }),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.savepoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.savepoints.is_empty()
    }

    /// Drop all entries, e.g. when the surrounding transaction ends.
    pub fn clear(&mut self) {
        self.savepoints.clear();
    }
}

impl<S> Default for SavepointRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_succeeds_once_then_fails() {
        let mut registry = SavepointRegistry::new();
        registry.register("active_record_1", 7u32);

        assert!(registry.release("active_record_1").is_ok());
        let err = registry.release("active_record_1").unwrap_err();
        match err {
            MssqlAdapterError::SavepointNotSet { name, action } => {
                assert_eq!(name, "active_record_1");
                assert_eq!(action, "release");
            }
            other => panic!("expected SavepointNotSet, got {other:?}"),
        }
    }

    #[test]
    fn take_returns_the_registered_handle() {
        let mut registry = SavepointRegistry::new();
        registry.register("sp1", "handle");

        assert_eq!(registry.take("sp1").unwrap(), "handle");
        assert!(registry.take("sp1").is_err());
    }

    #[test]
    fn reregistering_replaces_the_handle() {
        let mut registry = SavepointRegistry::new();
        registry.register("sp1", 1);
        registry.register("sp1", 2);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.take("sp1").unwrap(), 2);
    }
}
