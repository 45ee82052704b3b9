//! Base registry shared by the tool and agent registries.

use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::RegistryError;

/// Trait for items that can be stored in a registry.
pub trait Registerable: Send + Sync {
    /// Returns the unique identifier for this item.
    fn registry_id(&self) -> &str;
}

/// Generic registry keyed by ID.
///
/// Lookups go through a `DashMap`; a separate ID list keeps registration
/// order so that tool lists sent to a model and help listings are stable.
pub struct BaseRegistry<T: ?Sized + Registerable> {
    items: DashMap<String, Arc<T>>,
    order: RwLock<Vec<String>>,
}

impl<T: ?Sized + Registerable> BaseRegistry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            order: RwLock::new(Vec::new()),
        }
    }

    /// Register an item. Fails if the ID is taken.
    pub fn register(&self, item: Arc<T>) -> Result<(), RegistryError> {
        let id = item.registry_id().to_string();
        let mut order = self.order.write();
        if self.items.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }
        self.items.insert(id.clone(), item);
        order.push(id);
        Ok(())
    }

    /// Unregister an item by ID.
    pub fn unregister(&self, id: &str) -> Result<(), RegistryError> {
        let mut order = self.order.write();
        self.items
            .remove(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        order.retain(|existing| existing != id);
        Ok(())
    }

    /// Get an item by ID.
    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.items.get(id).map(|item| item.clone())
    }

    /// Check if an item with the given ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Registered IDs in registration order.
    pub fn list_ids(&self) -> Vec<String> {
        self.order.read().clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in registration order.
    pub fn ordered(&self) -> Vec<Arc<T>> {
        self.order
            .read()
            .iter()
            .filter_map(|id| self.get(id))
            .collect()
    }
}

impl<T: ?Sized + Registerable> Default for BaseRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "base_tests.rs"]
mod tests;
