//! Item catalog: the set of item ids a host is able to instantiate.
//!
//! Names are optional metadata for previews and logs. The generators only
//! care whether an id can be turned into an [`Item`](crate::Item).

use hashbrown::HashMap;
use thiserror::Error;

use crate::tile::ItemId;

/// Errors raised while registering catalog entries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The id is already registered.
    #[error("item id {0} is already registered")]
    DuplicateId(ItemId),
}

/// Maps item ids to human-readable names.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    names: HashMap<ItemId, String>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` under `name`.
    pub fn register(&mut self, id: ItemId, name: impl Into<String>) -> Result<(), CatalogError> {
        if self.names.contains_key(&id) {
            return Err(CatalogError::DuplicateId(id));
        }
        self.names.insert(id, name.into());
        Ok(())
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.names.contains_key(&id)
    }

    pub fn name(&self, id: ItemId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = ItemCatalog::new();
        catalog.register(ItemId(4608), "water").unwrap();
        catalog.register(ItemId(4526), "grass").unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(ItemId(4608)));
        assert_eq!(catalog.name(ItemId(4526)), Some("grass"));
        assert_eq!(catalog.name(ItemId(1)), None);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = ItemCatalog::new();
        catalog.register(ItemId(406), "stone floor").unwrap();
        let err = catalog.register(ItemId(406), "other").unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(ItemId(406)));
        assert_eq!(catalog.name(ItemId(406)), Some("stone floor"));
    }
}
