use std::sync::RwLock;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::domain::item::{ClothingItem, NewClothingItem};
use crate::domain::types::{ItemId, TypeConstraintError};
use crate::models::item::StoredItem;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::storage::KeyValueStore;

pub mod errors;
pub mod storage;

/// Current time at millisecond precision, matching the persisted
/// representation so a collection compares equal after a reload.
pub(crate) fn created_now() -> NaiveDateTime {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis())
        .map(|dt| dt.naive_utc())
        .unwrap_or_else(|| now.naive_utc())
}

/// Read-only operations over the wardrobe collection.
pub trait WardrobeReader {
    /// The current collection, insertion order preserved.
    fn list_items(&self) -> RepositoryResult<Vec<ClothingItem>>;
}

/// Write operations over the wardrobe collection.
pub trait WardrobeWriter {
    /// Attaches a fresh id and creation timestamp to the supplied attributes
    /// and appends the resulting item to the collection.
    fn add_item(&self, new_item: NewClothingItem) -> RepositoryResult<ClothingItem>;
    /// Removes the item with the given id. Returns the number of removed
    /// items; removing an unknown id is a no-op, not an error.
    fn remove_item(&self, id: &ItemId) -> RepositoryResult<usize>;
}

/// Canonical owner of the in-memory wardrobe collection, kept synchronized
/// with a [`KeyValueStore`] collaborator.
///
/// The persisted document is loaded exactly once, inside [`Self::open`],
/// before the repository is shared — a mutation can never race the initial
/// load and clobber previously persisted data. Every mutation rewrites the
/// full document under the same write lock that guards the collection, so
/// later writes cannot be overtaken by earlier ones.
pub struct WardrobeRepository {
    storage: Box<dyn KeyValueStore>,
    key: String,
    items: RwLock<Vec<ClothingItem>>,
}

impl WardrobeRepository {
    /// Opens the wardrobe stored under `key`.
    ///
    /// A missing document starts an empty wardrobe. A document that fails to
    /// read or parse also starts an empty wardrobe, with the failure logged
    /// rather than surfaced: persistence is best-effort caching, not a
    /// transaction log.
    pub fn open(storage: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = match Self::load(&storage, &key) {
            Ok(items) => items,
            Err(e) => {
                log::error!("Failed to load wardrobe '{key}': {e}; starting empty");
                Vec::new()
            }
        };

        Self {
            storage: Box::new(storage),
            key,
            items: RwLock::new(items),
        }
    }

    fn load(storage: &dyn KeyValueStore, key: &str) -> RepositoryResult<Vec<ClothingItem>> {
        let Some(document) = storage.read(key)? else {
            return Ok(Vec::new());
        };
        let stored: Vec<StoredItem> = serde_json::from_str(&document)?;
        stored
            .into_iter()
            .map(ClothingItem::try_from)
            .collect::<Result<Vec<_>, TypeConstraintError>>()
            .map_err(|e| RepositoryError::Validation(e.to_string()))
    }

    /// Fire-and-forget write of the full collection. Failures are logged and
    /// do not roll back the in-memory mutation.
    fn persist(&self, items: &[ClothingItem]) {
        let stored: Vec<StoredItem> = items.iter().map(StoredItem::from).collect();
        let result = serde_json::to_string(&stored)
            .map_err(RepositoryError::from)
            .and_then(|document| self.storage.write(&self.key, &document));
        if let Err(e) = result {
            log::error!("Failed to persist wardrobe '{}': {e}", self.key);
        }
    }
}

impl WardrobeReader for WardrobeRepository {
    fn list_items(&self) -> RepositoryResult<Vec<ClothingItem>> {
        let items = self.items.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(items.clone())
    }
}

impl WardrobeWriter for WardrobeRepository {
    fn add_item(&self, new_item: NewClothingItem) -> RepositoryResult<ClothingItem> {
        let item = ClothingItem {
            id: ItemId::generate(),
            image: new_item.image,
            category: new_item.category,
            color: new_item.color,
            style: new_item.style,
            created_at: created_now(),
        };

        let mut items = self.items.write().map_err(|_| RepositoryError::Poisoned)?;
        items.push(item.clone());
        self.persist(&items);
        Ok(item)
    }

    fn remove_item(&self, id: &ItemId) -> RepositoryResult<usize> {
        let mut items = self.items.write().map_err(|_| RepositoryError::Poisoned)?;
        let before = items.len();
        items.retain(|item| &item.id != id);
        let removed = before - items.len();
        if removed > 0 {
            self.persist(&items);
        }
        Ok(removed)
    }
}
