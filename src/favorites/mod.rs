//! Persisted favourites.
//!
//! The store keeps the set of favourite recipe ids in memory and writes the
//! whole set to a [`Storage`] backend after every change, as a JSON array of
//! integers under a fixed key. Favourite status is always read from the
//! store, so every view of a recipe agrees on it.

use crate::model::RecipeId;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

/// Storage key the favourites are persisted under.
pub const DEFAULT_FAVORITES_KEY: &str = "favorites";

#[derive(Error, Debug)]
pub enum FavoritesError {
    #[error("Failed to persist favorites: {0}")]
    StorageError(#[from] StorageError),

    #[error("Failed to encode favorites: {0}")]
    EncodeError(#[from] serde_json::Error),
}

/// The set of favourite recipe ids, persisted on every change.
pub struct FavoritesStore {
    storage: Box<dyn Storage>,
    key: String,
    ids: HashSet<RecipeId>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("key", &self.key)
            .field("ids", &self.ids())
            .finish()
    }
}

impl FavoritesStore {
    /// Loads the favourites stored under `key`.
    ///
    /// A missing, unreadable or malformed value yields an empty set.
    pub fn load(storage: impl Storage + 'static, key: &str) -> Self {
        let ids = match storage.read(key) {
            Ok(Some(raw)) => parse_ids(&raw),
            Ok(None) => HashSet::new(),
            Err(e) => {
                warn!(key, error = %e, "Could not read favorites, starting empty");
                HashSet::new()
            }
        };
        debug!(key, count = ids.len(), "Loaded favorites");

        FavoritesStore {
            storage: Box::new(storage),
            key: key.to_string(),
            ids,
        }
    }

    /// An empty store that lives only in memory.
    pub fn in_memory() -> Self {
        Self::load(MemoryStorage::new(), DEFAULT_FAVORITES_KEY)
    }

    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.ids.contains(&id)
    }

    /// Flips the membership of `id` and persists the whole set.
    ///
    /// Returns the new membership. If persisting fails the change is undone,
    /// so the in-memory set always matches what was last written.
    pub fn toggle(&mut self, id: RecipeId) -> Result<bool, FavoritesError> {
        let now_favorite = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };

        if let Err(e) = self.persist() {
            warn!(id, error = %e, "Failed to persist favorite toggle, reverting");
            if now_favorite {
                self.ids.remove(&id);
            } else {
                self.ids.insert(id);
            }
            return Err(e);
        }

        debug!(id, favorite = now_favorite, "Toggled favorite");
        Ok(now_favorite)
    }

    /// Favourite ids in ascending order.
    pub fn ids(&self) -> Vec<RecipeId> {
        let mut ids: Vec<RecipeId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn persist(&mut self) -> Result<(), FavoritesError> {
        let encoded = serde_json::to_string(&self.ids())?;
        self.storage.write(&self.key, &encoded)?;
        Ok(())
    }
}

fn parse_ids(raw: &str) -> HashSet<RecipeId> {
    match serde_json::from_str::<Vec<RecipeId>>(raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            warn!(error = %e, "Malformed favorites data, starting empty");
            HashSet::new()
        }
    }
}
