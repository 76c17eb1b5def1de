//! Persisted favorites list.
//!
//! The whole list lives as one JSON array in a single named slot. Every
//! query reads the slot and every mutation rewrites it, so there is no
//! cached copy to go stale. A missing or unreadable slot reads as an empty
//! list.

use rf_civic::Representative;
use std::sync::Arc;
use thiserror::Error;

use crate::store::{KeyValueStore, StoreError};

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "rep-favorites";

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to serialize favorites: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Deduplicated, insertion-ordered list of representatives keyed by
/// (name, office).
#[derive(Clone)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    slot: String,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
        }
    }

    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Every favorite, in the order it was added.
    #[must_use]
    pub fn list_all(&self) -> Vec<Representative> {
        let raw = match self.store.get(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(slot = %self.slot, error = %err, "favorites unreadable, treating as empty");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(slot = %self.slot, error = %err, "favorites corrupt, treating as empty");
            Vec::new()
        })
    }

    #[must_use]
    pub fn is_favorite(&self, name: &str, office: &str) -> bool {
        self.list_all().iter().any(|f| f.is_same(name, office))
    }

    /// Append `rep` unless a record with the same identity is already saved.
    ///
    /// Returns `true` if the list changed.
    ///
    /// # Errors
    /// Returns an error if the updated list cannot be written.
    pub fn add(&self, rep: Representative) -> Result<bool, FavoritesError> {
        let mut favorites = self.list_all();
        if favorites.iter().any(|f| f.is_same(&rep.name, &rep.office)) {
            return Ok(false);
        }

        favorites.push(rep);
        self.save(&favorites)?;
        Ok(true)
    }

    /// Drop every record with this identity, keeping the rest in order.
    ///
    /// Returns `true` if anything was removed.
    ///
    /// # Errors
    /// Returns an error if the updated list cannot be written.
    pub fn remove(&self, name: &str, office: &str) -> Result<bool, FavoritesError> {
        let mut favorites = self.list_all();
        let before = favorites.len();
        favorites.retain(|f| !f.is_same(name, office));

        if favorites.len() == before {
            return Ok(false);
        }

        self.save(&favorites)?;
        Ok(true)
    }

    /// Remove `rep` if saved, otherwise append it.
    ///
    /// Returns whether `rep` is a favorite afterwards.
    ///
    /// # Errors
    /// Returns an error if the updated list cannot be written.
    pub fn toggle(&self, rep: Representative) -> Result<bool, FavoritesError> {
        let mut favorites = self.list_all();

        let now_favorite = if favorites.iter().any(|f| f.is_same(&rep.name, &rep.office)) {
            favorites.retain(|f| !f.is_same(&rep.name, &rep.office));
            false
        } else {
            favorites.push(rep);
            true
        };

        self.save(&favorites)?;
        Ok(now_favorite)
    }

    fn save(&self, favorites: &[Representative]) -> Result<(), FavoritesError> {
        let raw = serde_json::to_string(favorites)?;
        self.store.set(&self.slot, &raw)?;
        tracing::debug!(slot = %self.slot, count = favorites.len(), "favorites saved");
        Ok(())
    }
}
