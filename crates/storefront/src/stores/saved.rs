//! Saved collections: wishlist, saved herbs, saved articles, saved remedies.
//!
//! All four are the same keyed collection, [`SavedCollection`], instantiated
//! per entity kind. A collection holds at most one entry per identifier and
//! lists entries in insertion order.

use std::fmt;
use std::hash::Hash;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{read, write};
use crate::catalog::{Article, Herb, Recipe, WishlistItem};

/// An entity that can be saved into a [`SavedCollection`].
pub trait Saveable: Clone {
    /// Identifier used for uniqueness within a collection.
    type Id: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// The identifier of this entity.
    fn saved_id(&self) -> Self::Id;
}

/// A saved entity: identifier, snapshot of the catalog record, save time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEntity<T: Saveable> {
    pub id: T::Id,
    pub item: T,
    pub saved_at: DateTime<Utc>,
}

/// Saved wishlist products.
pub type Wishlist = SavedCollection<WishlistItem>;
/// Saved herbs from the herbs tab.
pub type SavedHerbs = SavedCollection<Herb>;
/// Bookmarked articles.
pub type SavedArticles = SavedCollection<Article>;
/// Saved home remedies.
pub type SavedRemedies = SavedCollection<Recipe>;

/// A keyed, insertion-ordered collection of saved entities.
#[derive(Debug)]
pub struct SavedCollection<T: Saveable> {
    name: &'static str,
    entries: RwLock<Vec<SavedEntity<T>>>,
}

impl<T: Saveable> SavedCollection<T> {
    /// Create an empty collection. `name` only appears in logs.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Save an entity.
    ///
    /// Idempotent: if an entry with the same identifier already exists the
    /// collection is unchanged. Returns `true` if a new entry was created.
    pub fn add(&self, item: T) -> bool {
        let id = item.saved_id();
        let mut entries = write(&self.entries);
        if entries.iter().any(|e| e.id == id) {
            debug!(collection = self.name, %id, "already saved");
            return false;
        }
        debug!(collection = self.name, %id, "saved");
        entries.push(SavedEntity {
            id,
            item,
            saved_at: Utc::now(),
        });
        true
    }

    /// Remove an entry. Removing an absent id is a no-op that returns `false`.
    pub fn remove(&self, id: &T::Id) -> bool {
        let mut entries = write(&self.entries);
        let before = entries.len();
        entries.retain(|e| &e.id != id);
        let removed = entries.len() != before;
        if removed {
            debug!(collection = self.name, %id, "removed");
        }
        removed
    }

    /// Save the entity if absent, remove it if present.
    ///
    /// Returns `true` if the entity is saved after the call.
    pub fn toggle(&self, item: T) -> bool {
        let id = item.saved_id();
        if self.remove(&id) {
            false
        } else {
            self.add(item)
        }
    }

    /// Whether an entity with this id is saved.
    #[must_use]
    pub fn contains(&self, id: &T::Id) -> bool {
        read(&self.entries).iter().any(|e| &e.id == id)
    }

    /// Snapshot of the collection in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<SavedEntity<T>> {
        read(&self.entries).clone()
    }

    /// Number of saved entries.
    #[must_use]
    pub fn len(&self) -> usize {
        read(&self.entries).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
