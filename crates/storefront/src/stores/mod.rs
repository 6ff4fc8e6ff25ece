//! In-memory state containers owned by [`AppState`](crate::state::AppState).
//!
//! Every store uses interior mutability so it can be shared by reference.
//! Mutations are confined to the store's own collection; there are no
//! cross-store effects.

pub mod cart;
pub mod orders;
pub mod saved;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use cart::{CartError, CartStore};
pub use orders::OrderStore;
pub use saved::{
    SavedArticles, SavedCollection, SavedEntity, SavedHerbs, SavedRemedies, Saveable, Wishlist,
};

/// Acquire a read guard, recovering the data if a writer panicked.
///
/// Store mutations are single statements on a `Vec`, so a poisoned lock never
/// guards a half-written collection.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Acquire a write guard, recovering the data if a writer panicked.
fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
