//! Application state shared across screens.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::checkout::SimulatedPaymentProvider;
use crate::config::StorefrontConfig;
use crate::stores::{CartStore, OrderStore, SavedArticles, SavedHerbs, SavedRemedies, Wishlist};

/// Application state shared across all screens.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog and every store. There are no globals: callers pass this (or a
/// store reference taken from it) to whatever needs it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    payments: SimulatedPaymentProvider,
    cart: CartStore,
    orders: OrderStore,
    wishlist: Wishlist,
    saved_herbs: SavedHerbs,
    saved_articles: SavedArticles,
    saved_remedies: SavedRemedies,
}

impl AppState {
    /// Create a new application state with empty stores.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Catalog::seeded(config.currency);
        let payments = SimulatedPaymentProvider::from_config(&config.payment);
        let cart = CartStore::new(config.currency);
        let orders = OrderStore::new(config.order_prefix.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                payments,
                cart,
                orders,
                wishlist: Wishlist::new("wishlist"),
                saved_herbs: SavedHerbs::new("saved_herbs"),
                saved_articles: SavedArticles::new("saved_articles"),
                saved_remedies: SavedRemedies::new("saved_remedies"),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the static catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the configured payment provider.
    #[must_use]
    pub fn payments(&self) -> &SimulatedPaymentProvider {
        &self.inner.payments
    }

    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }

    #[must_use]
    pub fn wishlist(&self) -> &Wishlist {
        &self.inner.wishlist
    }

    #[must_use]
    pub fn saved_herbs(&self) -> &SavedHerbs {
        &self.inner.saved_herbs
    }

    #[must_use]
    pub fn saved_articles(&self) -> &SavedArticles {
        &self.inner.saved_articles
    }

    #[must_use]
    pub fn saved_remedies(&self) -> &SavedRemedies {
        &self.inner.saved_remedies
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .field("orders", &self.inner.orders.len())
            .field("cart_items", &self.inner.cart.item_count())
            .finish_non_exhaustive()
    }
}
