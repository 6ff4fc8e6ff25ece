//! Profile screen summary: menu entries with count badges.

use core::fmt;

use serde::Serialize;

use crate::state::AppState;

const BADGE_CAP: usize = 99;

/// A count shown next to a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Badge(usize);

impl Badge {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    #[must_use]
    pub const fn count(self) -> usize {
        self.0
    }

    /// Text for the badge, or `None` when it should be hidden.
    ///
    /// Counts above 99 render as `99+`.
    #[must_use]
    pub fn label(self) -> Option<String> {
        match self.0 {
            0 => None,
            n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
            n => Some(n.to_string()),
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().unwrap_or_default())
    }
}

/// One entry in the profile menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub title: &'static str,
    pub icon: &'static str,
    pub badge: Badge,
}

/// Counts backing the profile screen badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProfileSummary {
    pub orders: usize,
    /// Wishlist products, saved herbs and saved articles.
    pub saved_items: usize,
    pub saved_remedies: usize,
}

impl ProfileSummary {
    /// Read the current counts from every store.
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        Self {
            orders: state.orders().len(),
            saved_items: state.wishlist().len()
                + state.saved_herbs().len()
                + state.saved_articles().len(),
            saved_remedies: state.saved_remedies().len(),
        }
    }

    /// Menu entries in display order.
    #[must_use]
    pub fn menu(&self) -> Vec<MenuEntry> {
        vec![
            MenuEntry {
                title: "My Orders",
                icon: "receipt-outline",
                badge: Badge::new(self.orders),
            },
            MenuEntry {
                title: "Saved Items",
                icon: "heart-outline",
                badge: Badge::new(self.saved_items),
            },
            MenuEntry {
                title: "Saved Remedies",
                icon: "bookmark-outline",
                badge: Badge::new(self.saved_remedies),
            },
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::WishlistItem;
    use crate::config::StorefrontConfig;

    #[test]
    fn test_badge_label() {
        assert_eq!(Badge::new(0).label(), None);
        assert_eq!(Badge::new(7).label().as_deref(), Some("7"));
        assert_eq!(Badge::new(99).label().as_deref(), Some("99"));
        assert_eq!(Badge::new(150).label().as_deref(), Some("99+"));
        assert_eq!(Badge::new(0).to_string(), "");
    }

    #[test]
    fn test_summary_counts_saved_items_across_collections() {
        let state = AppState::new(StorefrontConfig::default());
        let catalog = state.catalog().clone();

        let product = catalog.product("neem-kit").unwrap();
        state.wishlist().add(WishlistItem::from(product));
        for herb in catalog.herbs().iter().take(2) {
            state.saved_herbs().add(herb.clone());
        }
        if let Some(recipe) = catalog.recipes().first() {
            state.saved_remedies().add(recipe.clone());
        }

        let summary = ProfileSummary::from_state(&state);
        assert_eq!(
            summary,
            ProfileSummary {
                orders: 0,
                saved_items: 3,
                saved_remedies: 1,
            }
        );

        let menu = summary.menu();
        let titles: Vec<&str> = menu.iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["My Orders", "Saved Items", "Saved Remedies"]);
        assert_eq!(menu.first().unwrap().badge.label(), None);
    }
}
