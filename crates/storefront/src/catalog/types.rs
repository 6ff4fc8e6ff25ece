//! Catalog record types.

use dhanvantari_core::{ArticleId, CourseId, HerbId, Price, ProductId, RecipeId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CatalogRecord;
use crate::stores::Saveable;

/// A medicinal herb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Herb {
    pub id: HerbId,
    pub name: String,
    pub scientific_name: String,
    pub benefits: Vec<String>,
    pub description: String,
    /// Lowercase category tags (e.g. `immune`, `stress`).
    pub tags: Vec<String>,
    pub image_url: String,
}

/// A category chip on the herbs tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HerbCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// An educational article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub author: String,
    pub summary: String,
    pub read_time_minutes: u32,
    pub published: String,
    pub tags: Vec<String>,
    pub image_url: String,
}

impl Article {
    /// Text used when sharing the article.
    #[must_use]
    pub fn share_message(&self) -> String {
        format!("Check out this interesting article on {}!", self.title)
    }
}

/// A course in the learn tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub instructor: String,
    pub duration: String,
    pub level: String,
    pub lessons: u32,
    /// Completion in `0.0..=1.0`.
    pub progress: f32,
    pub image_url: String,
}

impl Course {
    /// Completion as a whole percentage.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=100
    pub fn progress_percent(&self) -> u8 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// A home remedy recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub prep_time_minutes: u32,
    pub tags: Vec<String>,
    pub image_url: String,
}

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Average rating out of 5.
    pub rating: Decimal,
    pub reviews: u32,
    pub tags: Vec<String>,
    pub image_url: String,
}

/// A product saved to the wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_url: String,
}

impl From<&Product> for WishlistItem {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}

// =============================================================================
// CatalogRecord implementations
// =============================================================================

impl CatalogRecord for Herb {
    fn name(&self) -> &str {
        &self.name
    }

    fn alternate_name(&self) -> Option<&str> {
        Some(&self.scientific_name)
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl CatalogRecord for Article {
    fn name(&self) -> &str {
        &self.title
    }

    fn alternate_name(&self) -> Option<&str> {
        Some(&self.author)
    }

    fn description(&self) -> &str {
        &self.summary
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl CatalogRecord for Recipe {
    fn name(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl CatalogRecord for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

// =============================================================================
// Saveable implementations
// =============================================================================

impl Saveable for Herb {
    type Id = HerbId;

    fn saved_id(&self) -> HerbId {
        self.id.clone()
    }
}

impl Saveable for Article {
    type Id = ArticleId;

    fn saved_id(&self) -> ArticleId {
        self.id.clone()
    }
}

impl Saveable for Recipe {
    type Id = RecipeId;

    fn saved_id(&self) -> RecipeId {
        self.id.clone()
    }
}

impl Saveable for WishlistItem {
    type Id = ProductId;

    fn saved_id(&self) -> ProductId {
        self.product_id.clone()
    }
}
