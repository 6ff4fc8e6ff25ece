//! Static catalog data and the catalog filter view-model.
//!
//! The catalog (herbs, articles, courses, remedies, products) is supplied at
//! startup and never mutated. Screens derive filtered views from it with
//! [`filter_records`] or the stateful [`CatalogFilter`].

pub mod data;
mod filter;
mod types;

use core::fmt;
use core::str::FromStr;
use std::convert::Infallible;
use std::sync::Arc;

use dhanvantari_core::CurrencyCode;

pub use filter::CatalogFilter;
pub use types::{Article, Course, Herb, HerbCategory, Product, Recipe, WishlistItem};

/// Fields the filter view-model searches over.
pub trait CatalogRecord {
    /// Primary display name.
    fn name(&self) -> &str;

    /// Scientific or alternate name, if any.
    fn alternate_name(&self) -> Option<&str> {
        None
    }

    /// Free-text description.
    fn description(&self) -> &str;

    /// Category tags, compared case-insensitively.
    fn tags(&self) -> &[String];
}

/// Active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    /// Every record passes.
    #[default]
    All,
    /// Only records tagged with this category pass.
    Named(String),
}

impl Category {
    /// Build a category from a display name; `"All"` (any case) maps to
    /// [`Category::All`].
    #[must_use]
    pub fn new(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(name.to_owned())
        }
    }

    /// Whether a record with these tags passes the filter.
    #[must_use]
    pub fn admits(&self, tags: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => tags.iter().any(|t| t.eq_ignore_ascii_case(name)),
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Whether `record` passes both the category and the (already lowercased)
/// query filter.
fn matches<T: CatalogRecord>(record: &T, category: &Category, needle: &str) -> bool {
    if !category.admits(record.tags()) {
        return false;
    }
    if needle.is_empty() {
        return true;
    }
    let contains = |field: &str| field.to_lowercase().contains(needle);
    contains(record.name())
        || record.alternate_name().is_some_and(contains)
        || contains(record.description())
}

/// Filter `records` by category and free-text query.
///
/// The query is trimmed and matched case-insensitively as a substring of the
/// name, alternate name and description. An empty query passes everything.
/// Both filters must pass. Backing order is preserved.
#[must_use]
pub fn filter_records<'a, T: CatalogRecord>(
    records: &'a [T],
    category: &Category,
    query: &str,
) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|r| matches(*r, category, &needle))
        .collect()
}

/// The full static catalog, shared cheaply via `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    herbs: Arc<Vec<Herb>>,
    herb_categories: Arc<Vec<HerbCategory>>,
    articles: Arc<Vec<Article>>,
    courses: Arc<Vec<Course>>,
    recipes: Arc<Vec<Recipe>>,
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Load the built-in catalog with product prices in `currency`.
    #[must_use]
    pub fn seeded(currency: CurrencyCode) -> Self {
        Self {
            herbs: Arc::new(data::herbs()),
            herb_categories: Arc::new(data::herb_categories()),
            articles: Arc::new(data::articles()),
            courses: Arc::new(data::courses()),
            recipes: Arc::new(data::recipes()),
            products: Arc::new(data::featured_products(currency)),
        }
    }

    #[must_use]
    pub fn herbs(&self) -> &Arc<Vec<Herb>> {
        &self.herbs
    }

    #[must_use]
    pub fn herb_categories(&self) -> &[HerbCategory] {
        &self.herb_categories
    }

    #[must_use]
    pub fn articles(&self) -> &Arc<Vec<Article>> {
        &self.articles
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn recipes(&self) -> &Arc<Vec<Recipe>> {
        &self.recipes
    }

    #[must_use]
    pub fn products(&self) -> &Arc<Vec<Product>> {
        &self.products
    }

    /// Find a product by id.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }
}
