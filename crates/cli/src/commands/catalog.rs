//! Catalog browsing commands.

use dhanvantari_storefront::catalog::{CatalogFilter, Category};
use dhanvantari_storefront::error::Result;
use dhanvantari_storefront::state::AppState;
use tracing::info;

use super::{emit_json, emit_lines};

/// Print herbs matching `category` and `query`.
///
/// Goes through the same filter view-model the herbs screen uses, including
/// its configured refresh delay.
pub async fn herbs(state: &AppState, category: &str, query: &str, json: bool) -> Result<()> {
    let mut view = CatalogFilter::new(state.catalog().herbs().clone(), state.config().search_delay);
    view.set_category(Category::new(category));
    view.set_query(query);
    let count = view.refresh().await;
    info!(count, category = %view.category(), "herbs listed");

    let results = view.results();
    if json {
        return emit_json(&results);
    }
    if results.is_empty() {
        return emit_lines(["No herbs found"]);
    }
    emit_lines(results.iter().map(|herb| {
        format!(
            "{:<26} {:<24} [{}]",
            herb.name,
            herb.scientific_name,
            herb.tags.join(", ")
        )
    }))
}

/// Print articles matching `query`.
pub async fn articles(state: &AppState, query: &str, json: bool) -> Result<()> {
    let mut view = CatalogFilter::new(
        state.catalog().articles().clone(),
        state.config().search_delay,
    );
    view.set_query(query);
    view.refresh().await;

    let results = view.results();
    if json {
        return emit_json(&results);
    }
    if results.is_empty() {
        return emit_lines(["No articles found"]);
    }
    emit_lines(results.iter().map(|article| {
        format!(
            "{} - {} ({} min read)",
            article.title, article.author, article.read_time_minutes
        )
    }))
}

/// Print featured products.
pub fn products(state: &AppState, json: bool) -> Result<()> {
    let products = state.catalog().products();
    if json {
        return emit_json(products.as_slice());
    }
    emit_lines(products.iter().map(|product| {
        format!(
            "{:<18} {:<18} {:>9}  {} ({} reviews)",
            product.id.as_str(),
            product.name,
            product.price.display(),
            product.rating,
            product.reviews
        )
    }))
}
