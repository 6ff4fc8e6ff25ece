//! Stateful filter view-model backing the search bar and category chips.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::{CatalogRecord, Category, matches};

/// Filtered, searchable view over a static record list.
///
/// Changing the category or query marks the view as loading. [`refresh`]
/// waits out the configured synthetic delay and then publishes the new
/// results; [`apply`] publishes them immediately. Both produce the same
/// result for the same inputs.
///
/// [`refresh`]: CatalogFilter::refresh
/// [`apply`]: CatalogFilter::apply
#[derive(Debug, Clone)]
pub struct CatalogFilter<T> {
    records: Arc<Vec<T>>,
    category: Category,
    query: String,
    delay: Duration,
    visible: Vec<usize>,
    loading: bool,
}

impl<T: CatalogRecord> CatalogFilter<T> {
    /// Create a view showing every record.
    #[must_use]
    pub fn new(records: Arc<Vec<T>>, delay: Duration) -> Self {
        let visible = (0..records.len()).collect();
        Self {
            records,
            category: Category::All,
            query: String::new(),
            delay,
            visible,
            loading: false,
        }
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// True between an input change and the next publish.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_category(&mut self, category: Category) {
        if self.category != category {
            self.category = category;
            self.loading = true;
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.query != query {
            self.query = query;
            self.loading = true;
        }
    }

    /// Records matching the current inputs, computed now.
    #[must_use]
    pub fn compute(&self) -> Vec<&T> {
        self.matching_indices()
            .into_iter()
            .filter_map(|i| self.records.get(i))
            .collect()
    }

    /// Results as of the last publish.
    #[must_use]
    pub fn results(&self) -> Vec<&T> {
        self.visible
            .iter()
            .filter_map(|&i| self.records.get(i))
            .collect()
    }

    /// Publish results for the current inputs without delay.
    ///
    /// Returns the number of visible records.
    pub fn apply(&mut self) -> usize {
        self.visible = self.matching_indices();
        self.loading = false;
        debug!(
            category = %self.category,
            query = %self.query,
            results = self.visible.len(),
            "catalog filter applied"
        );
        self.visible.len()
    }

    /// Wait out the synthetic delay, then publish.
    ///
    /// Returns the number of visible records.
    pub async fn refresh(&mut self) -> usize {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.apply()
    }

    fn matching_indices(&self) -> Vec<usize> {
        let needle = self.query.trim().to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| matches(*r, &self.category, &needle))
            .map(|(i, _)| i)
            .collect()
    }
}
