//! Pagination windows and listing search filters.

use serde::{Deserialize, Serialize};

/// Pagination metadata as reported by the backend on every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// The page this response covers (1-based).
    pub page: u32,
    /// Requested page size.
    pub limit: u32,
    /// Total matching items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub pages: u32,
}

/// The client-side pagination window for a paged collection.
///
/// Recomputed wholesale from each fetch response; only `page` is movable
/// locally, via explicit navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page (1-based).
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Total matching items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

impl Pagination {
    /// Replace the whole window from a fetch response's metadata.
    pub fn absorb(&mut self, meta: PageMeta) {
        self.page = meta.page;
        self.limit = meta.limit;
        self.total = meta.total;
        self.total_pages = meta.pages;
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            total: 0,
            total_pages: 0,
        }
    }
}

/// Sort direction for listing searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// The query-parameter value for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// The active listing search filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingFilters {
    /// Free-text search query. Empty means unfiltered.
    pub search: String,
    /// Category slug. Empty means all categories.
    pub category: String,
    /// Lower price bound.
    pub min_price: Option<f64>,
    /// Upper price bound.
    pub max_price: Option<f64>,
    /// Location filter. Empty means anywhere.
    pub location: String,
    /// Sort key (a backend field name, e.g. "createdAt" or "price").
    pub sort_by: String,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            min_price: None,
            max_price: None,
            location: String::new(),
            sort_by: "createdAt".to_string(),
            sort_order: SortOrder::Desc,
        }
    }
}

impl ListingFilters {
    /// Merge a partial update into the filter set.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(min_price) = patch.min_price {
            self.min_price = min_price;
        }
        if let Some(max_price) = patch.max_price {
            self.max_price = max_price;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(sort_order) = patch.sort_order {
            self.sort_order = sort_order;
        }
    }

    /// Render the filters as query parameters, omitting unset fields.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search".to_string(), self.search.clone()));
        }
        if !self.category.is_empty() {
            pairs.push(("category".to_string(), self.category.clone()));
        }
        if let Some(min_price) = self.min_price {
            pairs.push(("minPrice".to_string(), min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("maxPrice".to_string(), max_price.to_string()));
        }
        if !self.location.is_empty() {
            pairs.push(("location".to_string(), self.location.clone()));
        }
        pairs.push(("sortBy".to_string(), self.sort_by.clone()));
        pairs.push(("sortOrder".to_string(), self.sort_order.as_str().to_string()));
        pairs
    }
}

/// A partial filter update. `None` leaves the field unchanged; price
/// bounds use a nested `Option` so callers can explicitly clear a bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    /// New search query.
    pub search: Option<String>,
    /// New category slug.
    pub category: Option<String>,
    /// New lower price bound (`Some(None)` clears it).
    pub min_price: Option<Option<f64>>,
    /// New upper price bound (`Some(None)` clears it).
    pub max_price: Option<Option<f64>>,
    /// New location filter.
    pub location: Option<String>,
    /// New sort key.
    pub sort_by: Option<String>,
    /// New sort direction.
    pub sort_order: Option<SortOrder>,
}
