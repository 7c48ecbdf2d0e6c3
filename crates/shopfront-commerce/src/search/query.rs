//! Query criteria for the product listing.

use crate::catalog::{Product, ALL_CATEGORIES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep catalog order.
    #[default]
    Default,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by title A-Z.
    NameAsc,
    /// Sort by title Z-A.
    NameDesc,
}

impl SortOrder {
    /// Every sort order, in picker order.
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Default,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
    ];

    /// Wire token (e.g., "price-asc").
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Default => "Default",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
            SortOrder::NameAsc => "Name: A-Z",
            SortOrder::NameDesc => "Name: Z-A",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| format!("unknown sort order: {s}"))
    }
}

/// Which categories the listing admits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// The `"all"` sentinel: no filtering.
    #[default]
    All,
    /// Only products whose category equals this string exactly.
    Only(String),
}

impl CategoryFilter {
    /// Check whether `product` passes this filter.
    pub fn admits(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        if s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(category) => category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current search/filter/sort selection driving the listing.
///
/// Owned by the presentation layer, rebuilt on every input change and passed
/// to [`apply_query`](crate::search::apply_query) by reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryCriteria {
    /// Case-insensitive substring matched against title or description.
    pub search_term: String,
    /// Category filter.
    pub category: CategoryFilter,
    /// Sort order applied last.
    pub sort_order: SortOrder,
}

impl QueryCriteria {
    /// Criteria that show the whole catalog in catalog order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the category filter (`"all"` disables it).
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Back to showing everything in catalog order.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether these criteria leave the catalog untouched.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Check whether `product` passes the category and search filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.admits(product) && SearchTerm::new(&self.search_term).admits(product)
    }
}

/// A search term lower-cased once for repeated matching.
pub(crate) struct SearchTerm(Option<String>);

impl SearchTerm {
    pub(crate) fn new(term: &str) -> Self {
        if term.is_empty() {
            SearchTerm(None)
        } else {
            SearchTerm(Some(term.to_lowercase()))
        }
    }

    pub(crate) fn admits(&self, product: &Product) -> bool {
        match &self.0 {
            None => true,
            Some(term) => {
                product.title.to_lowercase().contains(term.as_str())
                    || product.description.to_lowercase().contains(term.as_str())
            }
        }
    }
}
