//! The catalog query pipeline.

use crate::catalog::Product;
use crate::search::collate::collate;
use crate::search::query::SearchTerm;
use crate::search::{QueryCriteria, SortOrder};

/// Narrow and order `products` for display.
///
/// Steps run in a fixed order: category filter, then search filter, then a
/// stable sort of what is left. The input is never modified and the same
/// inputs always give the same, identically ordered output. There is no
/// failure mode: an empty result is a valid result.
pub fn apply_query(products: &[Product], criteria: &QueryCriteria) -> Vec<Product> {
    let term = SearchTerm::new(&criteria.search_term);

    let mut visible: Vec<Product> = products
        .iter()
        .filter(|p| criteria.category.admits(p))
        .filter(|p| term.admits(p))
        .cloned()
        .collect();

    sort_products(&mut visible, criteria.sort_order);

    tracing::trace!(
        catalog = products.len(),
        visible = visible.len(),
        sort = %criteria.sort_order,
        "query applied"
    );
    visible
}

/// Stable sort by `order`; ties keep their relative order.
pub fn sort_products(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::Default => {}
        SortOrder::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::NameAsc => products.sort_by(|a, b| collate(&a.title, &b.title)),
        SortOrder::NameDesc => products.sort_by(|a, b| collate(&b.title, &a.title)),
    }
}

/// Listing headline, e.g. "Showing 3 products".
pub fn result_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Showing {count} product{plural}")
}
