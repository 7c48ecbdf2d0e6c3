//! Category listing derived from the catalog itself.

use crate::catalog::Product;

/// Sentinel category that disables the category filter.
pub const ALL_CATEGORIES: &str = "all";

/// Distinct product categories in first-seen catalog order.
///
/// Products with an empty category contribute nothing.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if product.category.is_empty() || seen.contains(&product.category) {
            continue;
        }
        seen.push(product.category.clone());
    }
    seen
}

/// Options for a category picker: the `"all"` sentinel followed by
/// [`categories`].
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    options.extend(categories(products));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: i64, category: &str) -> Product {
        Product::new(id, format!("p{id}"), Money::new(100)).with_category(category)
    }

    #[test]
    fn test_categories_distinct_in_catalog_order() {
        let products = vec![
            product(1, "home"),
            product(2, "clothing"),
            product(3, "home"),
            product(4, ""),
            product(5, "jewelery"),
        ];

        assert_eq!(categories(&products), vec!["home", "clothing", "jewelery"]);
    }

    #[test]
    fn test_category_options_start_with_all() {
        let options = category_options(&[product(1, "home")]);
        assert_eq!(options, vec!["all", "home"]);
    }

    #[test]
    fn test_empty_catalog_has_only_all() {
        assert!(categories(&[]).is_empty());
        assert_eq!(category_options(&[]), vec!["all"]);
    }
}
