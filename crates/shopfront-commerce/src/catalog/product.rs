//! Product records as supplied by the product service.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Deserializer, Serialize};

/// Customer rating summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average rating, 0 to 5.
    #[serde(default, deserialize_with = "nullable")]
    pub rate: f64,
    /// Number of reviews.
    #[serde(default, deserialize_with = "nullable")]
    pub count: u64,
}

/// A product in the catalog.
///
/// Read-only to the storefront core. Fields other than `id` may be missing
/// or `null` in the feed; they then take their empty value, which simply
/// never matches a filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product identity.
    pub id: ProductId,
    /// Display title.
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    /// Unit price.
    #[serde(default, deserialize_with = "nullable")]
    pub price: Money,
    /// Long description.
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    /// Category name, compared exactly.
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    /// Image URL.
    #[serde(default, deserialize_with = "nullable")]
    pub image: String,
    /// Rating summary.
    #[serde(default, deserialize_with = "nullable")]
    pub rating: Rating,
}

impl Product {
    /// Create a product with the given identity, title and price.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: String::new(),
            category: String::new(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rate: f64, count: u64) -> Self {
        self.rating = Rating { rate, count };
        self
    }

    /// Price formatted for display (e.g., "$20.00").
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

/// Treat an explicit `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let product = Product::new(1, "Red Shirt", Money::new(2000))
            .with_category("clothing")
            .with_description("A shirt that is red")
            .with_rating(4.5, 120);

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.category, "clothing");
        assert_eq!(product.rating.count, 120);
        assert_eq!(product.price_display(), "$20.00");
    }

    #[test]
    fn test_product_from_service_json() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.cents(), 10995);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.rate, 3.9);
    }

    #[test]
    fn test_partial_product_takes_empty_values() {
        let product: Product =
            serde_json::from_str(r#"{"id": 9, "title": null, "rating": {"rate": 2}}"#).unwrap();

        assert_eq!(product.title, "");
        assert_eq!(product.description, "");
        assert!(product.price.is_zero());
        assert_eq!(product.rating.count, 0);
    }

    #[test]
    fn test_product_without_id_is_rejected() {
        assert!(serde_json::from_str::<Product>(r#"{"title": "Nameless"}"#).is_err());
    }
}
