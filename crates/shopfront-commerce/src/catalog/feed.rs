//! The full product sequence for a session.

use crate::catalog::{categories, category_options, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{apply_query, QueryCriteria};

/// The catalog as supplied by the presentation layer, in service order.
///
/// The storefront never fetches it; whoever owns the network call hands the
/// payload in once per session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap an already-decoded product sequence.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Decode the product service's JSON array payload.
    pub fn from_json(payload: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(payload)?;
        tracing::debug!(products = products.len(), "catalog decoded");
        Ok(Self { products })
    }

    /// All products, in service order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<String> {
        categories(&self.products)
    }

    /// Category picker options, `"all"` first.
    pub fn category_options(&self) -> Vec<String> {
        category_options(&self.products)
    }

    /// Run the query pipeline over this catalog.
    pub fn query(&self, criteria: &QueryCriteria) -> Vec<Product> {
        apply_query(&self.products, criteria)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::from_products(products)
    }
}
