// SPDX-License-Identifier: MPL-2.0
//! Inventory domain types.
//!
//! - [`ProductDraft`]: raw product form input
//! - [`Product`]: validated catalogue entry
//! - [`Catalogue`]: in-memory list of products keyed by SKU

mod product;

pub use product::{
    Field, FieldErrors, Product, ProductDraft, DEFAULT_CATEGORIES, NO_DESCRIPTION,
};

/// In-memory product catalogue for the current session.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    products: Vec<Product>,
}

impl Catalogue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product unless its SKU is already present.
    ///
    /// Returns `false` when the SKU is taken.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains_sku(&product.sku) {
            return false;
        }
        self.products.push(product);
        true
    }

    #[must_use]
    pub fn contains_sku(&self, sku: &str) -> bool {
        self.products.iter().any(|p| p.sku.eq_ignore_ascii_case(sku))
    }

    /// Products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: &str) -> Product {
        Product {
            name: "Incubator".into(),
            sku: sku.into(),
            category: "Equipment".into(),
            price: 120.0,
            cost: 120.0,
            stock: 2,
            unit: "piece".into(),
            expiry_date: None,
            description: NO_DESCRIPTION.into(),
        }
    }

    #[test]
    fn duplicate_sku_is_rejected_case_insensitively() {
        let mut catalogue = Catalogue::new();
        assert!(catalogue.add(product("EQ-7")));
        assert!(!catalogue.add(product("eq-7")));
        assert_eq!(catalogue.len(), 1);
    }

    #[test]
    fn products_keep_insertion_order() {
        let mut catalogue = Catalogue::new();
        catalogue.add(product("A"));
        catalogue.add(product("B"));
        let skus: Vec<_> = catalogue.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["A", "B"]);
    }
}
