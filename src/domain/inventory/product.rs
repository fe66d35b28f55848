// SPDX-License-Identifier: MPL-2.0
//! Product drafts and their validation.
//!
//! A [`ProductDraft`] holds the raw text a user typed into the product form.
//! [`ProductDraft::validate`] checks that every required field is present and
//! that numeric fields parse to positive values, producing a [`Product`].

use std::collections::BTreeMap;

/// Categories offered when the catalogue has none configured.
pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "Feed & Nutrition",
    "Day Old Chick",
    "Equipment",
    "Eggs & Dairy",
    "Live Birds",
];

/// Description stored when no supplier details were entered.
pub const NO_DESCRIPTION: &str = "No description provided";

/// Editable fields of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    ProductId,
    Category,
    BuyingPrice,
    Quantity,
    Unit,
    ExpiryDate,
    SupplierDetails,
}

impl Field {
    /// Returns the i18n key of the validation message for this field.
    #[must_use]
    pub fn error_key(self) -> &'static str {
        match self {
            Field::Name => "product-error-name",
            Field::ProductId => "product-error-product-id",
            Field::Category => "product-error-category",
            Field::BuyingPrice => "product-error-buying-price",
            Field::Quantity => "product-error-quantity",
            Field::Unit => "product-error-unit",
            Field::ExpiryDate | Field::SupplierDetails => "product-error-generic",
        }
    }
}

/// Per-field validation failures, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    /// Records an error for `field`, replacing any previous one.
    pub fn insert(&mut self, field: Field) {
        self.0.insert(field, field.error_key());
    }

    /// Removes the error recorded for `field`, if any.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Returns the i18n key of the error recorded for `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over failing fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Raw, unvalidated form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub product_id: String,
    pub category: Option<String>,
    pub buying_price: String,
    pub quantity: String,
    pub unit: String,
    pub expiry_date: String,
    pub supplier_details: String,
}

impl ProductDraft {
    /// Sets a text field. Category is set through [`ProductDraft::category`].
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::ProductId => self.product_id = value,
            Field::Category => self.category = Some(value).filter(|v| !v.is_empty()),
            Field::BuyingPrice => self.buying_price = value,
            Field::Quantity => self.quantity = value,
            Field::Unit => self.unit = value,
            Field::ExpiryDate => self.expiry_date = value,
            Field::SupplierDetails => self.supplier_details = value,
        }
    }

    /// Returns the current text of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::ProductId => &self.product_id,
            Field::Category => self.category.as_deref().unwrap_or(""),
            Field::BuyingPrice => &self.buying_price,
            Field::Quantity => &self.quantity,
            Field::Unit => &self.unit,
            Field::ExpiryDate => &self.expiry_date,
            Field::SupplierDetails => &self.supplier_details,
        }
    }

    /// Checks every required field and returns the failures, if any.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name);
        }
        if self.product_id.trim().is_empty() {
            errors.insert(Field::ProductId);
        }
        if self.category.as_deref().is_none_or(str::is_empty) {
            errors.insert(Field::Category);
        }
        if parse_positive_price(&self.buying_price).is_none() {
            errors.insert(Field::BuyingPrice);
        }
        if parse_positive_quantity(&self.quantity).is_none() {
            errors.insert(Field::Quantity);
        }
        if self.unit.trim().is_empty() {
            errors.insert(Field::Unit);
        }

        errors
    }

    /// Validates the draft and converts it into a [`Product`].
    ///
    /// # Errors
    ///
    /// Returns the set of failing fields when any required field is missing
    /// or a numeric field is not a positive number.
    pub fn validate(&self) -> Result<Product, FieldErrors> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        // errors() already proved these parse
        let price = parse_positive_price(&self.buying_price).unwrap_or_default();
        let stock = parse_positive_quantity(&self.quantity).unwrap_or_default();
        let supplier = self.supplier_details.trim();
        let expiry = self.expiry_date.trim();

        Ok(Product {
            name: self.name.trim().to_string(),
            sku: self.product_id.trim().to_string(),
            category: self.category.clone().unwrap_or_default(),
            price,
            cost: price,
            stock,
            unit: self.unit.trim().to_string(),
            expiry_date: (!expiry.is_empty()).then(|| expiry.to_string()),
            description: if supplier.is_empty() {
                NO_DESCRIPTION.to_string()
            } else {
                supplier.to_string()
            },
        })
    }
}

/// A validated catalogue entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub cost: f64,
    pub stock: u32,
    pub unit: String,
    pub expiry_date: Option<String>,
    pub description: String,
}

fn parse_positive_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

fn parse_positive_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ProductDraft {
        ProductDraft {
            name: "Layer Mash".into(),
            product_id: "FEED-001".into(),
            category: Some(DEFAULT_CATEGORIES[0].into()),
            buying_price: "24.50".into(),
            quantity: "40".into(),
            unit: "bag".into(),
            expiry_date: String::new(),
            supplier_details: String::new(),
        }
    }

    #[test]
    fn empty_draft_reports_all_required_fields() {
        let errors = ProductDraft::default().errors();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::ProductId,
                Field::Category,
                Field::BuyingPrice,
                Field::Quantity,
                Field::Unit,
            ]
        );
    }

    #[test]
    fn whitespace_only_text_is_missing() {
        let mut draft = complete_draft();
        draft.name = "   ".into();
        draft.unit = "\t".into();
        let errors = draft.errors();
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Unit));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn non_positive_numbers_are_rejected() {
        let mut draft = complete_draft();
        draft.buying_price = "0".into();
        draft.quantity = "-3".into();
        let errors = draft.errors();
        assert_eq!(errors.get(Field::BuyingPrice), Some("product-error-buying-price"));
        assert_eq!(errors.get(Field::Quantity), Some("product-error-quantity"));
    }

    #[test]
    fn unparsable_numbers_are_rejected() {
        let mut draft = complete_draft();
        draft.buying_price = "abc".into();
        draft.quantity = "2.5".into();
        assert_eq!(draft.errors().len(), 2);
    }

    #[test]
    fn valid_draft_becomes_product() {
        let product = complete_draft().validate().expect("draft should be valid");
        assert_eq!(product.sku, "FEED-001");
        assert_eq!(product.price, 24.5);
        assert_eq!(product.cost, product.price);
        assert_eq!(product.stock, 40);
        assert_eq!(product.description, NO_DESCRIPTION);
        assert!(product.expiry_date.is_none());
    }

    #[test]
    fn supplier_details_become_description() {
        let mut draft = complete_draft();
        draft.supplier_details = "Green Valley Mills".into();
        draft.expiry_date = "2027-01-31".into();
        let product = draft.validate().expect("draft should be valid");
        assert_eq!(product.description, "Green Valley Mills");
        assert_eq!(product.expiry_date.as_deref(), Some("2027-01-31"));
    }

    #[test]
    fn clearing_an_error_removes_only_that_field() {
        let mut errors = ProductDraft::default().errors();
        errors.clear(Field::Name);
        assert!(!errors.contains(Field::Name));
        assert!(errors.contains(Field::Unit));
    }

    #[test]
    fn set_and_get_round_trip_through_fields() {
        let mut draft = ProductDraft::default();
        draft.set(Field::Category, "Equipment".into());
        draft.set(Field::Quantity, "12".into());
        assert_eq!(draft.get(Field::Category), "Equipment");
        assert_eq!(draft.get(Field::Quantity), "12");

        draft.set(Field::Category, String::new());
        assert!(draft.category.is_none());
    }
}
