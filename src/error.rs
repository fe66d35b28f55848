// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Diagnostics(String),
    Product(ProductError),
}

/// Reasons a product draft can be rejected.
/// Used to pick a localized notification message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// One or more required fields are missing or invalid.
    Validation {
        /// Number of fields that failed validation.
        fields: usize,
    },

    /// A product with the same SKU is already in the catalogue.
    DuplicateSku(String),
}

impl ProductError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ProductError::Validation { .. } => "notification-product-invalid",
            ProductError::DuplicateSku(_) => "notification-product-duplicate",
        }
    }
}

impl fmt::Display for ProductError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductError::Validation { fields } => {
                write!(f, "{} field(s) failed validation", fields)
            }
            ProductError::DuplicateSku(sku) => write!(f, "Duplicate SKU: {}", sku),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Diagnostics(e) => write!(f, "Diagnostics Error: {}", e),
            Error::Product(e) => write!(f, "Product Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ProductError> for Error {
    fn from(err: ProductError) -> Self {
        Error::Product(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Diagnostics(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_variant() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn product_error_i18n_keys() {
        assert_eq!(
            ProductError::Validation { fields: 2 }.i18n_key(),
            "notification-product-invalid"
        );
        assert_eq!(
            ProductError::DuplicateSku("SKU-1".into()).i18n_key(),
            "notification-product-duplicate"
        );
    }

    #[test]
    fn product_error_display_mentions_sku() {
        let err: Error = ProductError::DuplicateSku("EGG-12".to_string()).into();
        assert!(format!("{}", err).contains("EGG-12"));
    }
}
