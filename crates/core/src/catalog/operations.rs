//! Pure validation rules for catalog writes.

use super::error::{CategoryError, ProductError};
use super::types::NewProduct;

/// Maximum length, in characters, of category and product names.
pub const MAX_NAME_LEN: usize = 100;

/// Validates a category name before insert or update.
pub fn validate_category_name(name: &str) -> Result<(), CategoryError> {
    if name.trim().is_empty() {
        return Err(CategoryError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CategoryError::NameTooLong);
    }
    Ok(())
}

/// Validates the writable fields of a product before insert or update.
pub fn validate_product(product: &NewProduct) -> Result<(), ProductError> {
    if product.name.trim().is_empty() {
        return Err(ProductError::EmptyName);
    }
    if product.name.chars().count() > MAX_NAME_LEN {
        return Err(ProductError::NameTooLong);
    }
    if product.description.trim().is_empty() {
        return Err(ProductError::EmptyDescription);
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(ProductError::InvalidPrice(product.price));
    }
    if product.stock < 0 {
        return Err(ProductError::NegativeStock(product.stock));
    }
    if product.category_id.is_none() {
        return Err(ProductError::MissingCategory);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> NewProduct {
        NewProduct::new("Caneca", 19.9, "Caneca de porcelana", 10, Some(1))
    }

    #[test]
    fn test_valid_category_name() {
        assert!(validate_category_name("Eletrônicos").is_ok());
    }

    #[test]
    fn test_blank_category_name() {
        assert_eq!(validate_category_name("   "), Err(CategoryError::EmptyName));
    }

    #[test]
    fn test_category_name_length_counts_chars() {
        let accented = "é".repeat(MAX_NAME_LEN);
        assert!(validate_category_name(&accented).is_ok());

        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(validate_category_name(&long), Err(CategoryError::NameTooLong));
    }

    #[test]
    fn test_valid_product() {
        assert!(validate_product(&product()).is_ok());
    }

    #[test]
    fn test_free_product_is_valid() {
        let mut free = product();
        free.price = 0.0;
        assert!(validate_product(&free).is_ok());
    }

    #[test]
    fn test_negative_price() {
        let mut invalid = product();
        invalid.price = -0.01;
        assert_eq!(
            validate_product(&invalid),
            Err(ProductError::InvalidPrice(-0.01))
        );
    }

    #[test]
    fn test_nan_price() {
        let mut invalid = product();
        invalid.price = f64::NAN;
        assert!(matches!(
            validate_product(&invalid),
            Err(ProductError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_negative_stock() {
        let mut invalid = product();
        invalid.stock = -1;
        assert_eq!(
            validate_product(&invalid),
            Err(ProductError::NegativeStock(-1))
        );
    }

    #[test]
    fn test_missing_category() {
        let mut invalid = product();
        invalid.category_id = None;
        assert_eq!(validate_product(&invalid), Err(ProductError::MissingCategory));
    }

    #[test]
    fn test_empty_description() {
        let mut invalid = product();
        invalid.description = String::new();
        assert_eq!(
            validate_product(&invalid),
            Err(ProductError::EmptyDescription)
        );
    }
}
