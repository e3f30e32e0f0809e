use thiserror::Error;

/// Errors that can occur when validating a category.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category name cannot be empty")]
    EmptyName,
    #[error("Category name too long (max 100 characters)")]
    NameTooLong,
}

/// Errors that can occur when validating a product.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductError {
    #[error("Product name cannot be empty")]
    EmptyName,
    #[error("Product name too long (max 100 characters)")]
    NameTooLong,
    #[error("Product description cannot be empty")]
    EmptyDescription,
    #[error("Product price must be a non-negative number: {0}")]
    InvalidPrice(f64),
    #[error("Product stock cannot be negative: {0}")]
    NegativeStock(i64),
    #[error("Product category is required")]
    MissingCategory,
}

/// Errors that can occur when reading a catalog seed source.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Malformed seed data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Invalid seed record at position {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}
