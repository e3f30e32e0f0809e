//! Catalog seed sources.
//!
//! Seed files are JSON arrays keyed the way the storefront database names its
//! columns (`nome`, `preco`, ...). Parsing is pure; reading the file is the
//! caller's job.

use serde::{Deserialize, Serialize};

use super::error::SeedError;
use super::types::{NewCategory, NewProduct};

/// One entry of the category seed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "nome")]
    pub name: String,
}

impl CategoryRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn into_new_category(self) -> NewCategory {
        NewCategory::new(self.name)
    }
}

/// One entry of the product seed source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "estoque")]
    pub stock: i64,
    #[serde(rename = "categoria_id", default)]
    pub category_id: Option<i64>,
}

impl ProductRecord {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct::new(
            self.name,
            self.price,
            self.description,
            self.stock,
            self.category_id,
        )
    }
}

/// Parses a category seed source.
///
/// Records with a blank name are rejected so a malformed file aborts the
/// import as a whole.
pub fn parse_category_records(json: &str) -> Result<Vec<CategoryRecord>, SeedError> {
    let records: Vec<CategoryRecord> = serde_json::from_str(json)?;

    if let Some(index) = records.iter().position(|r| r.name.trim().is_empty()) {
        return Err(SeedError::InvalidRecord {
            index,
            reason: "empty category name".to_string(),
        });
    }

    Ok(records)
}

/// Parses a product seed source.
pub fn parse_product_records(json: &str) -> Result<Vec<ProductRecord>, SeedError> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)?;

    if let Some(index) = records.iter().position(|r| r.name.trim().is_empty()) {
        return Err(SeedError::InvalidRecord {
            index,
            reason: "empty product name".to_string(),
        });
    }

    Ok(records)
}
