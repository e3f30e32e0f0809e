use serde::Deserialize;

use vitrine_core::catalog::{
    validate_product, NewProduct, Page, Product, ProductError, SearchQuery, SortOrder,
};
use vitrine_core::serde::deserialize_optional_id;

/// Request payload for creating a new product.
#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: i64,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category_id: Option<i64>,
}

impl CreateProduct {
    /// Validates the request and converts it into a NewProduct.
    pub fn into_new_product(self) -> Result<NewProduct, ProductError> {
        let product = NewProduct::new(
            self.name.trim(),
            self.price,
            self.description.trim(),
            self.stock,
            self.category_id,
        );
        validate_product(&product)?;
        Ok(product)
    }
}

/// Request payload for updating a product. Every writable field is replaced.
#[derive(Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: i64,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category_id: Option<i64>,
}

impl UpdateProduct {
    /// Applies the update to a stored product after validating it.
    pub fn apply_to(self, product: &Product) -> Result<Product, ProductError> {
        let fields = NewProduct::new(
            self.name.trim(),
            self.price,
            self.description.trim(),
            self.stock,
            self.category_id,
        );
        validate_product(&fields)?;

        let mut updated = product.clone();
        updated.name = fields.name;
        updated.price = fields.price;
        updated.description = fields.description;
        updated.stock = fields.stock;
        updated.category_id = fields.category_id;
        Ok(updated)
    }
}

/// Query parameters for listing products.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    /// Restrict the listing to one category
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category_id: Option<i64>,
}

/// Query parameters for the product search.
///
/// Short names follow the storefront URLs: `q` term, `p` page, `tp` page
/// size, `o` order code.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_page")]
    pub p: u32,
    #[serde(default)]
    pub tp: Option<u32>,
    #[serde(default = "default_order")]
    pub o: i64,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub category_id: Option<i64>,
}

fn default_page() -> u32 {
    1
}

fn default_order() -> i64 {
    1
}

impl SearchParams {
    /// Builds the search, falling back to `default_page_size` when `tp` is absent.
    pub fn into_query(self, default_page_size: u32) -> SearchQuery {
        let page = Page::new(self.p, self.tp.unwrap_or(default_page_size));

        SearchQuery::new(self.q.trim())
            .with_page(page)
            .with_order(SortOrder::from_code(self.o))
            .with_category(self.category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create() -> CreateProduct {
        CreateProduct {
            name: " Caneca ".to_string(),
            price: 19.9,
            description: "Porcelana".to_string(),
            stock: 10,
            category_id: Some(2),
        }
    }

    #[test]
    fn test_create_into_new_product() {
        let product = create().into_new_product().unwrap();

        assert_eq!(product.name, "Caneca");
        assert_eq!(product.category_id, Some(2));
    }

    #[test]
    fn test_create_rejects_negative_stock() {
        let mut payload = create();
        payload.stock = -1;

        assert_eq!(
            payload.into_new_product(),
            Err(ProductError::NegativeStock(-1))
        );
    }

    #[test]
    fn test_create_requires_category() {
        let payload: CreateProduct = serde_json::from_str(
            r#"{"name": "Caneca", "price": 19.9, "description": "Porcelana", "stock": 1, "category_id": ""}"#,
        )
        .unwrap();

        assert_eq!(payload.into_new_product(), Err(ProductError::MissingCategory));
    }

    #[test]
    fn test_update_keeps_identity_and_flags() {
        let stored = NewProduct::new("Caneca", 19.9, "Porcelana", 10, Some(2)).into_product(8);
        let payload = UpdateProduct {
            name: "Caneca grande".to_string(),
            price: 24.9,
            description: "Porcelana".to_string(),
            stock: 4,
            category_id: Some(3),
        };

        let updated = payload.apply_to(&stored).unwrap();

        assert_eq!(updated.id, 8);
        assert!(updated.active);
        assert_eq!(updated.name, "Caneca grande");
        assert_eq!(updated.category_id, Some(3));
    }

    #[test]
    fn test_search_params_defaults() {
        let params: SearchParams = serde_json::from_str("{}").unwrap();

        let query = params.into_query(6);

        assert_eq!(query.term, "");
        assert_eq!(query.page, Page::new(1, 6));
        assert_eq!(query.order, SortOrder::NameAsc);
        assert_eq!(query.category_id, None);
    }

    #[test]
    fn test_search_params_into_query() {
        let params = SearchParams {
            q: " abc ".to_string(),
            p: 3,
            tp: Some(6),
            o: 2,
            category_id: Some(4),
        };

        let query = params.into_query(12);

        assert_eq!(query.term, "abc");
        assert_eq!(query.page.offset(), 12);
        assert_eq!(query.order, SortOrder::PriceAsc);
        assert_eq!(query.category_id, Some(4));
    }
}
